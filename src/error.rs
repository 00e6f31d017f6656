use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use sea_orm::TransactionError;
use serde::Serialize;
use thiserror::Error;

/// Domain rule violations.
///
/// Every variant is reported to the caller as a bad request. Absence and
/// invalid state share that status code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KitchenError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("price must not be negative: {0}")]
    InvalidPrice(Decimal),

    #[error("name must not be blank")]
    BlankName,

    #[error("quantity out of range: {0}")]
    InvalidQuantity(i64),

    #[error("product {0} does not exist")]
    ProductNotFound(i64),

    #[error("menu group {0} does not exist")]
    MenuGroupNotFound(i64),

    #[error("price is out of range")]
    PriceOverflow,

    #[error("menu price {price} exceeds the sum of its products {sum}")]
    MenuPriceExceedsProducts { price: Decimal, sum: Decimal },

    #[error("order must contain at least one line item")]
    EmptyOrderLineItems,

    #[error("order references {requested} menus but only {found} exist")]
    MenuNotFound { requested: usize, found: u64 },

    #[error("order table {0} does not exist")]
    OrderTableNotFound(i64),

    #[error("requested {requested} order tables but only {found} exist")]
    OrderTablesNotFound { requested: usize, found: usize },

    #[error("order table {0} is empty")]
    OrderTableEmpty(i64),

    #[error("order table {0} is not empty")]
    OrderTableNotEmpty(i64),

    #[error("order table {0} already belongs to a table group")]
    OrderTableAlreadyGrouped(i64),

    #[error("number of guests must not be negative: {0}")]
    NegativeNumberOfGuests(i32),

    #[error("order {0} does not exist")]
    OrderNotFound(i64),

    #[error("order {0} is already completed")]
    OrderAlreadyCompleted(i64),

    #[error("a table group needs at least 2 order tables, got {0}")]
    TableGroupTooSmall(usize),

    #[error("table group {0} does not exist")]
    TableGroupNotFound(i64),

    #[error("order tables still have orders in cooking or meal")]
    OrderInProgress,
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] KitchenError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    code: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match &self {
            AppError::Domain(err) => {
                tracing::warn!("Rejected: {}", err);
                (StatusCode::BAD_REQUEST, "Bad Request", Some(err.to_string()))
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad Request", Some(msg.clone())),
            AppError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database Error", None)
            }
        };

        let body = ErrorResponse {
            code: status.as_u16(),
            message: message.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for application
pub type AppResult<T> = Result<T, AppError>;

/// Malformed or mistyped JSON bodies are bad requests, like any other
/// validation failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<TransactionError<AppError>> for AppError {
    fn from(err: TransactionError<AppError>) -> Self {
        match err {
            TransactionError::Connection(e) => AppError::Database(e),
            TransactionError::Transaction(e) => e,
        }
    }
}
