//! Order table handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};

use crate::entity::order_table::OrderTableResponse;
use crate::error::AppResult;
use crate::service::table::{ChangeEmptyRequest, ChangeNumberOfGuestsRequest, TableCreateRequest};
use crate::state::AppState;

/// POST /api/tables
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<TableCreateRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(req) = payload?;
    let table = state.tables().create(req).await?;
    let location = format!("/api/tables/{}", table.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(table)))
}

/// GET /api/tables
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<OrderTableResponse>>> {
    Ok(Json(state.tables().list().await?))
}

/// PUT /api/tables/:order_table_id/empty
pub async fn change_empty(
    State(state): State<AppState>,
    Path(order_table_id): Path<i64>,
    payload: Result<Json<ChangeEmptyRequest>, JsonRejection>,
) -> AppResult<Json<OrderTableResponse>> {
    let Json(req) = payload?;
    Ok(Json(state.tables().change_empty(order_table_id, req).await?))
}

/// PUT /api/tables/:order_table_id/number-of-guests
pub async fn change_number_of_guests(
    State(state): State<AppState>,
    Path(order_table_id): Path<i64>,
    payload: Result<Json<ChangeNumberOfGuestsRequest>, JsonRejection>,
) -> AppResult<Json<OrderTableResponse>> {
    let Json(req) = payload?;
    Ok(Json(
        state
            .tables()
            .change_number_of_guests(order_table_id, req)
            .await?,
    ))
}
