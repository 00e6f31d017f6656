//! Order handlers
//!
//! Order placement and status changes

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};

use crate::entity::orders::OrderResponse;
use crate::error::AppResult;
use crate::service::order::{OrderCreateRequest, OrderStatusChangeRequest};
use crate::state::AppState;

/// POST /api/orders
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<OrderCreateRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(req) = payload?;
    let order = state.orders().create(req).await?;
    let location = format!("/api/orders/{}", order.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(order)))
}

/// GET /api/orders
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<OrderResponse>>> {
    Ok(Json(state.orders().list().await?))
}

/// PUT /api/orders/:order_id/order-status
pub async fn change_order_status(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
    payload: Result<Json<OrderStatusChangeRequest>, JsonRejection>,
) -> AppResult<Json<OrderResponse>> {
    let Json(req) = payload?;
    Ok(Json(state.orders().change_order_status(order_id, req).await?))
}
