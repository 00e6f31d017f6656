//! Product handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};

use crate::entity::product::ProductResponse;
use crate::error::AppResult;
use crate::service::product::ProductCreateRequest;
use crate::state::AppState;

/// POST /api/products
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ProductCreateRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(req) = payload?;
    let product = state.products().create(req).await?;
    let location = format!("/api/products/{}", product.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(product)))
}

/// GET /api/products
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProductResponse>>> {
    Ok(Json(state.products().list().await?))
}
