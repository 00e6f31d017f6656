//! Menu handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};

use crate::entity::menu::MenuResponse;
use crate::error::AppResult;
use crate::service::menu::MenuCreateRequest;
use crate::state::AppState;

/// POST /api/menus
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<MenuCreateRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(req) = payload?;
    let menu = state.menus().create(req).await?;
    let location = format!("/api/menus/{}", menu.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(menu)))
}

/// GET /api/menus
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MenuResponse>>> {
    Ok(Json(state.menus().list().await?))
}
