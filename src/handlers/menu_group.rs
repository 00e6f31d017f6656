//! Menu group handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};

use crate::entity::menu_group::MenuGroupResponse;
use crate::error::AppResult;
use crate::service::menu_group::MenuGroupCreateRequest;
use crate::state::AppState;

/// POST /api/menu-groups
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<MenuGroupCreateRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(req) = payload?;
    let menu_group = state.menu_groups().create(req).await?;
    let location = format!("/api/menu-groups/{}", menu_group.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(menu_group)))
}

/// GET /api/menu-groups
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MenuGroupResponse>>> {
    Ok(Json(state.menu_groups().list().await?))
}
