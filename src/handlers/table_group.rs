//! Table group handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};

use crate::error::AppResult;
use crate::service::table_group::TableGroupCreateRequest;
use crate::state::AppState;

/// POST /api/table-groups
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<TableGroupCreateRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(req) = payload?;
    let group = state.table_groups().create(req).await?;
    let location = format!("/api/table-groups/{}", group.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(group)))
}

/// DELETE /api/table-groups/:table_group_id
pub async fn ungroup(
    State(state): State<AppState>,
    Path(table_group_id): Path<i64>,
) -> AppResult<StatusCode> {
    state.table_groups().ungroup(table_group_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
