use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use atrium_types::models::{UserId, WorkspaceId};

use crate::error::ApiError;
use crate::{AppState, RequesterQuery};

pub async fn remove_member(
    State(state): State<AppState>,
    Path((workspace_id, user_id)): Path<(WorkspaceId, UserId)>,
    Query(requester): Query<RequesterQuery>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .directory
        .remove_member(workspace_id, requester.requesting_user_id, user_id)?;
    Ok(StatusCode::NO_CONTENT)
}
