use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use atrium_types::api::{InviteUserRequest, InviteUserResponse};
use atrium_types::models::WorkspaceId;

use crate::error::ApiError;
use crate::{AppState, RequesterQuery};

pub async fn invite_user(
    State(state): State<AppState>,
    Path(workspace_id): Path<WorkspaceId>,
    Query(requester): Query<RequesterQuery>,
    Json(req): Json<InviteUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let invitation = state.directory.invite_user(
        workspace_id,
        requester.requesting_user_id,
        req.user_id,
        &req.role,
    )?;

    Ok((
        StatusCode::CREATED,
        Json(InviteUserResponse {
            message: format!(
                "Invitation successfully sent to user {} for workspace {}.",
                invitation.invited_user_id, invitation.workspace_id
            ),
            invitation_id: invitation.invitation_id,
            status: invitation.status,
        }),
    ))
}
