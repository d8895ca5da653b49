use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use atrium_types::api::{
    CreateWorkspaceRequest, MembershipInfo, SwitchWorkspaceResponse, UserWorkspaceResponse,
};
use atrium_types::models::WorkspaceId;

use crate::error::ApiError;
use crate::{AppState, CallerQuery, RequesterQuery};

pub async fn create_workspace(
    State(state): State<AppState>,
    Json(req): Json<CreateWorkspaceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let workspace = state.directory.create_workspace(&req.name, req.owner_id)?;
    Ok((StatusCode::CREATED, Json(workspace)))
}

pub async fn list_my_workspaces(
    State(state): State<AppState>,
    Query(caller): Query<CallerQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = state.directory.list_user_workspaces(caller.user_id)?;

    let workspaces: Vec<UserWorkspaceResponse> = rows
        .into_iter()
        .map(|(workspace, role)| UserWorkspaceResponse {
            workspace,
            membership: MembershipInfo { role },
        })
        .collect();

    Ok(Json(workspaces))
}

pub async fn switch_active_workspace(
    State(state): State<AppState>,
    Path(workspace_id): Path<WorkspaceId>,
    Query(caller): Query<CallerQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let active = state
        .directory
        .switch_active_workspace(caller.user_id, workspace_id)?;

    Ok(Json(SwitchWorkspaceResponse {
        message: format!("Successfully switched active workspace to {}.", active),
        active_workspace_id: active,
    }))
}

pub async fn delete_workspace(
    State(state): State<AppState>,
    Path(workspace_id): Path<WorkspaceId>,
    Query(requester): Query<RequesterQuery>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .directory
        .delete_workspace(workspace_id, requester.requesting_user_id)?;
    Ok(StatusCode::NO_CONTENT)
}
