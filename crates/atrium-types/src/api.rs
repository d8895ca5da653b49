use serde::{Deserialize, Serialize};

use crate::models::{InvitationId, InvitationStatus, UserId, Workspace, WorkspaceId};

// -- Workspaces --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateWorkspaceRequest {
    pub name: String,
    pub owner_id: UserId,
}

// -- Invitations --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InviteUserRequest {
    pub user_id: UserId,
    #[serde(default = "default_invite_role")]
    pub role: String,
}

fn default_invite_role() -> String {
    crate::models::ROLE_MEMBER.to_string()
}

#[derive(Debug, Serialize)]
pub struct InviteUserResponse {
    pub message: String,
    pub invitation_id: InvitationId,
    pub status: InvitationStatus,
}

// -- Listing --

#[derive(Debug, Serialize)]
pub struct MembershipInfo {
    pub role: String,
}

/// A workspace as seen by one of its members: the record itself plus the
/// caller's own membership details.
#[derive(Debug, Serialize)]
pub struct UserWorkspaceResponse {
    #[serde(flatten)]
    pub workspace: Workspace,
    pub membership: MembershipInfo,
}

// -- Active workspace --

#[derive(Debug, Serialize)]
pub struct SwitchWorkspaceResponse {
    pub message: String,
    pub active_workspace_id: WorkspaceId,
}
