use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type WorkspaceId = u64;
pub type UserId = u64;
pub type MembershipId = u64;
pub type InvitationId = u64;

/// Role a member holds inside a workspace. Stored as an opaque string;
/// only "admin" carries elevated permissions, everything else is treated
/// like "member".
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MEMBER: &str = "member";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    pub id: MembershipId,
    pub workspace_id: WorkspaceId,
    pub user_id: UserId,
    pub role: String,
}

/// Lifecycle of an invitation. Only `Pending` is produced today; accepting
/// or declining an invitation is a separate follow-up operation that does
/// not exist yet. Membership is never created from an invitation directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Declined,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub invitation_id: InvitationId,
    pub workspace_id: WorkspaceId,
    pub invited_user_id: UserId,
    pub inviting_user_id: UserId,
    pub role: String,
    pub status: InvitationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
