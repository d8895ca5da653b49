use atrium_types::models::{UserId, WorkspaceId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Workspace with id {0} not found.")]
    WorkspaceNotFound(WorkspaceId),

    #[error("User {user_id} is not a member of workspace {workspace_id}.")]
    MemberNotFound {
        workspace_id: WorkspaceId,
        user_id: UserId,
    },

    #[error("User {user_id} is already a member of workspace {workspace_id}.")]
    AlreadyMember {
        workspace_id: WorkspaceId,
        user_id: UserId,
    },

    #[error("User {user_id} does not have permission to {action} workspace {workspace_id}.")]
    PermissionDenied {
        workspace_id: WorkspaceId,
        user_id: UserId,
        action: &'static str,
    },

    #[error("Owner cannot be removed. Please delete the workspace or transfer ownership first.")]
    OwnerNotRemovable,

    #[error("Workspace name must not be empty.")]
    EmptyWorkspaceName,

    #[error("directory lock poisoned")]
    LockPoisoned,
}
