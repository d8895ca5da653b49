pub mod capabilities;
pub mod error;
mod ops;

pub use error::DirectoryError;

use std::collections::HashMap;
use std::sync::Mutex;

use atrium_types::models::{
    Invitation, InvitationId, Membership, MembershipId, UserId, Workspace, WorkspaceId,
};

/// The workspace directory: workspaces, memberships, pending invitations and
/// each user's active-workspace pointer, all owned by one instance.
///
/// A single mutex guards all four relations so that every operation — in
/// particular the four-way cascade in `delete_workspace` — is observed as
/// atomic by concurrent callers.
pub struct Directory {
    inner: Mutex<DirectoryInner>,
}

pub(crate) struct DirectoryInner {
    pub(crate) workspaces: Vec<Workspace>,
    pub(crate) memberships: Vec<Membership>,
    pub(crate) invitations: Vec<Invitation>,
    pub(crate) active_workspaces: HashMap<UserId, WorkspaceId>,
    // Per-relation id counters, never reused.
    pub(crate) next_workspace_id: WorkspaceId,
    pub(crate) next_membership_id: MembershipId,
    pub(crate) next_invitation_id: InvitationId,
}

impl Directory {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(DirectoryInner {
                workspaces: Vec::new(),
                memberships: Vec::new(),
                invitations: Vec::new(),
                active_workspaces: HashMap::new(),
                next_workspace_id: 1,
                next_membership_id: 1,
                next_invitation_id: 1,
            }),
        }
    }

    pub(crate) fn with_inner<F, T>(&self, f: F) -> Result<T, DirectoryError>
    where
        F: FnOnce(&mut DirectoryInner) -> Result<T, DirectoryError>,
    {
        let mut inner = self.inner.lock().map_err(|_| DirectoryError::LockPoisoned)?;
        f(&mut inner)
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}
