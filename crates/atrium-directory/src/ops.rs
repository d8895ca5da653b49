use std::collections::HashSet;

use chrono::Utc;
use tracing::{info, warn};

use atrium_types::models::{
    Invitation, InvitationStatus, Membership, ROLE_ADMIN, UserId, Workspace, WorkspaceId,
};

use crate::capabilities::{Capability, role_allows};
use crate::{Directory, DirectoryError, DirectoryInner};

impl DirectoryInner {
    fn workspace(&self, workspace_id: WorkspaceId) -> Option<&Workspace> {
        self.workspaces.iter().find(|w| w.id == workspace_id)
    }

    fn role_of(&self, user_id: UserId, workspace_id: WorkspaceId) -> Option<&str> {
        self.memberships
            .iter()
            .find(|m| m.user_id == user_id && m.workspace_id == workspace_id)
            .map(|m| m.role.as_str())
    }

    fn is_member(&self, user_id: UserId, workspace_id: WorkspaceId) -> bool {
        self.role_of(user_id, workspace_id).is_some()
    }

    fn insert_membership(&mut self, workspace_id: WorkspaceId, user_id: UserId, role: &str) {
        let membership = Membership {
            id: self.next_membership_id,
            workspace_id,
            user_id,
            role: role.to_string(),
        };
        self.next_membership_id += 1;
        self.memberships.push(membership);
    }
}

impl Directory {
    /// Create a workspace and enroll the owner as its first admin member.
    pub fn create_workspace(
        &self,
        name: &str,
        owner_id: UserId,
    ) -> Result<Workspace, DirectoryError> {
        if name.trim().is_empty() {
            return Err(DirectoryError::EmptyWorkspaceName);
        }

        self.with_inner(|inner| {
            let now = Utc::now();
            let workspace = Workspace {
                id: inner.next_workspace_id,
                name: name.to_string(),
                owner_id,
                created_at: now,
                updated_at: now,
            };
            inner.next_workspace_id += 1;
            inner.workspaces.push(workspace.clone());

            inner.insert_membership(workspace.id, owner_id, ROLE_ADMIN);

            info!(workspace_id = workspace.id, owner_id, "workspace created");
            Ok(workspace)
        })
    }

    /// Record a pending invitation for `invited_user_id`.
    ///
    /// Issuing an invitation is not acceptance: no membership is created
    /// here. The inviter must hold the `InviteMember` capability through
    /// their own membership; the workspace is resolved first so a missing
    /// workspace reports not-found rather than a permission failure.
    pub fn invite_user(
        &self,
        workspace_id: WorkspaceId,
        inviting_user_id: UserId,
        invited_user_id: UserId,
        role: &str,
    ) -> Result<Invitation, DirectoryError> {
        self.with_inner(|inner| {
            if inner.workspace(workspace_id).is_none() {
                return Err(DirectoryError::WorkspaceNotFound(workspace_id));
            }

            let may_invite = inner
                .role_of(inviting_user_id, workspace_id)
                .is_some_and(|r| role_allows(r, Capability::InviteMember));
            if !may_invite {
                return Err(DirectoryError::PermissionDenied {
                    workspace_id,
                    user_id: inviting_user_id,
                    action: "invite users to",
                });
            }

            if inner.is_member(invited_user_id, workspace_id) {
                return Err(DirectoryError::AlreadyMember {
                    workspace_id,
                    user_id: invited_user_id,
                });
            }

            let now = Utc::now();
            let invitation = Invitation {
                invitation_id: inner.next_invitation_id,
                workspace_id,
                invited_user_id,
                inviting_user_id,
                role: role.to_string(),
                status: InvitationStatus::Pending,
                created_at: now,
                updated_at: now,
            };
            inner.next_invitation_id += 1;
            inner.invitations.push(invitation.clone());

            info!(
                workspace_id,
                invited_user_id, inviting_user_id, "invitation created"
            );
            Ok(invitation)
        })
    }

    /// Every workspace `user_id` is a member of, paired with their role,
    /// in the order the memberships were discovered.
    ///
    /// Deduplicates workspace ids defensively even though the invite path
    /// never produces two memberships for the same (workspace, user) pair.
    pub fn list_user_workspaces(
        &self,
        user_id: UserId,
    ) -> Result<Vec<(Workspace, String)>, DirectoryError> {
        self.with_inner(|inner| {
            let mut seen = HashSet::new();
            let workspace_ids: Vec<WorkspaceId> = inner
                .memberships
                .iter()
                .filter(|m| m.user_id == user_id)
                .map(|m| m.workspace_id)
                .filter(|id| seen.insert(*id))
                .collect();

            let mut out = Vec::with_capacity(workspace_ids.len());
            for workspace_id in workspace_ids {
                match (inner.workspace(workspace_id), inner.role_of(user_id, workspace_id)) {
                    (Some(workspace), Some(role)) => {
                        out.push((workspace.clone(), role.to_string()));
                    }
                    _ => {
                        // Membership row without a matching workspace or role
                        // is a data-integrity violation, not a caller error.
                        warn!(
                            user_id,
                            workspace_id,
                            "membership references missing workspace or role, skipping"
                        );
                    }
                }
            }
            Ok(out)
        })
    }

    /// Point `user_id`'s active workspace at `workspace_id`, overwriting any
    /// previous selection. The caller must be a member of the target.
    pub fn switch_active_workspace(
        &self,
        user_id: UserId,
        workspace_id: WorkspaceId,
    ) -> Result<WorkspaceId, DirectoryError> {
        self.with_inner(|inner| {
            if inner.workspace(workspace_id).is_none() {
                return Err(DirectoryError::WorkspaceNotFound(workspace_id));
            }
            if !inner.is_member(user_id, workspace_id) {
                return Err(DirectoryError::PermissionDenied {
                    workspace_id,
                    user_id,
                    action: "switch to",
                });
            }

            inner.active_workspaces.insert(user_id, workspace_id);
            info!(user_id, workspace_id, "active workspace switched");
            Ok(workspace_id)
        })
    }

    /// Remove `target_user_id`'s membership.
    ///
    /// The owner can never be removed here; that requires deleting the
    /// workspace or an ownership transfer. Admins may remove anyone else,
    /// and any member may remove themselves. The target's invitations and
    /// active-workspace pointer are deliberately left untouched.
    pub fn remove_member(
        &self,
        workspace_id: WorkspaceId,
        requesting_user_id: UserId,
        target_user_id: UserId,
    ) -> Result<(), DirectoryError> {
        self.with_inner(|inner| {
            let owner_id = inner
                .workspace(workspace_id)
                .ok_or(DirectoryError::WorkspaceNotFound(workspace_id))?
                .owner_id;

            if target_user_id == owner_id {
                return Err(DirectoryError::OwnerNotRemovable);
            }

            // A requester with no membership at all gets the same answer as
            // one with an insufficient role.
            let may_remove = requesting_user_id == target_user_id
                || inner
                    .role_of(requesting_user_id, workspace_id)
                    .is_some_and(|r| role_allows(r, Capability::RemoveMember));
            if !may_remove {
                return Err(DirectoryError::PermissionDenied {
                    workspace_id,
                    user_id: requesting_user_id,
                    action: "remove members from",
                });
            }

            if !inner.is_member(target_user_id, workspace_id) {
                return Err(DirectoryError::MemberNotFound {
                    workspace_id,
                    user_id: target_user_id,
                });
            }

            inner
                .memberships
                .retain(|m| !(m.workspace_id == workspace_id && m.user_id == target_user_id));

            info!(
                workspace_id,
                target_user_id, requesting_user_id, "member removed"
            );
            Ok(())
        })
    }

    /// Delete a workspace and cascade over everything that references it:
    /// memberships, invitations and active-workspace pointers. Owner only.
    pub fn delete_workspace(
        &self,
        workspace_id: WorkspaceId,
        requesting_user_id: UserId,
    ) -> Result<(), DirectoryError> {
        self.with_inner(|inner| {
            let owner_id = inner
                .workspace(workspace_id)
                .ok_or(DirectoryError::WorkspaceNotFound(workspace_id))?
                .owner_id;

            if requesting_user_id != owner_id {
                return Err(DirectoryError::PermissionDenied {
                    workspace_id,
                    user_id: requesting_user_id,
                    action: "delete",
                });
            }

            inner.workspaces.retain(|w| w.id != workspace_id);
            inner.memberships.retain(|m| m.workspace_id != workspace_id);
            inner.invitations.retain(|i| i.workspace_id != workspace_id);
            inner
                .active_workspaces
                .retain(|_, active| *active != workspace_id);

            info!(workspace_id, requesting_user_id, "workspace deleted");
            Ok(())
        })
    }
}
