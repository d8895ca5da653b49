//! Role to capability mapping.
//!
//! Roles are stored as opaque strings on memberships; this table is the only
//! place that assigns meaning to them. Unknown roles grant nothing, so a
//! caller with a made-up role can read but never mutate on behalf of others.

use atrium_types::models::{ROLE_ADMIN, ROLE_MEMBER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    InviteMember,
    RemoveMember,
}

pub fn role_capabilities(role: &str) -> &'static [Capability] {
    match role {
        ROLE_ADMIN => &[Capability::InviteMember, Capability::RemoveMember],
        ROLE_MEMBER => &[Capability::InviteMember],
        _ => &[],
    }
}

pub fn role_allows(role: &str, capability: Capability) -> bool {
    role_capabilities(role).contains(&capability)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_can_invite_and_remove() {
        assert!(role_allows(ROLE_ADMIN, Capability::InviteMember));
        assert!(role_allows(ROLE_ADMIN, Capability::RemoveMember));
    }

    #[test]
    fn member_can_invite_but_not_remove() {
        assert!(role_allows(ROLE_MEMBER, Capability::InviteMember));
        assert!(!role_allows(ROLE_MEMBER, Capability::RemoveMember));
    }

    #[test]
    fn unknown_role_grants_nothing() {
        assert!(role_capabilities("viewer").is_empty());
        assert!(role_capabilities("").is_empty());
    }
}
