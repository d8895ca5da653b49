pub mod error;
pub mod invitations;
pub mod members;
pub mod workspaces;

use std::sync::Arc;

use serde::Deserialize;

use atrium_directory::Directory;
use atrium_types::models::UserId;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub directory: Directory,
}

/// Caller identity for read/switch operations. Supplied by the calling
/// layer as a trusted query parameter; a real deployment would derive it
/// from an authenticated session instead.
#[derive(Debug, Deserialize)]
pub struct CallerQuery {
    pub user_id: UserId,
}

/// Caller identity for destructive operations, same trust model as
/// [`CallerQuery`].
#[derive(Debug, Deserialize)]
pub struct RequesterQuery {
    pub requesting_user_id: UserId,
}
