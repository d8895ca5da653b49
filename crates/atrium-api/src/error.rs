use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use atrium_directory::DirectoryError;

/// Wraps [`DirectoryError`] so it can be returned straight from handlers,
/// translating each failure kind to its HTTP status and a `{"detail": ...}`
/// body.
#[derive(Debug)]
pub struct ApiError(pub DirectoryError);

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            DirectoryError::WorkspaceNotFound(_) | DirectoryError::MemberNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            DirectoryError::AlreadyMember { .. } => StatusCode::CONFLICT,
            DirectoryError::PermissionDenied { .. } => StatusCode::FORBIDDEN,
            DirectoryError::OwnerNotRemovable => StatusCode::BAD_REQUEST,
            DirectoryError::EmptyWorkspaceName => StatusCode::UNPROCESSABLE_ENTITY,
            DirectoryError::LockPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("directory error: {:#?}", self.0);
            return (status, Json(json!({ "detail": "Internal Error" }))).into_response();
        }
        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let cases = [
            (DirectoryError::WorkspaceNotFound(1), StatusCode::NOT_FOUND),
            (
                DirectoryError::MemberNotFound {
                    workspace_id: 1,
                    user_id: 2,
                },
                StatusCode::NOT_FOUND,
            ),
            (
                DirectoryError::AlreadyMember {
                    workspace_id: 1,
                    user_id: 2,
                },
                StatusCode::CONFLICT,
            ),
            (
                DirectoryError::PermissionDenied {
                    workspace_id: 1,
                    user_id: 2,
                    action: "invite users to",
                },
                StatusCode::FORBIDDEN,
            ),
            (DirectoryError::OwnerNotRemovable, StatusCode::BAD_REQUEST),
            (
                DirectoryError::EmptyWorkspaceName,
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                DirectoryError::LockPoisoned,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError(err).into_response().status(), expected);
        }
    }

    #[test]
    fn internal_errors_hide_details() {
        let response = ApiError(DirectoryError::LockPoisoned).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
