//! API-wide error taxonomy.
//!
//! Every failing handler converges here: validation and provider rejections
//! are 400s carrying the message verbatim, missing/expired sessions on
//! resource endpoints are a fixed 401 body, absent profiles are 404, and
//! everything internal is logged and returned as a generic 500.

use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

use rfphub_adapters::SessionError;
use rfphub_application::UpdateProfileError;
use rfphub_core::{EmailError, IdentityError, PasswordError, ProfileStoreError, RoleError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Provider(String),
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("Forbidden")]
    Forbidden,
    #[error("Profile not found")]
    ProfileNotFound,
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Mapping for the auth endpoints, which report every identity failure
    /// as a 400 carrying the provider's message.
    pub fn provider_error(e: IdentityError) -> Self {
        match e {
            IdentityError::Unavailable(msg) | IdentityError::Unexpected(msg) => Self::Internal(msg),
            other => Self::Provider(other.to_string()),
        }
    }

    /// Session mapping for the auth endpoints (400-class, message kept).
    pub fn session_as_provider_error(e: SessionError) -> Self {
        match e {
            SessionError::Unexpected(msg) => Self::Internal(msg),
            other => Self::Provider(other.to_string()),
        }
    }

    /// Session mapping for resource endpoints (401 with a fixed body).
    pub fn authentication(e: SessionError) -> Self {
        match e {
            SessionError::Unexpected(msg) => Self::Internal(msg),
            _ => Self::NotAuthenticated,
        }
    }
}

impl From<EmailError> for ApiError {
    fn from(e: EmailError) -> Self {
        Self::Validation(e.to_string())
    }
}

impl From<PasswordError> for ApiError {
    fn from(e: PasswordError) -> Self {
        Self::Validation(e.to_string())
    }
}

impl From<RoleError> for ApiError {
    fn from(e: RoleError) -> Self {
        Self::Validation(e.to_string())
    }
}

impl From<ProfileStoreError> for ApiError {
    fn from(e: ProfileStoreError) -> Self {
        match e {
            ProfileStoreError::ProfileNotFound => Self::ProfileNotFound,
            ProfileStoreError::DuplicateProfile => Self::Internal(e.to_string()),
            ProfileStoreError::Unexpected(msg) => Self::Internal(msg),
        }
    }
}

impl From<UpdateProfileError> for ApiError {
    fn from(e: UpdateProfileError) -> Self {
        match e {
            UpdateProfileError::Identity(IdentityError::Unavailable(msg))
            | UpdateProfileError::Identity(IdentityError::Unexpected(msg)) => Self::Internal(msg),
            UpdateProfileError::Identity(_) => Self::NotAuthenticated,
            // A verified user without a profile row is a data integrity
            // failure on the write path, not a client-visible 404.
            UpdateProfileError::Store(ProfileStoreError::ProfileNotFound) => {
                Self::Internal("no profile row for a verified user".to_string())
            }
            UpdateProfileError::Store(e) => e.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Validation(msg) | ApiError::Provider(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotAuthenticated => {
                (StatusCode::UNAUTHORIZED, "Not authenticated".to_string())
            }
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden".to_string()),
            ApiError::ProfileNotFound => (StatusCode::NOT_FOUND, "Profile not found".to_string()),
            ApiError::Internal(cause) => {
                tracing::error!(%cause, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
