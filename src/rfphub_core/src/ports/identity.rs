use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    password::Password,
    role::Role,
    session::{AccessToken, AuthSession, Claims},
    user::AuthUser,
};

// IdentityProvider port trait and errors
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Provider-reported rejection; the message is passed through verbatim.
    #[error("{0}")]
    Rejected(String),
    #[error("No session")]
    NoSession,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Expired token")]
    ExpiredToken,
    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl PartialEq for IdentityError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Rejected(a), Self::Rejected(b)) => a == b,
            (Self::NoSession, Self::NoSession) => true,
            (Self::InvalidToken, Self::InvalidToken) => true,
            (Self::ExpiredToken, Self::ExpiredToken) => true,
            (Self::Unavailable(_), Self::Unavailable(_)) => true,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}

/// Client for the hosted identity provider.
///
/// Every operation is a remote call; failures are surfaced to the caller
/// without retries. Sessions are minted, refreshed, and destroyed by the
/// provider; the application only validates and forwards them.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(
        &self,
        email: Email,
        password: Password,
        role: Role,
    ) -> Result<(AuthUser, AuthSession), IdentityError>;

    async fn sign_in(
        &self,
        email: Email,
        password: Password,
    ) -> Result<(AuthUser, AuthSession), IdentityError>;

    /// Exchange a one-time confirmation code for a session.
    async fn exchange_code(&self, code: &str) -> Result<(AuthUser, AuthSession), IdentityError>;

    /// Fire-and-forget reset-email dispatch.
    async fn request_password_reset(
        &self,
        email: Email,
        redirect_to: &str,
    ) -> Result<(), IdentityError>;

    /// Requires an active session for the token's subject.
    async fn update_password(
        &self,
        token: &AccessToken,
        new_password: Password,
    ) -> Result<(), IdentityError>;

    /// Invalidate the session. Idempotent: signing out an already-dead
    /// session is Ok, not an error.
    async fn sign_out(&self, token: &AccessToken) -> Result<(), IdentityError>;

    /// Decoded claims for the token, or a typed no-valid-session failure.
    async fn get_claims(&self, token: &AccessToken) -> Result<Claims, IdentityError>;

    /// Re-verify the token's subject with a provider round trip.
    async fn get_user(&self, token: &AccessToken) -> Result<AuthUser, IdentityError>;
}
