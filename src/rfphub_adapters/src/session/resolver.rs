//! Single source of truth for "who is making this request".
//!
//! Every consumer that needs the caller's identity goes through one of the
//! `resolve` methods here; nothing else reads the session cookie or the
//! Authorization header.

use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use http::HeaderMap;
use thiserror::Error;

use rfphub_core::{AccessToken, AuthUser, Claims, IdentityError, IdentityProvider};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No session")]
    NoSession,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Expired token")]
    ExpiredToken,
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl PartialEq for SessionError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::NoSession, Self::NoSession)
                | (Self::InvalidToken, Self::InvalidToken)
                | (Self::ExpiredToken, Self::ExpiredToken)
                | (Self::Unexpected(_), Self::Unexpected(_))
        )
    }
}

impl From<IdentityError> for SessionError {
    fn from(e: IdentityError) -> Self {
        match e {
            IdentityError::NoSession => Self::NoSession,
            IdentityError::InvalidToken => Self::InvalidToken,
            IdentityError::ExpiredToken => Self::ExpiredToken,
            IdentityError::Rejected(msg) => Self::Unexpected(msg),
            IdentityError::Unavailable(msg) | IdentityError::Unexpected(msg) => {
                Self::Unexpected(msg)
            }
        }
    }
}

/// The caller's identity for the duration of one request.
#[derive(Debug, Clone)]
pub struct ResolvedSession {
    pub token: AccessToken,
    pub claims: Claims,
}

#[derive(Clone)]
pub struct SessionResolver<P> {
    provider: P,
    cookie_name: String,
}

impl<P> SessionResolver<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: P, cookie_name: impl Into<String>) -> Self {
        Self {
            provider,
            cookie_name: cookie_name.into(),
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    fn cookie_token(&self, headers: &HeaderMap) -> Result<AccessToken, SessionError> {
        let jar = CookieJar::from_headers(headers);
        match jar.get(&self.cookie_name) {
            Some(cookie) => Ok(AccessToken::new(cookie.value())),
            None => Err(SessionError::NoSession),
        }
    }

    fn bearer_token(headers: &HeaderMap) -> Result<AccessToken, SessionError> {
        headers
            .get(http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(AccessToken::new)
            .ok_or(SessionError::NoSession)
    }

    /// Canonical read-path resolution: session cookie, then token check.
    pub async fn resolve(&self, headers: &HeaderMap) -> Result<ResolvedSession, SessionError> {
        let token = self.cookie_token(headers)?;
        let claims = self.provider.get_claims(&token).await?;
        Ok(ResolvedSession { token, claims })
    }

    /// Resolution from an `Authorization: Bearer` header, for API clients
    /// that do not carry cookies.
    pub async fn resolve_bearer(
        &self,
        headers: &HeaderMap,
    ) -> Result<ResolvedSession, SessionError> {
        let token = Self::bearer_token(headers)?;
        let claims = self.provider.get_claims(&token).await?;
        Ok(ResolvedSession { token, claims })
    }

    /// Write-path resolution: round-trips to the provider so a locally valid
    /// but revoked token cannot authorize a mutation.
    pub async fn resolve_verified(
        &self,
        headers: &HeaderMap,
    ) -> Result<(AuthUser, AccessToken), SessionError> {
        let token = self.cookie_token(headers)?;
        let user = self.provider.get_user(&token).await?;
        Ok((user, token))
    }
}

// Create cookie and set the value to the passed-in token string
pub fn create_session_cookie(token: String, cookie_name: &str) -> Cookie<'static> {
    Cookie::build((cookie_name.to_string(), token))
        .path("/") // apply cookie to all URLs on the server
        .http_only(true) // prevent JavaScript from accessing the cookie
        .secure(true)
        .same_site(SameSite::Lax) // send cookie with "same-site" requests, and with "cross-site" top-level navigations.
        .build()
}

pub fn create_removal_cookie(cookie_name: &str) -> Cookie<'static> {
    let mut cookie = create_session_cookie(String::new(), cookie_name);
    cookie.make_removal();
    cookie
}
