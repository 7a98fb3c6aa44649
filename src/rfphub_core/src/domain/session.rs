use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};

use crate::domain::role::Role;
use crate::domain::user::UserId;

/// Bearer token issued by the identity provider.
///
/// The application never mints or signs tokens; it only forwards them back
/// to the provider for validation.
#[derive(Clone)]
pub struct AccessToken(Secret<String>);

impl AccessToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Secret::from(raw.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

/// Time-bounded proof of authentication issued by the provider.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub access_token: AccessToken,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

impl Serialize for AuthSession {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("AuthSession", 3)?;
        state.serialize_field("access_token", self.access_token.expose())?;
        state.serialize_field("token_type", &self.token_type)?;
        state.serialize_field("expires_at", &self.expires_at)?;
        state.end()
    }
}

/// Decoded assertions bundled in a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: UserId,
    pub email: String,
    pub role: Role,
    pub exp: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_debug_is_redacted() {
        let token = AccessToken::new("super-secret");
        assert_eq!(format!("{token:?}"), "AccessToken([REDACTED])");
    }

    #[test]
    fn session_serializes_token_and_expiry() {
        let session = AuthSession {
            access_token: AccessToken::new("abc123"),
            token_type: "bearer".to_string(),
            expires_at: Utc::now(),
        };

        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["access_token"], "abc123");
        assert_eq!(value["token_type"], "bearer");
        assert!(value["expires_at"].is_string());
    }
}
