//! HTTP client for the hosted identity provider.
//!
//! Talks to a GoTrue-compatible auth API. Token validation is done locally
//! with the provider's signing key so that every request does not pay a
//! network round trip.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, errors::ErrorKind};
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_json::json;

use rfphub_core::{
    AccessToken, AuthSession, AuthUser, Claims, Email, IdentityError, IdentityProvider, Password,
    Role, UserId,
};

#[derive(Clone)]
pub struct HttpIdentityProvider {
    http_client: Client,
    base_url: String,
    jwt_key: Secret<String>,
}

#[derive(Deserialize)]
struct SessionResponse {
    access_token: String,
    token_type: String,
    expires_at: i64,
    user: UserResponse,
}

#[derive(Deserialize)]
struct UserResponse {
    id: String,
    email: String,
    email_confirmed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    user_metadata: serde_json::Value,
}

#[derive(Deserialize)]
struct ErrorResponse {
    msg: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ErrorResponse {
    fn message(self) -> Option<String> {
        self.msg.or(self.error_description).or(self.error)
    }
}

impl TryFrom<UserResponse> for AuthUser {
    type Error = IdentityError;

    fn try_from(user: UserResponse) -> Result<Self, Self::Error> {
        let role = user
            .user_metadata
            .get("role")
            .and_then(|role| role.as_str())
            .ok_or_else(|| IdentityError::Unexpected("user record carries no role".to_string()))?
            .parse::<Role>()
            .map_err(|e| IdentityError::Unexpected(e.to_string()))?;

        Ok(AuthUser {
            id: UserId::new(user.id),
            email: user.email,
            email_confirmed_at: user.email_confirmed_at,
            role,
        })
    }
}

impl TryFrom<SessionResponse> for AuthSession {
    type Error = IdentityError;

    fn try_from(session: SessionResponse) -> Result<Self, Self::Error> {
        let expires_at = Utc
            .timestamp_opt(session.expires_at, 0)
            .single()
            .ok_or_else(|| {
                IdentityError::Unexpected("session carries an invalid expiry".to_string())
            })?;
        Ok(AuthSession {
            access_token: AccessToken::new(session.access_token),
            token_type: session.token_type,
            expires_at,
        })
    }
}

impl HttpIdentityProvider {
    pub fn new(http_client: Client, base_url: impl Into<String>, jwt_key: Secret<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            jwt_key,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn transport_error(e: reqwest::Error) -> IdentityError {
        if e.is_timeout() || e.is_connect() {
            IdentityError::Unavailable(e.to_string())
        } else {
            IdentityError::Unexpected(e.to_string())
        }
    }

    /// Pulls the provider's error message out of a non-2xx response,
    /// preserving it verbatim for the client.
    async fn rejection(response: Response) -> IdentityError {
        let status = response.status();
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(ErrorResponse::message)
            .unwrap_or_else(|| format!("identity provider returned {status}"));

        if status.is_client_error() {
            IdentityError::Rejected(message)
        } else {
            IdentityError::Unexpected(message)
        }
    }

    async fn session_from(response: Response) -> Result<(AuthUser, AuthSession), IdentityError> {
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        let session = response
            .json::<SessionResponse>()
            .await
            .map_err(|e| IdentityError::Unexpected(e.to_string()))?;

        let user = UserResponse {
            id: session.user.id.clone(),
            email: session.user.email.clone(),
            email_confirmed_at: session.user.email_confirmed_at,
            user_metadata: session.user.user_metadata.clone(),
        }
        .try_into()?;
        Ok((user, session.try_into()?))
    }

    fn decoding_key(&self) -> (DecodingKey, Validation) {
        let raw = self.jwt_key.expose_secret();
        if raw.trim_start().starts_with("-----BEGIN") {
            let key = DecodingKey::from_rsa_pem(raw.as_bytes())
                .unwrap_or_else(|_| DecodingKey::from_secret(raw.as_bytes()));
            (key, Validation::new(Algorithm::RS256))
        } else {
            (DecodingKey::from_secret(raw.as_bytes()), Validation::default())
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    #[tracing::instrument(skip_all)]
    async fn sign_up(
        &self,
        email: Email,
        password: Password,
        role: Role,
    ) -> Result<(AuthUser, AuthSession), IdentityError> {
        let response = self
            .http_client
            .post(self.url("/signup"))
            .json(&json!({
                "email": email.as_ref().expose_secret(),
                "password": password.as_ref().expose_secret(),
                "data": { "role": role.as_str() },
            }))
            .send()
            .await
            .map_err(Self::transport_error)?;

        Self::session_from(response).await
    }

    #[tracing::instrument(skip_all)]
    async fn sign_in(
        &self,
        email: Email,
        password: Password,
    ) -> Result<(AuthUser, AuthSession), IdentityError> {
        let response = self
            .http_client
            .post(self.url("/token?grant_type=password"))
            .json(&json!({
                "email": email.as_ref().expose_secret(),
                "password": password.as_ref().expose_secret(),
            }))
            .send()
            .await
            .map_err(Self::transport_error)?;

        Self::session_from(response).await
    }

    #[tracing::instrument(skip_all)]
    async fn exchange_code(&self, code: &str) -> Result<(AuthUser, AuthSession), IdentityError> {
        let response = self
            .http_client
            .post(self.url("/token?grant_type=authorization_code"))
            .json(&json!({ "auth_code": code }))
            .send()
            .await
            .map_err(Self::transport_error)?;

        Self::session_from(response).await
    }

    #[tracing::instrument(skip_all)]
    async fn request_password_reset(
        &self,
        email: Email,
        redirect_to: &str,
    ) -> Result<(), IdentityError> {
        let response = self
            .http_client
            .post(self.url("/recover"))
            .json(&json!({
                "email": email.as_ref().expose_secret(),
                "redirect_to": redirect_to,
            }))
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }

    #[tracing::instrument(skip_all)]
    async fn update_password(
        &self,
        token: &AccessToken,
        new_password: Password,
    ) -> Result<(), IdentityError> {
        let response = self
            .http_client
            .put(self.url("/user"))
            .bearer_auth(token.expose())
            .json(&json!({ "password": new_password.as_ref().expose_secret() }))
            .send()
            .await
            .map_err(Self::transport_error)?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED => Err(IdentityError::InvalidToken),
            _ => Err(Self::rejection(response).await),
        }
    }

    #[tracing::instrument(skip_all)]
    async fn sign_out(&self, token: &AccessToken) -> Result<(), IdentityError> {
        let response = self
            .http_client
            .post(self.url("/logout"))
            .bearer_auth(token.expose())
            .send()
            .await
            .map_err(Self::transport_error)?;

        // A token that is already dead still counts as signed out.
        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND => Ok(()),
            _ => Err(Self::rejection(response).await),
        }
    }

    async fn get_claims(&self, token: &AccessToken) -> Result<Claims, IdentityError> {
        let (key, validation) = self.decoding_key();
        jsonwebtoken::decode::<Claims>(token.expose(), &key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => IdentityError::ExpiredToken,
                _ => IdentityError::InvalidToken,
            })
    }

    #[tracing::instrument(skip_all)]
    async fn get_user(&self, token: &AccessToken) -> Result<AuthUser, IdentityError> {
        let response = self
            .http_client
            .get(self.url("/user"))
            .bearer_auth(token.expose())
            .send()
            .await
            .map_err(Self::transport_error)?;

        match response.status() {
            status if status.is_success() => response
                .json::<UserResponse>()
                .await
                .map_err(|e| IdentityError::Unexpected(e.to_string()))?
                .try_into(),
            StatusCode::UNAUTHORIZED => Err(IdentityError::InvalidToken),
            _ => Err(Self::rejection(response).await),
        }
    }
}
