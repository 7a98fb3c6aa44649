//! In-memory identity provider double for local development and tests.
//!
//! Mimics the hosted provider's observable behaviour: opaque tokens with
//! expiries, verbatim rejection messages, idempotent sign-out, one-time
//! confirmation codes.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use uuid::Uuid;

use rfphub_core::{
    AccessToken, AuthSession, AuthUser, Claims, Email, IdentityError, IdentityProvider, Password,
    Role, UserId,
};

#[derive(Clone)]
struct Account {
    id: UserId,
    email: String,
    password: Secret<String>,
    role: Role,
    email_confirmed_at: Option<DateTime<Utc>>,
}

#[derive(Clone)]
struct IssuedSession {
    user_id: UserId,
    email: String,
    role: Role,
    expires_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct InMemoryIdentityProvider {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    sessions: Arc<RwLock<HashMap<String, IssuedSession>>>,
    codes: Arc<RwLock<HashMap<String, String>>>,
    session_ttl: Duration,
}

impl Default for InMemoryIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            codes: Arc::new(RwLock::new(HashMap::new())),
            session_ttl: Duration::hours(1),
        }
    }

    async fn mint_session(&self, account: &Account, ttl: Duration) -> AuthSession {
        let token = Uuid::new_v4().to_string();
        let expires_at = Utc::now() + ttl;

        self.sessions.write().await.insert(
            token.clone(),
            IssuedSession {
                user_id: account.id.clone(),
                email: account.email.clone(),
                role: account.role,
                expires_at,
            },
        );

        AuthSession {
            access_token: AccessToken::new(token),
            token_type: "bearer".to_string(),
            expires_at,
        }
    }

    async fn live_session(&self, token: &AccessToken) -> Result<IssuedSession, IdentityError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get(token.expose())
            .cloned()
            .ok_or(IdentityError::InvalidToken)?;
        if session.expires_at <= Utc::now() {
            sessions.remove(token.expose());
            return Err(IdentityError::ExpiredToken);
        }
        Ok(session)
    }

    fn auth_user(account: &Account) -> AuthUser {
        AuthUser {
            id: account.id.clone(),
            email: account.email.clone(),
            email_confirmed_at: account.email_confirmed_at,
            role: account.role,
        }
    }

    /// Mint a session for an existing account with an explicit TTL.
    /// A non-positive TTL yields an already-expired session.
    pub async fn issue_session_with_ttl(
        &self,
        email: &str,
        ttl: Duration,
    ) -> Result<AuthSession, IdentityError> {
        let accounts = self.accounts.read().await;
        let account = accounts
            .get(email)
            .ok_or_else(|| IdentityError::Rejected("Invalid login credentials".to_string()))?;
        Ok(self.mint_session(account, ttl).await)
    }

    /// Mint a one-time email-confirmation code for an existing account.
    pub async fn issue_confirmation_code(&self, email: &str) -> Result<String, IdentityError> {
        let accounts = self.accounts.read().await;
        if !accounts.contains_key(email) {
            return Err(IdentityError::Rejected(
                "Invalid login credentials".to_string(),
            ));
        }
        let code = Uuid::new_v4().to_string();
        self.codes
            .write()
            .await
            .insert(code.clone(), email.to_string());
        Ok(code)
    }

    pub async fn active_session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_up(
        &self,
        email: Email,
        password: Password,
        role: Role,
    ) -> Result<(AuthUser, AuthSession), IdentityError> {
        let address = email.as_ref().expose_secret().clone();
        let account = {
            let mut accounts = self.accounts.write().await;
            if accounts.contains_key(&address) {
                return Err(IdentityError::Rejected(
                    "User already registered".to_string(),
                ));
            }
            let account = Account {
                id: UserId::new(Uuid::new_v4().to_string()),
                email: address.clone(),
                password: password.as_ref().clone(),
                role,
                email_confirmed_at: Some(Utc::now()),
            };
            accounts.insert(address, account.clone());
            account
        };

        let session = self.mint_session(&account, self.session_ttl).await;
        Ok((Self::auth_user(&account), session))
    }

    async fn sign_in(
        &self,
        email: Email,
        password: Password,
    ) -> Result<(AuthUser, AuthSession), IdentityError> {
        let address = email.as_ref().expose_secret();
        let account = {
            let accounts = self.accounts.read().await;
            accounts.get(address).cloned()
        };

        let account = account.filter(|account| {
            account.password.expose_secret() == password.as_ref().expose_secret()
        });
        let Some(account) = account else {
            return Err(IdentityError::Rejected(
                "Invalid login credentials".to_string(),
            ));
        };

        let session = self.mint_session(&account, self.session_ttl).await;
        Ok((Self::auth_user(&account), session))
    }

    async fn exchange_code(&self, code: &str) -> Result<(AuthUser, AuthSession), IdentityError> {
        let address = self.codes.write().await.remove(code).ok_or_else(|| {
            IdentityError::Rejected("Confirmation code is invalid or has expired".to_string())
        })?;

        let account = {
            let mut accounts = self.accounts.write().await;
            let account = accounts
                .get_mut(&address)
                .ok_or_else(|| IdentityError::Unexpected("account vanished".to_string()))?;
            account.email_confirmed_at.get_or_insert_with(Utc::now);
            account.clone()
        };

        let session = self.mint_session(&account, self.session_ttl).await;
        Ok((Self::auth_user(&account), session))
    }

    async fn request_password_reset(
        &self,
        _email: Email,
        _redirect_to: &str,
    ) -> Result<(), IdentityError> {
        // Never discloses whether the address is registered.
        Ok(())
    }

    async fn update_password(
        &self,
        token: &AccessToken,
        new_password: Password,
    ) -> Result<(), IdentityError> {
        let session = self.live_session(token).await?;

        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(&session.email)
            .ok_or_else(|| IdentityError::Unexpected("account vanished".to_string()))?;
        account.password = new_password.as_ref().clone();
        Ok(())
    }

    async fn sign_out(&self, token: &AccessToken) -> Result<(), IdentityError> {
        // Idempotent: removing a token that is already gone is still Ok.
        self.sessions.write().await.remove(token.expose());
        Ok(())
    }

    async fn get_claims(&self, token: &AccessToken) -> Result<Claims, IdentityError> {
        let session = self.live_session(token).await?;
        Ok(Claims {
            sub: session.user_id,
            email: session.email,
            role: session.role,
            exp: session.expires_at.timestamp().max(0) as usize,
        })
    }

    async fn get_user(&self, token: &AccessToken) -> Result<AuthUser, IdentityError> {
        let session = self.live_session(token).await?;
        let accounts = self.accounts.read().await;
        let account = accounts
            .get(&session.email)
            .ok_or_else(|| IdentityError::Unexpected("account vanished".to_string()))?;
        Ok(Self::auth_user(account))
    }
}
