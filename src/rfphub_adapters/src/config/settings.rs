//! Process configuration, layered from defaults and `RFPHUB_`-prefixed
//! environment variables.

use std::time::Duration;

use config::{Config, ConfigError, Environment};
use http::HeaderValue;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::config::constants::{SESSION_COOKIE_NAME, env, prod};

#[derive(Clone, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub provider: ProviderSettings,
    pub postgres: PostgresSettings,
    pub auth: AuthSettings,
}

#[derive(Clone, Deserialize)]
pub struct AppSettings {
    pub address: String,
    pub allowed_origins: AllowedOrigins,
}

#[derive(Clone, Deserialize)]
pub struct ProviderSettings {
    pub base_url: String,
    pub jwt_key: Secret<String>,
    pub timeout_ms: u64,
    pub password_reset_redirect: String,
}

impl ProviderSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
}

#[derive(Clone, Deserialize)]
pub struct AuthSettings {
    pub cookie_name: String,
}

impl Settings {
    /// Load settings, failing fast on anything the service cannot run
    /// without.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let settings: Settings = Config::builder()
            .set_default("app.address", prod::APP_ADDRESS)?
            .set_default("app.allowed_origins", "")?
            .set_default("provider.base_url", "")?
            .set_default("provider.jwt_key", "")?
            .set_default(
                "provider.timeout_ms",
                prod::identity_provider::TIMEOUT.as_millis() as u64,
            )?
            .set_default("provider.password_reset_redirect", "/auth/update-password")?
            .set_default("postgres.url", "")?
            .set_default("auth.cookie_name", SESSION_COOKIE_NAME)?
            .add_source(Environment::with_prefix("RFPHUB").separator("__"))
            .build()?
            .try_deserialize()?;

        if settings.provider.base_url.is_empty() {
            return Err(ConfigError::Message(format!(
                "identity provider base URL is required: set {}",
                env::PROVIDER_BASE_URL_ENV_VAR
            )));
        }
        if settings.provider.jwt_key.expose_secret().is_empty() {
            return Err(ConfigError::Message(format!(
                "identity provider signing key is required: set {}",
                env::PROVIDER_JWT_KEY_ENV_VAR
            )));
        }
        if settings.postgres.url.expose_secret().is_empty() {
            return Err(ConfigError::Message(format!(
                "database URL is required: set {}",
                env::DATABASE_URL_ENV_VAR
            )));
        }

        Ok(settings)
    }
}

/// Comma-separated list of origins allowed to make credentialed requests.
#[derive(Clone, Debug, Default)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }
}

impl<'de> Deserialize<'de> for AllowedOrigins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
