use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

const MIN_PASSWORD_LENGTH: usize = 8;

/// Validated password candidate.
///
/// The application never stores or hashes passwords itself; this type only
/// enforces the boundary rule before the value is forwarded to the identity
/// provider.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password is required")]
    Missing,
    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters")]
    TooShort,
}

impl Password {
    pub fn parse(raw: Secret<String>) -> Result<Self, PasswordError> {
        let candidate = raw.expose_secret();
        if candidate.is_empty() {
            return Err(PasswordError::Missing);
        }
        if candidate.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(PasswordError::TooShort);
        }
        Ok(Self(raw))
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(raw: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
