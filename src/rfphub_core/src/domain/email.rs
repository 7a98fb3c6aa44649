use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Validated email address.
///
/// Wrapped in [`Secret`] so the address never ends up in logs or debug
/// output by accident.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email is required")]
    Missing,
    #[error("Invalid email address")]
    Invalid,
}

impl Email {
    pub fn parse(raw: Secret<String>) -> Result<Self, EmailError> {
        let candidate = raw.expose_secret().trim();
        if candidate.is_empty() {
            return Err(EmailError::Missing);
        }
        if !EMAIL_REGEX.is_match(candidate) {
            return Err(EmailError::Invalid);
        }
        Ok(Self(Secret::from(candidate.to_owned())))
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = EmailError;

    fn try_from(raw: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}
