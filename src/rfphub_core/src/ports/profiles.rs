use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    profile::{Profile, ProfilePatch},
    user::UserId,
};

// ProfileStore port trait and errors
#[derive(Debug, Error)]
pub enum ProfileStoreError {
    #[error("Profile not found")]
    ProfileNotFound,
    /// More than one row for a single user id. A data-integrity violation
    /// that must be surfaced, never silently resolved by picking one.
    #[error("Multiple profile rows for one user")]
    DuplicateProfile,
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl PartialEq for ProfileStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::ProfileNotFound, Self::ProfileNotFound) => true,
            (Self::DuplicateProfile, Self::DuplicateProfile) => true,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}

/// Accessor for the application-owned profile rows.
///
/// Updates are last-write-wins; profile edits are rare, single-owner and
/// low-contention, so no optimistic concurrency is layered on top of the
/// backing store.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get(&self, user_id: &UserId) -> Result<Profile, ProfileStoreError>;

    /// Patch the row for `user_id`. Only the four owner-editable fields can
    /// change; callers re-fetch if they need the updated state.
    async fn update(&self, user_id: &UserId, patch: ProfilePatch)
    -> Result<(), ProfileStoreError>;
}
