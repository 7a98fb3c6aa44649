use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use rfphub_core::{Profile, ProfilePatch, ProfileStore, ProfileStoreError, UserId};

/// Map-backed profile store for tests and local development.
///
/// Counts reads and writes so tests can assert the store was never touched
/// on a rejected request.
#[derive(Default, Clone)]
pub struct InMemoryProfileStore {
    rows: Arc<RwLock<HashMap<UserId, Profile>>>,
    reads: Arc<AtomicUsize>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, profile: Profile) {
        self.rows
            .write()
            .await
            .insert(profile.id.clone(), profile);
    }

    pub async fn read_count(&self) -> usize {
        self.reads.load(Ordering::Acquire)
    }

    pub async fn write_count(&self) -> usize {
        self.writes.load(Ordering::Acquire)
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get(&self, user_id: &UserId) -> Result<Profile, ProfileStoreError> {
        self.reads.fetch_add(1, Ordering::AcqRel);
        self.rows
            .read()
            .await
            .get(user_id)
            .cloned()
            .ok_or(ProfileStoreError::ProfileNotFound)
    }

    async fn update(&self, user_id: &UserId, patch: ProfilePatch) -> Result<(), ProfileStoreError> {
        self.writes.fetch_add(1, Ordering::AcqRel);
        let mut rows = self.rows.write().await;
        let profile = rows
            .get_mut(user_id)
            .ok_or(ProfileStoreError::ProfileNotFound)?;
        patch.apply_to(profile);
        Ok(())
    }
}
