//! Shared auth-state store for UI processes.
//!
//! The browser-side "who am I" state reimagined as an explicit object with
//! a defined lifecycle instead of an ambient singleton: created at app
//! start, injected into whatever consumes it, and read only through
//! [`AuthState::snapshot`] so every consumer sees the same answer at any
//! instant.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use rfphub_core::{AccessToken, AuthUser, IdentityError, IdentityProvider, Profile};

/// Point-in-time view of the auth state.
#[derive(Debug, Clone, Default)]
pub struct AuthSnapshot {
    pub user: Option<AuthUser>,
    pub profile: Option<Profile>,
    pub loading: bool,
}

#[derive(Debug)]
struct Inner {
    snapshot: RwLock<AuthSnapshot>,
    generation: AtomicU64,
}

/// Explicit store for the current user/profile/loading triple.
///
/// Loads are generation-checked: a load that resolves after the state moved
/// on (a newer load started, or the user signed out) is discarded instead
/// of committing stale data.
#[derive(Debug, Clone)]
pub struct AuthState {
    inner: Arc<Inner>,
}

impl AuthState {
    /// Starts in `loading = true`, before the first resolution completes.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                snapshot: RwLock::new(AuthSnapshot {
                    user: None,
                    profile: None,
                    loading: true,
                }),
                generation: AtomicU64::new(0),
            }),
        }
    }

    pub async fn snapshot(&self) -> AuthSnapshot {
        self.inner.snapshot.read().await.clone()
    }

    /// Mark a resolution in flight and return its generation token.
    pub async fn begin_load(&self) -> u64 {
        let generation = self.inner.generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.inner.snapshot.write().await.loading = true;
        generation
    }

    /// Commit a resolved load. Returns false (and commits nothing) when the
    /// generation is no longer current.
    pub async fn complete_load(
        &self,
        generation: u64,
        user: Option<AuthUser>,
        profile: Option<Profile>,
    ) -> bool {
        let mut snapshot = self.inner.snapshot.write().await;
        if self.inner.generation.load(Ordering::Acquire) != generation {
            return false;
        }
        *snapshot = AuthSnapshot {
            user,
            profile,
            loading: false,
        };
        true
    }

    /// Sign out with the provider, then clear the state with no stale-data
    /// window: by the time this returns, every snapshot is logged out and
    /// in-flight loads can no longer commit.
    pub async fn sign_out<P>(&self, provider: &P, token: &AccessToken) -> Result<(), IdentityError>
    where
        P: IdentityProvider,
    {
        provider.sign_out(token).await?;

        let mut snapshot = self.inner.snapshot.write().await;
        self.inner.generation.fetch_add(1, Ordering::AcqRel);
        *snapshot = AuthSnapshot {
            user: None,
            profile: None,
            loading: false,
        };
        Ok(())
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
