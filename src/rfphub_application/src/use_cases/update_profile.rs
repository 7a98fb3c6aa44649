use rfphub_core::{
    AccessToken, IdentityError, IdentityProvider, ProfilePatch, ProfileStore, ProfileStoreError,
};

/// Error types specific to the update-profile use case
#[derive(Debug, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Identity error: {0}")]
    Identity(#[from] IdentityError),
    #[error("Profile store error: {0}")]
    Store(#[from] ProfileStoreError),
}

/// Update-profile use case - owner-only patch of the profile row.
///
/// The write is gated by a provider round trip rather than locally decoded
/// claims, and is always scoped to the re-verified subject id; any id the
/// caller might supply is ignored by construction.
pub struct UpdateProfileUseCase<P, S>
where
    P: IdentityProvider,
    S: ProfileStore,
{
    provider: P,
    profiles: S,
}

impl<P, S> UpdateProfileUseCase<P, S>
where
    P: IdentityProvider,
    S: ProfileStore,
{
    pub fn new(provider: P, profiles: S) -> Self {
        Self { provider, profiles }
    }

    #[tracing::instrument(name = "UpdateProfileUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        token: &AccessToken,
        patch: ProfilePatch,
    ) -> Result<(), UpdateProfileError> {
        let user = self.provider.get_user(token).await?;
        self.profiles.update(&user.id, patch).await?;
        Ok(())
    }
}
