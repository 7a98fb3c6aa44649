use rfphub_core::{Claims, Profile, ProfileStore, ProfileStoreError};

/// Get-profile use case - reads the profile row for the resolved session
/// subject. The subject id comes from validated claims, never from caller
/// input.
pub struct GetProfileUseCase<S>
where
    S: ProfileStore,
{
    profiles: S,
}

impl<S> GetProfileUseCase<S>
where
    S: ProfileStore,
{
    pub fn new(profiles: S) -> Self {
        Self { profiles }
    }

    #[tracing::instrument(name = "GetProfileUseCase::execute", skip(self), fields(user_id = %claims.sub))]
    pub async fn execute(&self, claims: &Claims) -> Result<Profile, ProfileStoreError> {
        self.profiles.get(&claims.sub).await
    }
}
