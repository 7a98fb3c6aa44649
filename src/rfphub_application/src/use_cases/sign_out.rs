use rfphub_core::{AccessToken, IdentityError, IdentityProvider};

/// Sign-out use case - invalidates the provider session.
pub struct SignOutUseCase<P>
where
    P: IdentityProvider,
{
    provider: P,
}

impl<P> SignOutUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Idempotent: signing out a session that is already gone is Ok.
    #[tracing::instrument(name = "SignOutUseCase::execute", skip_all)]
    pub async fn execute(&self, token: &AccessToken) -> Result<(), IdentityError> {
        self.provider.sign_out(token).await
    }
}
