use rfphub_core::{AuthSession, AuthUser, Email, IdentityError, IdentityProvider, Password};

/// Sign-in use case - exchanges credentials for a provider session.
pub struct SignInUseCase<P>
where
    P: IdentityProvider,
{
    provider: P,
}

impl<P> SignInUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    #[tracing::instrument(name = "SignInUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
    ) -> Result<(AuthUser, AuthSession), IdentityError> {
        self.provider.sign_in(email, password).await
    }
}
