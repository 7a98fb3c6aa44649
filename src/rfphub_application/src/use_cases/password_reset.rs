use rfphub_core::{AccessToken, Email, IdentityError, IdentityProvider, Password};

/// Request-password-reset use case - asks the provider to dispatch a reset
/// email pointing back at the configured redirect target.
pub struct RequestPasswordResetUseCase<P>
where
    P: IdentityProvider,
{
    provider: P,
    redirect_to: String,
}

impl<P> RequestPasswordResetUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: P, redirect_to: String) -> Self {
        Self {
            provider,
            redirect_to,
        }
    }

    /// Fire-and-forget: success only means the provider accepted the
    /// dispatch request.
    #[tracing::instrument(name = "RequestPasswordResetUseCase::execute", skip(self))]
    pub async fn execute(&self, email: Email) -> Result<(), IdentityError> {
        self.provider
            .request_password_reset(email, &self.redirect_to)
            .await
    }
}

/// Update-password use case - requires an active session.
pub struct UpdatePasswordUseCase<P>
where
    P: IdentityProvider,
{
    provider: P,
}

impl<P> UpdatePasswordUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    #[tracing::instrument(name = "UpdatePasswordUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        token: &AccessToken,
        new_password: Password,
    ) -> Result<(), IdentityError> {
        self.provider.update_password(token, new_password).await
    }
}
