use rfphub_core::{AuthSession, AuthUser, Email, IdentityError, IdentityProvider, Password, Role};

/// Signup use case - registers a user with the identity provider.
///
/// The profile row itself is created by the provider-side onboarding
/// trigger, not here.
pub struct SignupUseCase<P>
where
    P: IdentityProvider,
{
    provider: P,
}

impl<P> SignupUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Execute the signup use case.
    ///
    /// Returns the provider-issued user and session pair, or the provider's
    /// rejection verbatim. Success can never carry a null user: the pair is
    /// constructed by the provider or not at all.
    #[tracing::instrument(name = "SignupUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
        role: Role,
    ) -> Result<(AuthUser, AuthSession), IdentityError> {
        self.provider.sign_up(email, password, role).await
    }
}
