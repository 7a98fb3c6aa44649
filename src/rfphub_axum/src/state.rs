use rfphub_adapters::SessionResolver;
use rfphub_core::{IdentityProvider, ProfileStore};

/// Shared handler state: the identity provider, the profile store, and the
/// session resolver built over the provider.
pub struct AppState<P, S> {
    pub provider: P,
    pub profiles: S,
    pub resolver: SessionResolver<P>,
    pub password_reset_redirect: String,
}

impl<P, S> AppState<P, S>
where
    P: IdentityProvider + Clone,
    S: ProfileStore + Clone,
{
    pub fn new(
        provider: P,
        profiles: S,
        cookie_name: impl Into<String>,
        password_reset_redirect: impl Into<String>,
    ) -> Self {
        let resolver = SessionResolver::new(provider.clone(), cookie_name);
        Self {
            provider,
            profiles,
            resolver,
            password_reset_redirect: password_reset_redirect.into(),
        }
    }

    pub fn cookie_name(&self) -> &str {
        self.resolver.cookie_name()
    }
}

impl<P: Clone, S: Clone> Clone for AppState<P, S> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            profiles: self.profiles.clone(),
            resolver: self.resolver.clone(),
            password_reset_redirect: self.password_reset_redirect.clone(),
        }
    }
}
