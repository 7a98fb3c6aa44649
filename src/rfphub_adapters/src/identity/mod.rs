pub mod http_identity_provider;
pub mod in_memory;

pub use http_identity_provider::HttpIdentityProvider;
pub use in_memory::InMemoryIdentityProvider;
