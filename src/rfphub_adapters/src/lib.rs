pub mod config;
pub mod identity;
pub mod persistence;
pub mod session;

pub use identity::{HttpIdentityProvider, InMemoryIdentityProvider};
pub use persistence::{InMemoryProfileStore, PostgresProfileStore};
pub use session::{
    ResolvedSession, SessionError, SessionResolver, create_removal_cookie, create_session_cookie,
};
