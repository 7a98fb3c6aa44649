//! Axum HTTP surface for the marketplace access-control service.
//!
//! Route handlers are generic over the identity-provider and profile-store
//! ports, so the same surface runs against the hosted provider in
//! production and the in-memory doubles in tests.

pub mod error;
pub mod guard;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use guard::require_session;
pub use state::AppState;
