//! # RfpHub - Marketplace Access-Control Library
//!
//! This is a facade crate that re-exports all public APIs from the access
//! control service components. Use this crate to get access to the whole
//! surface in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! rfphub = { path = "../rfphub" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Role`, `Profile`, etc.
//! - **Port traits**: `IdentityProvider`, `ProfileStore`
//! - **Use cases**: `SignupUseCase`, `UpdateProfileUseCase`, etc.
//! - **Adapters**: `HttpIdentityProvider`, `PostgresProfileStore`,
//!   `SessionResolver`, etc.
//! - **Service**: `MarketService` - The main entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use rfphub_core::*;
}

// Re-export most commonly used core types at the root level
pub use rfphub_core::{
    AccessToken, AuthSession, AuthUser, Claims, Email, EmailError, Password, PasswordError,
    Profile, ProfilePatch, Role, RoleError, UserId,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use rfphub_core::{
        IdentityError, IdentityProvider, ProfileStore, ProfileStoreError,
    };
}

// Re-export port traits at root level
pub use rfphub_core::{IdentityError, IdentityProvider, ProfileStore, ProfileStoreError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases and the client-side auth state
pub mod use_cases {
    pub use rfphub_application::*;
}

// Re-export use cases at root level
pub use rfphub_application::{
    AuthSnapshot, AuthState, GetProfileUseCase, RequestPasswordResetUseCase, SignInUseCase,
    SignOutUseCase, SignupUseCase, UpdatePasswordUseCase, UpdateProfileUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Identity provider clients
    pub mod identity {
        pub use rfphub_adapters::identity::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use rfphub_adapters::persistence::*;
    }

    /// Session resolution and cookie helpers
    pub mod session {
        pub use rfphub_adapters::session::*;
    }

    /// Configuration
    pub mod config {
        pub use rfphub_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use rfphub_adapters::{
    HttpIdentityProvider, InMemoryIdentityProvider, InMemoryProfileStore, PostgresProfileStore,
    SessionResolver,
};

// ============================================================================
// HTTP Surface
// ============================================================================

/// Axum handlers, the error taxonomy, and the route guard
pub mod api {
    pub use rfphub_axum::*;
}

// ============================================================================
// Market Service (Main Entry Point)
// ============================================================================

/// Main access-control service
pub use rfphub_service::{MarketService, init_tracing};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
