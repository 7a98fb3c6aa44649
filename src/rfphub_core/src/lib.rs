pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::{Email, EmailError},
    password::{Password, PasswordError},
    profile::{Profile, ProfilePatch},
    rfp::{Proposal, ProposalStatus, Rfp, RfpStatus},
    role::{Role, RoleError},
    session::{AccessToken, AuthSession, Claims},
    user::{AuthUser, UserId},
};

pub use ports::{
    identity::{IdentityError, IdentityProvider},
    profiles::{ProfileStore, ProfileStoreError},
};
