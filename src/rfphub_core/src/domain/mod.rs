pub mod email;
pub mod password;
pub mod profile;
pub mod rfp;
pub mod role;
pub mod session;
pub mod user;
