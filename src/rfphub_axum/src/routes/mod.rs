//! Route handlers for the `/api` surface and the auth callback.

pub mod callback;
pub mod forgot_password;
pub mod login;
pub mod logout;
pub mod profile;
pub mod session;
pub mod signup;
pub mod update_password;
pub mod user;

pub use callback::callback;
pub use forgot_password::forgot_password;
pub use login::login;
pub use logout::logout;
pub use profile::{my_profile, token_profile, update_profile};
pub use session::session;
pub use signup::signup;
pub use update_password::update_password;
pub use user::user;
