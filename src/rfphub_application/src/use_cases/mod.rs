pub mod get_profile;
pub mod password_reset;
pub mod sign_in;
pub mod sign_out;
pub mod signup;
pub mod update_profile;
