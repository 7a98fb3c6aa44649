pub mod session_state;
pub mod use_cases;

pub use session_state::{AuthSnapshot, AuthState};
pub use use_cases::{
    get_profile::GetProfileUseCase,
    password_reset::{RequestPasswordResetUseCase, UpdatePasswordUseCase},
    sign_in::SignInUseCase,
    sign_out::SignOutUseCase,
    signup::SignupUseCase,
    update_profile::{UpdateProfileError, UpdateProfileUseCase},
};
