use axum::{Json, extract::State, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use serde_json::json;

use rfphub_application::RequestPasswordResetUseCase;
use rfphub_core::{Email, EmailError, IdentityProvider, ProfileStore};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: Option<Secret<String>>,
}

/// Fire-and-forget reset request. Succeeds whether or not the address is
/// registered, so the endpoint discloses nothing about account existence.
#[tracing::instrument(name = "Forgot password", skip_all)]
pub async fn forgot_password<P, S>(
    State(state): State<AppState<P, S>>,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    P: IdentityProvider + Clone + 'static,
    S: ProfileStore + Clone + 'static,
{
    let email = Email::parse(request.email.ok_or(EmailError::Missing)?)?;

    let use_case = RequestPasswordResetUseCase::new(
        state.provider.clone(),
        state.password_reset_redirect.clone(),
    );
    use_case
        .execute(email)
        .await
        .map_err(ApiError::provider_error)?;

    Ok(Json(json!({ "success": true })))
}
