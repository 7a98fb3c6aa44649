use axum::{Json, extract::State, http::HeaderMap, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use serde_json::json;

use rfphub_application::UpdatePasswordUseCase;
use rfphub_core::{IdentityProvider, Password, PasswordError, ProfileStore};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UpdatePasswordRequest {
    pub password: Option<Secret<String>>,
}

#[tracing::instrument(name = "Update password", skip_all)]
pub async fn update_password<P, S>(
    State(state): State<AppState<P, S>>,
    headers: HeaderMap,
    Json(request): Json<UpdatePasswordRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    P: IdentityProvider + Clone + 'static,
    S: ProfileStore + Clone + 'static,
{
    let password = Password::parse(request.password.ok_or(PasswordError::Missing)?)?;

    let resolved = state
        .resolver
        .resolve(&headers)
        .await
        .map_err(ApiError::session_as_provider_error)?;

    let use_case = UpdatePasswordUseCase::new(state.provider.clone());
    use_case
        .execute(&resolved.token, password)
        .await
        .map_err(ApiError::provider_error)?;

    Ok(Json(json!({ "success": true })))
}
