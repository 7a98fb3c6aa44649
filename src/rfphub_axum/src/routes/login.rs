use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;
use serde_json::json;

use rfphub_adapters::create_session_cookie;
use rfphub_application::SignInUseCase;
use rfphub_core::{Email, EmailError, IdentityProvider, Password, PasswordError, ProfileStore};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<Secret<String>>,
    pub password: Option<Secret<String>>,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<P, S>(
    State(state): State<AppState<P, S>>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    P: IdentityProvider + Clone + 'static,
    S: ProfileStore + Clone + 'static,
{
    let email = Email::parse(request.email.ok_or(EmailError::Missing)?)?;
    let password = Password::parse(request.password.ok_or(PasswordError::Missing)?)?;

    let use_case = SignInUseCase::new(state.provider.clone());
    let (user, session) = use_case
        .execute(email, password)
        .await
        .map_err(ApiError::provider_error)?;

    let jar = jar.add(create_session_cookie(
        session.access_token.expose().to_string(),
        state.cookie_name(),
    ));

    Ok((jar, Json(json!({ "user": user, "session": session }))))
}
