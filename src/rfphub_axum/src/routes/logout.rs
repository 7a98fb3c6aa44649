use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde_json::json;

use rfphub_adapters::create_removal_cookie;
use rfphub_application::SignOutUseCase;
use rfphub_core::{AccessToken, IdentityError, IdentityProvider, ProfileStore};

use crate::error::ApiError;
use crate::state::AppState;

/// Ends the session and removes the cookie. Idempotent: a request with no
/// cookie, or with an already-dead token, still succeeds.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<P, S>(
    State(state): State<AppState<P, S>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError>
where
    P: IdentityProvider + Clone + 'static,
    S: ProfileStore + Clone + 'static,
{
    if let Some(cookie) = jar.get(state.cookie_name()) {
        let token = AccessToken::new(cookie.value());
        let use_case = SignOutUseCase::new(state.provider.clone());
        use_case.execute(&token).await.map_err(|e| match e {
            IdentityError::Unavailable(msg) | IdentityError::Unexpected(msg) => {
                ApiError::Internal(msg)
            }
            other => ApiError::Internal(other.to_string()),
        })?;
    }

    let jar = jar.add(create_removal_cookie(state.cookie_name()));
    Ok((jar, Json(json!({ "success": true }))))
}
