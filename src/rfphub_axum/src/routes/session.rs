use axum::{Json, extract::State, http::HeaderMap, response::IntoResponse};
use chrono::{TimeZone, Utc};
use serde_json::json;

use rfphub_core::{AuthSession, IdentityProvider, ProfileStore};

use crate::error::ApiError;
use crate::state::AppState;

/// Returns the current session, reconstructed from the resolved token and
/// its claims. Failures are reported as 400s carrying the identity
/// failure's message.
#[tracing::instrument(name = "Get session", skip_all)]
pub async fn session<P, S>(
    State(state): State<AppState<P, S>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError>
where
    P: IdentityProvider + Clone + 'static,
    S: ProfileStore + Clone + 'static,
{
    let resolved = state
        .resolver
        .resolve(&headers)
        .await
        .map_err(ApiError::session_as_provider_error)?;

    let expires_at = Utc
        .timestamp_opt(resolved.claims.exp as i64, 0)
        .single()
        .ok_or_else(|| ApiError::Internal("session carries an invalid expiry".to_string()))?;

    let session = AuthSession {
        access_token: resolved.token,
        token_type: "bearer".to_string(),
        expires_at,
    };

    Ok(Json(json!({ "session": session })))
}
