use axum::{Json, extract::State, http::HeaderMap, response::IntoResponse};
use serde_json::json;

use rfphub_core::{IdentityProvider, ProfileStore};

use crate::error::ApiError;
use crate::state::AppState;

/// Returns the provider's current view of the user. Round-trips to the
/// provider so a revoked token is caught even if it still decodes.
#[tracing::instrument(name = "Get user", skip_all)]
pub async fn user<P, S>(
    State(state): State<AppState<P, S>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError>
where
    P: IdentityProvider + Clone + 'static,
    S: ProfileStore + Clone + 'static,
{
    let (user, _) = state
        .resolver
        .resolve_verified(&headers)
        .await
        .map_err(ApiError::session_as_provider_error)?;

    Ok(Json(json!({ "user": user })))
}
