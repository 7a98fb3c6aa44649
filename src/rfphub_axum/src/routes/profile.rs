//! Profile endpoints.
//!
//! The store is always scoped to the resolved session subject; no handler
//! here accepts a caller-supplied user id.

use axum::{Json, extract::State, http::HeaderMap, response::IntoResponse};
use serde_json::json;

use rfphub_application::{GetProfileUseCase, UpdateProfileUseCase};
use rfphub_core::{Claims, IdentityProvider, ProfilePatch, ProfileStore};

use crate::error::ApiError;
use crate::state::AppState;

fn claims_user(claims: &Claims) -> serde_json::Value {
    json!({
        "id": claims.sub,
        "email": claims.email,
        "role": claims.role,
    })
}

/// `GET /api/profile/me` over the session cookie.
#[tracing::instrument(name = "Get my profile", skip_all)]
pub async fn my_profile<P, S>(
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
        .map_err(ApiError::authentication)?;

    let use_case = GetProfileUseCase::new(state.profiles.clone());
    let profile = use_case.execute(&resolved.claims).await?;

    Ok(Json(json!({
        "user": claims_user(&resolved.claims),
        "profile": profile,
    })))
}

/// `GET /api/test/profile` over an `Authorization: Bearer` token, for API
/// clients that do not carry cookies.
#[tracing::instrument(name = "Get profile by bearer token", skip_all)]
pub async fn token_profile<P, S>(
    State(state): State<AppState<P, S>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError>
where
    P: IdentityProvider + Clone + 'static,
    S: ProfileStore + Clone + 'static,
{
    let resolved = state
        .resolver
        .resolve_bearer(&headers)
        .await
        .map_err(ApiError::authentication)?;

    let use_case = GetProfileUseCase::new(state.profiles.clone());
    let profile = use_case.execute(&resolved.claims).await?;

    Ok(Json(json!({
        "user": claims_user(&resolved.claims),
        "profile": profile,
    })))
}

/// `PUT /api/profile`: applies a patch to the caller's own profile. The
/// use case re-verifies the token with the provider before writing.
#[tracing::instrument(name = "Update profile", skip_all)]
pub async fn update_profile<P, S>(
    State(state): State<AppState<P, S>>,
    headers: HeaderMap,
    Json(patch): Json<ProfilePatch>,
) -> Result<impl IntoResponse, ApiError>
where
    P: IdentityProvider + Clone + 'static,
    S: ProfileStore + Clone + 'static,
{
    let resolved = state
        .resolver
        .resolve(&headers)
        .await
        .map_err(ApiError::authentication)?;

    let use_case = UpdateProfileUseCase::new(state.provider.clone(), state.profiles.clone());
    use_case.execute(&resolved.token, patch).await?;

    Ok(Json(json!({ "success": true })))
}
