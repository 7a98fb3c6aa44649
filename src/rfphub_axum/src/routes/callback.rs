use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use rfphub_adapters::{config::constants::LOGIN_PAGE_PATH, create_session_cookie};
use rfphub_core::{IdentityProvider, ProfileStore};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
}

/// `GET /auth/callback?code=`: exchanges the one-time confirmation code
/// for a session, sets the cookie, and lands on the dashboard. Any failure
/// falls back to the login page; the code is single-use so a retry with
/// the same URL also lands there.
#[tracing::instrument(name = "Auth callback", skip_all)]
pub async fn callback<P, S>(
    State(state): State<AppState<P, S>>,
    jar: CookieJar,
    Query(params): Query<CallbackParams>,
) -> Response
where
    P: IdentityProvider + Clone + 'static,
    S: ProfileStore + Clone + 'static,
{
    let Some(code) = params.code else {
        return Redirect::to(LOGIN_PAGE_PATH).into_response();
    };

    match state.provider.exchange_code(&code).await {
        Ok((_, session)) => {
            let jar = jar.add(create_session_cookie(
                session.access_token.expose().to_string(),
                state.cookie_name(),
            ));
            (jar, Redirect::to("/dashboard")).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "code exchange failed");
            Redirect::to(LOGIN_PAGE_PATH).into_response()
        }
    }
}
