use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use rfphub_adapters::config::constants::LOGIN_PAGE_PATH;
use rfphub_core::{IdentityProvider, ProfileStore};

use crate::state::AppState;

/// Page guard for protected routes.
///
/// Any resolution failure redirects to the login page; the protected
/// content is never composed. Failure kinds are deliberately not
/// distinguished here.
pub async fn require_session<P, S>(
    State(state): State<AppState<P, S>>,
    request: Request,
    next: Next,
) -> Response
where
    P: IdentityProvider + Clone + 'static,
    S: ProfileStore + Clone + 'static,
{
    match state.resolver.resolve(request.headers()).await {
        Ok(_) => next.run(request).await,
        Err(_) => Redirect::to(LOGIN_PAGE_PATH).into_response(),
    }
}
