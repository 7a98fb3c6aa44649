use axum::{
    Router,
    http::{HeaderValue, Method, request},
    middleware,
    response::Html,
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use rfphub_adapters::config::AllowedOrigins;
use rfphub_axum::{AppState, require_session, routes};
use rfphub_core::{IdentityProvider, ProfileStore};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The assembled access-control service: the `/api` surface, the auth
/// callback, and the guarded page routes.
pub struct MarketService {
    router: Router,
}

impl MarketService {
    /// Wire the routes over a provider and a profile store.
    ///
    /// Both are Clone via internal sharing, so the same instances back
    /// every route.
    pub fn new<P, S>(
        provider: P,
        profiles: S,
        cookie_name: impl Into<String>,
        password_reset_redirect: impl Into<String>,
    ) -> Self
    where
        P: IdentityProvider + Clone + 'static,
        S: ProfileStore + Clone + 'static,
    {
        let state = AppState::new(provider, profiles, cookie_name, password_reset_redirect);

        let api = Router::new()
            .route("/auth/signup", post(routes::signup::<P, S>))
            .route("/auth/login", post(routes::login::<P, S>))
            .route("/auth/logout", post(routes::logout::<P, S>))
            .route("/auth/forgot-password", post(routes::forgot_password::<P, S>))
            .route("/auth/update-password", post(routes::update_password::<P, S>))
            .route("/auth/session", get(routes::session::<P, S>))
            .route("/auth/user", get(routes::user::<P, S>))
            .route("/profile/me", get(routes::my_profile::<P, S>))
            .route("/profile", put(routes::update_profile::<P, S>))
            .route("/test/profile", get(routes::token_profile::<P, S>));

        // Guarded pages: the middleware redirects to the login page before
        // any protected content is composed.
        let pages = Router::new()
            .route("/dashboard", get(dashboard_page))
            .route("/rfps", get(rfps_page))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_session::<P, S>,
            ));

        let router = Router::new()
            .nest("/api", api)
            .merge(pages)
            .route("/auth/login", get(login_page))
            .route("/auth/callback", get(routes::callback::<P, S>))
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Finish the router, optionally restricting credentialed cross-origin
    /// requests to the configured origins.
    pub fn into_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run as a standalone server on the given listener.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.into_router(allowed_origins);

        tracing::info!("Access-control service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}

async fn login_page() -> Html<&'static str> {
    Html("<h1>Sign in</h1>")
}

async fn dashboard_page() -> Html<&'static str> {
    Html("<h1>Dashboard</h1>")
}

async fn rfps_page() -> Html<&'static str> {
    Html("<h1>Open RFPs</h1>")
}
