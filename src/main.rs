use reqwest::Client as HttpClient;
use sqlx::postgres::PgPoolOptions;

use rfphub::{
    ExposeSecret, HttpIdentityProvider, MarketService, PostgresProfileStore,
    adapters::config::Settings, init_tracing,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    // Load configuration; required settings fail fast here
    let settings = Settings::load()?;

    // Setup database connection pool
    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(settings.postgres.url.expose_secret())
        .await?;

    // Run migrations
    sqlx::migrate!().run(&pg_pool).await?;

    // Outbound provider client with a bounded timeout
    let http_client = HttpClient::builder()
        .timeout(settings.provider.timeout())
        .build()?;

    let provider = HttpIdentityProvider::new(
        http_client,
        settings.provider.base_url.clone(),
        settings.provider.jwt_key.clone(),
    );
    let profiles = PostgresProfileStore::new(pg_pool);

    let service = MarketService::new(
        provider,
        profiles,
        settings.auth.cookie_name.clone(),
        settings.provider.password_reset_redirect.clone(),
    );

    let allowed_origins = (!settings.app.allowed_origins.is_empty())
        .then(|| settings.app.allowed_origins.clone());

    let listener = tokio::net::TcpListener::bind(&settings.app.address).await?;
    tracing::info!("Starting the access-control service...");

    service.run_standalone(listener, allowed_origins).await?;

    Ok(())
}
