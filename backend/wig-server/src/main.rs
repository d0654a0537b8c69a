use wig_server::api::oauth::provider_client::OAuthClient;
use wig_server::{AppState, Config, build_router, logger};

use wig_auth::TokenService;

use std::error::Error;
use std::sync::Arc;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logger (before any other logging)
    logger::initialize(&config.log_level, config.log_colored)?;

    info!("Starting wig-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    info!("Connecting to database: {}", config.database_path);
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&config.database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Running database migrations...");
    sqlx::migrate!("../crates/wig-db/migrations").run(&pool).await?;
    info!("Migrations complete");

    // Signing key is derived once here; the service is shared read-only
    let token_service = Arc::new(TokenService::new(
        &config.jwt_secret,
        config.jwt_expiration_ms,
    )?);
    info!("Session tokens: HS256, lifetime {}ms", config.jwt_expiration_ms);

    let oauth = Arc::new(OAuthClient::new(&config));

    let state = AppState {
        pool,
        token_service,
        oauth,
        frontend_url: config.frontend_url.clone(),
    };

    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
