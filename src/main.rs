use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use recipe_api::app_state::AppState;
use recipe_api::auth::JwtService;
use recipe_api::config::Config;
use recipe_api::router::build_router;
use recipe_api::store::{self, PgTagStore, PgUserStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file first
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipe_api=debug,tower_http=debug".into()),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Loaded configuration for environment: {}",
        config.environment
    );

    // Setup database connection and run migrations
    let db_pool = store::db::setup_database(&config.database_url, config.max_connections).await?;
    store::db::run_migrations(&db_pool).await?;

    // Initialize authentication service
    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration);
    info!("JWT service initialized");

    let state = AppState::new(
        Arc::new(PgTagStore::new(db_pool.clone())),
        Arc::new(PgUserStore::new(db_pool)),
        jwt_service,
        config.clone(),
    );

    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, stopping server");
}
