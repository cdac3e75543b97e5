use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use luminar_backend::config::app_config::AppConfig;
use luminar_backend::{build_router, db, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::from_env().context("invalid configuration")?;

    // Initialize tracing, chattier in development
    let default_filter = if config.is_development() { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(config.environment.clone().into()),
            ..Default::default()
        }))
    });

    if config.admin_token.is_none() {
        tracing::warn!("CONTACT_ADMIN_TOKEN is not set, the contact inbox endpoint will answer 503");
    }

    // Set up database connection pool
    let pool = db::build_pool(&config.database_url)
        .with_context(|| format!("failed to open database {}", config.database_url))?;
    let applied = db::run_migrations(&pool)?;
    tracing::info!(applied, database = %config.database_url, "Database ready");

    let bind_addr = config.bind_addr;
    let state = Arc::new(AppState::new(pool, config));

    // Forget clients whose submission quota has replenished
    let limiter = state.submission_limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(300));
        loop {
            interval.tick().await;
            limiter.prune();
            tracing::debug!(clients = limiter.tracked_clients(), "Pruned submission limiter");
        }
    });

    let app = build_router(state);

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!(%bind_addr, "Listening");

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
