mod app;
mod auth;
mod config;
mod db;
mod errors;
mod logging;
mod models;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

use crate::auth::{Credentials, JwtKeys};
use crate::config::AppConfig;
use crate::logging::LoggingConfig;
use crate::state::AppState;
use crate::store::PgStockStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    logging::init_logging(LoggingConfig::from_env())?;

    let config = AppConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .context("failed to connect to the database")?;

    let state = AppState {
        stocks: Arc::new(PgStockStore::new(pool.clone(), config.table.clone())),
        jwt: Arc::new(JwtKeys::new(config.jwt_secret.as_bytes())),
        credentials: Arc::new(Credentials::new(
            config.admin_username.clone(),
            config.admin_password.clone(),
        )),
    };
    let app = app::create_app(state)
        .layer(app::cors_layer(&config.cors_allowed_origin)
            .context("CORS_ALLOWED_ORIGIN is not a valid origin")?);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("Stocks backend running at http://{}/ (table: {})", config.bind_addr, config.table);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
