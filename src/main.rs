//! Service entry point.
//!
//! Startup order matters: configuration, store connection, liveness ping,
//! then the HTTP server. An unreachable store is fatal before the first
//! request is ever accepted.

use anyhow::Context;
use axum::http::HeaderValue;
use restaurant_api::api::rest::{create_router, AppState};
use restaurant_api::application::RestaurantQueryService;
use restaurant_api::config::AppConfig;
use restaurant_api::infrastructure::persistence::{MongoRestaurantStore, RestaurantStore};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;

    let store = MongoRestaurantStore::connect(
        &config.store_uri,
        &config.store_database,
        &config.store_collection,
    )
    .await
    .context("failed to create document store client")?;
    store
        .ping()
        .await
        .context("document store is unreachable")?;
    tracing::info!(
        database = %config.store_database,
        collection = %config.store_collection,
        "connected to document store"
    );

    let allowed_origin: HeaderValue = config
        .allowed_origin
        .parse()
        .context("allowed origin is not a valid header value")?;

    let service = RestaurantQueryService::new(Arc::new(store.clone()));
    let state = Arc::new(AppState::new(service));
    let router = create_router(state, allowed_origin);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, origin = %config.allowed_origin, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    store.close().await;
    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown signal handler");
    }
}
