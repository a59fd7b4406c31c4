mod domain;
mod error;

mod api;
mod app_system;
mod notify;
mod repository;
mod services;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod product_actor;
mod user_actor;

use std::future::IntoFuture;

use clap::Parser;
use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, Config, StoreSystem, SystemOptions};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = Config::parse();

    // Setup tracing once for the entire application
    setup_tracing(config.log_format);

    info!(bind = %config.bind, "Starting storefront");

    let system = StoreSystem::new(SystemOptions::from(&config));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", config.bind, e))?;
    info!(addr = %config.bind, "Listening for HTTP requests");

    let span = tracing::info_span!("http_server");
    axum::serve(listener, api::router(system.app_state()))
        .with_graceful_shutdown(shutdown_signal())
        .into_future()
        .instrument(span)
        .await
        .map_err(|e| e.to_string())?;

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler the server keeps running until killed.
            error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
