mod config;
mod dto;
mod error;
mod routes;
mod state;
mod worker;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use mc_provision::{OrderProvisioner, Provisioner};
use tokio::sync::mpsc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::routes::api_router;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env().expect("invalid server configuration");

    // Panel + DNS
    let provisioner: Arc<dyn OrderProvisioner> =
        Arc::new(Provisioner::from_env().expect("invalid provisioning configuration"));

    // Background provisioning
    let (failures_tx, failures_rx) = mpsc::unbounded_channel();
    worker::spawn_failure_logger(failures_rx);
    let queue = worker::spawn_worker(provisioner.clone(), failures_tx);

    let state = AppState { provisioner, queue };

    let app = api_router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .expect("failed to bind listener");

    tracing::info!(addr = %config.listen_addr, "starting order webhook");

    axum::serve(listener, app).await.expect("server error");
}
