// Main entry point - Dependency injection and runtime setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;

use crate::application::aircraft_service::AircraftService;
use crate::application::collector_service::CollectorService;
use crate::application::scheduler::{PeriodicRunner, TokioSleeper};
use crate::application::track_store::InMemoryTrackStore;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::logging::init_tracing;
use crate::infrastructure::opensky_client::OpenSkyClient;
use crate::infrastructure::snapshot_file::JsonFileSnapshot;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = load_app_config()?;

    // Output folder holds both the snapshot and the log file
    std::fs::create_dir_all(&config.collector.output_dir).with_context(|| {
        format!(
            "Failed to create output folder {}",
            config.collector.output_dir.display()
        )
    })?;

    // Initialize tracing
    init_tracing(&config.collector.log_path())?;

    // Create upstream client (infrastructure layer)
    let client = Arc::new(OpenSkyClient::new(&config.upstream)?);

    // Optional web surface, independent of the collector
    if let Some(bind) = &config.server.bind {
        let addr: SocketAddr = bind
            .parse()
            .with_context(|| format!("Invalid server.bind address {}", bind))?;
        let state = Arc::new(AppState {
            aircraft_service: AircraftService::new(client.clone()),
        });
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Serving /aircraft on {}", addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router(state)).await {
                tracing::error!("HTTP server stopped: {}", e);
            }
        });
    }

    // Collector loop (application layer)
    let sink = JsonFileSnapshot::new(config.collector.snapshot_path());
    tracing::info!("Writing snapshots to {}", sink.path().display());

    let collector = CollectorService::new(
        client,
        Box::new(InMemoryTrackStore::new()),
        Box::new(sink),
        config.collector.write_policy,
    );
    let mut runner = PeriodicRunner::new(
        collector,
        config.collector.interval(),
        Arc::new(TokioSleeper),
    );

    runner.run().await?;

    Ok(())
}
