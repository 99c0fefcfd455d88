//! Backend entry-point: loads settings, builds the in-memory store and serves
//! the inventory REST API.

mod server;

use std::sync::Arc;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use mockable::{Clock, DefaultClock};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use inventory_backend::domain::InventoryService;
use inventory_backend::inbound::http::health::HealthState;
use inventory_backend::inbound::http::state::HttpState;
use inventory_backend::outbound::memory::{MemoryStore, sample_items};
use ortho_config::OrthoConfig;
use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr()?;

    let clock = Arc::new(DefaultClock);
    let store = Arc::new(MemoryStore::new(clock.clone()));
    if settings.seed_sample_items {
        seed_sample_items(&store, clock.as_ref())?;
    } else {
        info!(reason = "disabled", "sample item seeding skipped");
    }

    let service = Arc::new(InventoryService::new(store, clock));
    let http_state = HttpState::from_service(service);

    let config = ServerConfig::new(bind_addr);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(make_metrics()?));

    info!(bind_addr = %config.bind_addr(), "starting inventory backend");
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config, http_state)?;
    server.await
}

fn seed_sample_items(store: &MemoryStore, clock: &dyn Clock) -> std::io::Result<()> {
    let seeded = store
        .seed(sample_items(clock.utc()))
        .map_err(|e| std::io::Error::other(format!("sample item seeding failed: {e}")))?;
    info!(count = seeded.len(), "sample items seeded");
    Ok(())
}

#[cfg(feature = "metrics")]
fn make_metrics() -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new("inventory")
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::other(format!("failed to configure Prometheus metrics: {e}")))
}
