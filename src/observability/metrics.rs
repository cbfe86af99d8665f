//! Metrics collection and exposition.
//!
//! # Metrics
//! - `active_configs_selected` (histogram): active configurations per resolution
//! - `active_configs_loads_total` (counter): configured project loads by outcome
//! - `active_configs_load_duration_seconds` (histogram): time per load
//! - `active_configs_cache_size` (gauge): cached configured projects

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_selection(selected: usize) {
    ::metrics::histogram!("active_configs_selected").record(selected as f64);
}

pub fn record_load(outcome: &'static str, start: Instant) {
    ::metrics::counter!("active_configs_loads_total", "outcome" => outcome).increment(1);
    ::metrics::histogram!("active_configs_load_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_cache_size(size: usize) {
    ::metrics::gauge!("active_configs_cache_size").set(size as f64);
}
