//! Metrics collection and exposition.
//!
//! # Metrics
//! - `oed_proxy_lookups_total` (counter): lookups by outcome
//! - `oed_proxy_lookup_duration_seconds` (histogram): end-to-end lookup latency
//!
//! Outcomes: `ok`, `bad_request`, `transport`, `decode`, `config`, `panic`.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one finished lookup.
pub fn record_lookup(outcome: &'static str, start: Instant) {
    ::metrics::counter!("oed_proxy_lookups_total", "outcome" => outcome).increment(1);
    ::metrics::histogram!("oed_proxy_lookup_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}
