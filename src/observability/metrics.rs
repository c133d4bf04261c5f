//! Metrics collection and exposition.
//!
//! # Metrics
//! - `urlshort_redirects_total` (counter): requests answered with a redirect
//! - `urlshort_fallbacks_total` (counter): requests handed to the fallback
//!
//! Both carry a `source` label (`map` or `store`).

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_redirect(source: &'static str) {
    metrics::counter!("urlshort_redirects_total", "source" => source).increment(1);
}

pub fn record_fallback(source: &'static str) {
    metrics::counter!("urlshort_fallbacks_total", "source" => source).increment(1);
}
