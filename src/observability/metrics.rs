//! Metrics collection and exposition.
//!
//! # Metrics
//! - `banner_requests_total` (counter): requests by endpoint, status
//! - `banner_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Labels for endpoint and status code
//! - Exporter is optional and config-gated; recording without it is a no-op

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled request.
pub fn record_request(endpoint: &'static str, status: u16, start_time: Instant) {
    let labels = [
        ("endpoint", endpoint.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("banner_requests_total", &labels).increment(1);
    metrics::histogram!("banner_request_duration_seconds", &labels)
        .record(start_time.elapsed().as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_without_exporter_is_noop() {
        // No recorder installed; must not panic
        record_request("submit_banner", 200, Instant::now());
    }
}
