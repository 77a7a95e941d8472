//! Metrics collection and exposition.
//!
//! # Metrics
//! - `mock_requests_total` (counter): requests by endpoint, status
//! - `mock_request_duration_seconds` (histogram): handler latency by endpoint
//! - `mock_regenerations_total` (counter): batches generated
//! - `mock_records_current` (gauge): size of the batch being served
//!
//! Recording is a no-op until `init_metrics` installs the exporter.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter with an HTTP scrape listener on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    describe_counter!("mock_requests_total", "Requests served, by endpoint and status");
    describe_histogram!(
        "mock_request_duration_seconds",
        "Handler latency in seconds, by endpoint"
    );
    describe_counter!("mock_regenerations_total", "Record batches generated");
    describe_gauge!("mock_records_current", "Records in the batch being served");

    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record a served request.
pub fn record_request(endpoint: &'static str, status: u16, start: Instant) {
    counter!(
        "mock_requests_total",
        "endpoint" => endpoint,
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("mock_request_duration_seconds", "endpoint" => endpoint)
        .record(start.elapsed().as_secs_f64());
}

/// Record that a new batch of `record_count` records replaced the old one.
pub fn record_regeneration(record_count: usize) {
    counter!("mock_regenerations_total").increment(1);
    gauge!("mock_records_current").set(record_count as f64);
}
