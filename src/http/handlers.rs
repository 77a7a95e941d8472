//! Endpoint handlers.

use std::time::Instant;

use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::state::Stats;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /data`: count the request and serve the current batch.
pub async fn get_data(State(state): State<AppState>) -> Response {
    let start = Instant::now();
    let snapshot = state.data.next_snapshot();

    tracing::debug!(
        request_count = snapshot.request_count,
        regenerated = snapshot.regenerated,
        record_count = snapshot.records.len(),
        "Serving records"
    );

    if snapshot.regenerated {
        metrics::record_regeneration(snapshot.records.len());
    }

    let response = Json(snapshot.records.as_slice()).into_response();
    metrics::record_request("data", response.status().as_u16(), start);
    response
}

pub async fn get_health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /stats`: counters without counting as a data request.
pub async fn get_stats(State(state): State<AppState>) -> Json<Stats> {
    Json(state.data.stats())
}

pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!(path = %uri.path(), "No route matched");
    ApiError::NotFound(uri.path().to_string())
}
