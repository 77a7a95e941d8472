//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and lifecycle code produce:
//!     → logging.rs (tracing events, request spans via tower_http)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Prometheus scrape endpoint (when enabled)
//! ```

pub mod logging;
pub mod metrics;
