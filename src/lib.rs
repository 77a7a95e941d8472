//! Mock node-status data service.
//!
//! Serves `GET /data`: a JSON array of 10-20 simulated node records. The batch
//! is regenerated on every second request so polling clients see data change.

// Core
pub mod config;
pub mod http;
pub mod records;
pub mod state;

// Cross-cutting concerns
pub mod error;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use records::{NodeStatus, Record, RecordGenerator};
pub use state::DataState;
