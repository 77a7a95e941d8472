//! Configuration validation.
//!
//! Serde handles the syntax; this module checks values that parse but make no
//! sense. All problems are collected so a bad file is reported in one go.

use std::net::SocketAddr;

use axum::http::HeaderValue;
use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("generator.min_records must be at least 1")]
    ZeroMinRecords,

    #[error("generator.min_records ({min}) exceeds generator.max_records ({max})")]
    RecordBounds { min: u32, max: u32 },

    #[error("generator.regenerate_every must be at least 1")]
    ZeroRegeneratePeriod,

    #[error("cors.allow_origin '{0}' is not a valid header value")]
    AllowOrigin(String),

    #[error("timeouts.request_secs must be at least 1")]
    ZeroRequestTimeout,

    #[error("observability.metrics_address '{0}' is not a socket address")]
    MetricsAddress(String),
}

/// Check a parsed config, returning every problem found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    let generator = &config.generator;
    if generator.min_records == 0 {
        errors.push(ValidationError::ZeroMinRecords);
    }
    if generator.min_records > generator.max_records {
        errors.push(ValidationError::RecordBounds {
            min: generator.min_records,
            max: generator.max_records,
        });
    }
    if generator.regenerate_every == 0 {
        errors.push(ValidationError::ZeroRegeneratePeriod);
    }

    if HeaderValue::from_str(&config.cors.allow_origin).is_err() {
        errors.push(ValidationError::AllowOrigin(config.cors.allow_origin.clone()));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
