//! Startup and runtime errors for the service.

use thiserror::Error;

use crate::config::ConfigError;

/// Anything that stops the service from starting or keeps it from serving.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("metrics exporter error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("config watcher error: {0}")]
    Watch(#[from] notify::Error),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_bind_error_message() {
        let err = ServiceError::Bind {
            address: "127.0.0.1:5000".into(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(err.to_string(), "failed to bind 127.0.0.1:5000: address in use");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_config_error_converts() {
        let err: ServiceError = crate::config::parse_config("[generator]\nmin_records = 0")
            .unwrap_err()
            .into();
        assert!(matches!(err, ServiceError::Config(ConfigError::Validation(_))));
    }
}
