//! Startup orchestration.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use crate::config::{load_config, validate_config, ConfigError, ConfigWatcher, ServiceConfig};
use crate::error::ServiceError;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;
use crate::state::DataState;

/// Options that come from the command line rather than the config file.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Config file to watch for generator changes.
    pub watch_path: Option<PathBuf>,
    /// Fixed seed for reproducible batches.
    pub seed: Option<u64>,
}

/// Load the config file (or defaults) and apply a bind address override.
pub fn resolve_config(
    path: Option<&Path>,
    bind_override: Option<&str>,
) -> Result<ServiceConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(bind) = bind_override {
        config.listener.bind_address = bind.to_string();
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    Ok(config)
}

/// Start every subsystem and serve until a shutdown signal arrives.
pub async fn run(config: ServiceConfig, options: StartupOptions) -> Result<(), ServiceError> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        min_records = config.generator.min_records,
        max_records = config.generator.max_records,
        regenerate_every = config.generator.regenerate_every,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| ServiceError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    // The watcher stops when dropped, so it is held until the server returns.
    let (_watcher, config_updates) = match options.watch_path.as_deref() {
        Some(path) => {
            let (watcher, updates) = ConfigWatcher::new(path);
            (Some(watcher.run()?), updates)
        }
        None => {
            let (_, updates) = mpsc::unbounded_channel();
            (None, updates)
        }
    };

    let data = match options.seed {
        Some(seed) => DataState::with_seed(&config.generator, seed),
        None => DataState::new(&config.generator),
    };
    let server = HttpServer::with_state(&config, data);

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_shutdown_signal().await;
        shutdown.trigger();
    });

    server.run(listener, config_updates, server_shutdown).await?;
    Ok(())
}
