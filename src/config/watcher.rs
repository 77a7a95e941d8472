//! Configuration file watcher for hot reload.
//!
//! The watch sits on the file's directory, not the file. Editors that save by
//! writing a temp file and renaming it over the config replace the inode, and
//! a watch on the old inode would go quiet after the first save.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::{parse_config, ConfigError};
use crate::config::schema::ServiceConfig;

/// A watcher that monitors the configuration file for changes.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<ServiceConfig>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for validated configuration updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<ServiceConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching. The returned watcher must be kept alive.
    ///
    /// Only valid, non-empty configs that differ from the last one sent are
    /// forwarded.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let dir = watch_dir(&self.path);
        let file_name = self.path.file_name().map(OsString::from);
        let path = self.path.clone();
        let tx = self.update_tx;
        let mut last_sent: Option<ServiceConfig> = None;

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                let event = match res {
                    Ok(event) => event,
                    Err(e) => {
                        tracing::error!(error = ?e, "Watch error");
                        return;
                    }
                };
                if !is_reload_event(&event, file_name.as_deref()) {
                    return;
                }

                match read_update(&path) {
                    Ok(Some(config)) => {
                        if last_sent.as_ref() == Some(&config) {
                            return;
                        }
                        tracing::info!(path = ?path, "Config file changed, reloading");
                        last_sent = Some(config.clone());
                        let _ = tx.send(config);
                    }
                    Ok(None) => {
                        tracing::debug!(path = ?path, "Config file empty, waiting for content");
                    }
                    Err(e) => {
                        tracing::error!(
                            error = %e,
                            "Failed to reload config, keeping current configuration"
                        );
                    }
                }
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, dir = ?dir, "Config watcher started");
        Ok(watcher)
    }
}

fn watch_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Creates, writes and rename-targets that touch the config file.
fn is_reload_event(event: &Event, file_name: Option<&std::ffi::OsStr>) -> bool {
    if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
        return false;
    }
    let Some(file_name) = file_name else {
        return false;
    };
    event
        .paths
        .iter()
        .any(|p| p.file_name() == Some(file_name))
}

/// Read the config file. `Ok(None)` while it is empty, which is what a
/// truncating write leaves behind before the new content lands.
fn read_update(path: &Path) -> Result<Option<ServiceConfig>, ConfigError> {
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    parse_config(&content).map(Some)
}
