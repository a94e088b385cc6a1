//! Core reload manager implementation.

use crate::schema::BubbleConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::ConfigWatcher;
use bubble_common::ConfigError;
use std::path::{Path, PathBuf};
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Manages live config reloading.
///
/// Watches the config file for changes and publishes new configs
/// via a [`tokio::sync::watch`] channel. Invalid edits are logged and
/// ignored; receivers keep the last good config.
pub struct ReloadManager {
    config_path: PathBuf,
}

impl ReloadManager {
    /// Load the initial config from the given path and start watching for changes.
    ///
    /// Returns the initial config and a watch receiver that will receive
    /// updated configs whenever the file changes on disk. Must be called
    /// from within a tokio runtime; the watcher runs as a background task.
    pub async fn start(config_path: PathBuf) -> (BubbleConfig, watch::Receiver<BubbleConfig>) {
        let initial_config = match toml_loader::load_from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load config: {e}, using defaults");
                BubbleConfig::default()
            }
        };

        let (config_tx, config_rx) = watch::channel(initial_config.clone());

        let manager = ReloadManager { config_path };
        tokio::spawn(async move {
            manager.run_watch_loop(config_tx).await;
        });

        (initial_config, config_rx)
    }

    /// Internal watch loop that reloads config on file changes.
    async fn run_watch_loop(&self, config_tx: watch::Sender<BubbleConfig>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);

        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) => {
                    info!("reloading config from {}", self.config_path.display());
                    match reload_config(&self.config_path) {
                        Ok(config) => {
                            if config_tx.is_closed() {
                                info!("all config receivers dropped, stopping reload manager");
                                break;
                            }
                            publish_if_changed(&config_tx, config);
                        }
                        Err(e) => warn!("config reload failed: {e}"),
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("config watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("config watcher channel closed");
                    break;
                }
            }
        }
    }
}

/// Load and validate a config from disk. Unlike
/// [`toml_loader::load_from_path`], validation failures are errors.
pub fn reload_config(path: &Path) -> Result<BubbleConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Publish `config` unless it equals the current value. Returns whether
/// receivers were notified.
pub(crate) fn publish_if_changed(tx: &watch::Sender<BubbleConfig>, config: BubbleConfig) -> bool {
    tx.send_if_modified(|current| {
        if *current == config {
            false
        } else {
            *current = config;
            true
        }
    })
}
