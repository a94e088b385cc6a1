//! Keeping the running scene in step with the config: live reload from
//! the watcher, explicit reload and save, and in-app edits.

use bubble_config::schema::{BubbleConfig, SceneVariant};
use bubble_config::{reload::reload_config, save_config_to_path, ReloadManager};

use super::core::BubbleApp;

impl BubbleApp {
    /// Start watching the config file on a background tokio runtime.
    ///
    /// Failure leaves the app running without live reload.
    pub(super) fn start_live_reload(&mut self) {
        if self.config_rx.is_some() {
            return;
        }

        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build();

        match rt {
            Ok(rt) => {
                let path = self.config_path.clone();
                let (_, rx) = rt.block_on(ReloadManager::start(path));
                self.config_rx = Some(rx);
                self.tokio_runtime = Some(rt);
                tracing::info!(path = %self.config_path.display(), "Live config reload started");
            }
            Err(e) => {
                tracing::warn!("Failed to start tokio runtime for config reload: {e}");
            }
        }
    }

    /// Apply a config published by the watcher, if there is one.
    /// Returns `true` when a new config was installed.
    pub(super) fn poll_config_reload(&mut self) -> bool {
        let Some(ref mut rx) = self.config_rx else {
            return false;
        };

        match rx.has_changed() {
            Ok(true) => {
                let config = rx.borrow_and_update().clone();
                tracing::info!("Config changed on disk, applying");
                self.install_config(config);
                true
            }
            Ok(false) => false,
            Err(_) => {
                tracing::warn!("Config reload channel closed, live reload disabled");
                self.config_rx = None;
                false
            }
        }
    }

    /// Re-read the config file now, ignoring the watcher.
    pub(super) fn reload_from_disk(&mut self) {
        match reload_config(&self.config_path) {
            Ok(config) => {
                tracing::info!(path = %self.config_path.display(), "Config reloaded");
                self.install_config(config);
            }
            Err(e) => tracing::warn!("Config reload failed, keeping current settings: {e}"),
        }
    }

    /// Write the current (possibly tuned) config to the config file.
    pub(super) fn save_config(&self) {
        match save_config_to_path(&self.config, &self.config_path) {
            Ok(()) => tracing::info!(path = %self.config_path.display(), "Config saved"),
            Err(e) => tracing::error!("Failed to save config: {e}"),
        }
    }

    pub(super) fn set_variant(&mut self, variant: SceneVariant) {
        if self.config.scene.variant == variant {
            return;
        }
        tracing::info!(variant = variant.name(), "Switching scene variant");
        self.config.scene.variant = variant;
        self.apply_config();
    }

    /// Replace the config wholesale, keeping command-line overrides on top.
    fn install_config(&mut self, mut config: BubbleConfig) {
        self.overrides.apply(&mut config);
        if config == self.config {
            return;
        }
        self.config = config;
        self.apply_config();
    }

    /// Push `self.config` into the scene and, once it exists, the renderer.
    pub(super) fn apply_config(&mut self) {
        let change = self.scene.apply_config(&self.config);
        if let Some(ref mut rs) = self.render_state {
            rs.apply_config(&self.config, &mut self.scene, change);
        }
    }
}
