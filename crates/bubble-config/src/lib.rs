//! Bubble configuration system.
//!
//! Provides TOML-based configuration with live reload and full
//! validation. All config sections use defaults so partial configs
//! work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bubble_config::{config_to_json, load_config_from};
//! use std::path::Path;
//!
//! let config = load_config_from(Path::new("bubble.toml")).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod colors;
pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schema::BubbleConfig;
pub use toml_writer::save_config_to_path;
pub use watcher::ConfigWatcher;

use bubble_common::ConfigError;
use std::path::Path;

/// Load config from an explicit path, creating it when missing.
pub fn load_config_from(path: &Path) -> Result<BubbleConfig, ConfigError> {
    let config = toml_loader::load_or_create(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string (`bubble --print-config`).
pub fn config_to_json(config: &BubbleConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
