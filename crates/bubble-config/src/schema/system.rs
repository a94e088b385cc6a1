//! System configuration types: window and logging.

use serde::{Deserialize, Serialize};

/// Initial window settings. Not reloaded live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width (valid range: 100-8192).
    pub width: u32,
    /// Logical height (valid range: 100-8192).
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Bubble".into(),
            width: 1280,
            height: 800,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// `EnvFilter` directive applying this level to the bubble crates and
    /// `warn` to everything else (wgpu is chatty at info).
    pub fn directive(self) -> String {
        let level = self.as_str();
        format!("warn,bubble={level},bubble_app={level},bubble_renderer={level},bubble_config={level}")
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
