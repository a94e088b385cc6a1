//! Write BubbleConfig to TOML on disk.
//!
//! Supports atomic writes (write to `.tmp`, then rename) to prevent
//! corruption if the process crashes mid-write. Saving into the watched
//! file triggers a reload, which is a no-op when nothing changed.

use std::path::Path;

use bubble_common::ConfigError;

use crate::schema::BubbleConfig;
use crate::validation;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Validate `config` and write it to `path`.
///
/// Creates parent directories if they don't exist. An invalid config is
/// rejected before anything touches the disk.
pub fn save_config_to_path(config: &BubbleConfig, path: &Path) -> Result<(), ConfigError> {
    validation::validate(config)?;
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))?;
    write_atomic(path, &toml_str)?;
    tracing::debug!(path = %path.display(), "config saved to disk");
    Ok(())
}

/// Write `contents` beside `path` as `.toml.tmp`, then rename into place.
fn write_atomic(path: &Path, contents: &str) -> Result<(), ConfigError> {
    let io_err = |target: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to write {}: {e}", target.display()))
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, contents).map_err(|e| io_err(&tmp_path, e))?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Windows cannot rename over an open file
        tracing::warn!("atomic rename failed ({e}), falling back to direct write");
        let direct = std::fs::write(path, contents).map_err(|e| io_err(path, e));
        let _ = std::fs::remove_file(&tmp_path);
        direct?;
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BloomKernelSize, SceneVariant};
    use tempfile::TempDir;

    #[test]
    fn save_config_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = BubbleConfig::default();
        config.noise.intensity = 0.21;
        config.effects.bloom.kernel_size = BloomKernelSize::Large;
        config.scene.variant = SceneVariant::Masked;
        config.scene.image = Some("medias/portrait.jpg".into());
        save_config_to_path(&config, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: BubbleConfig = toml::from_str(&contents).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn invalid_config_is_not_written() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = BubbleConfig::default();
        config.material.ior = 3.0;
        let err = save_config_to_path(&config, &path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(!path.exists());
    }

    #[test]
    fn save_config_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("config.toml");

        save_config_to_path(&BubbleConfig::default(), &path).unwrap();

        assert!(path.exists());
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[noise]"));
    }

    #[test]
    fn save_config_cleans_up_tmp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        save_config_to_path(&BubbleConfig::default(), &path).unwrap();

        let tmp_path = path.with_extension("toml.tmp");
        assert!(
            !tmp_path.exists(),
            "tmp file should be cleaned up after rename"
        );
    }
}
