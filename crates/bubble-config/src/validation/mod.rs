//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod effects;
mod helpers;
mod material;
mod noise;
mod scene;

#[cfg(test)]
mod tests;

use crate::schema::BubbleConfig;
use bubble_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BubbleConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    noise::validate_noise(&mut errors, config);
    noise::validate_sphere(&mut errors, config);
    material::validate_material(&mut errors, config);
    effects::validate_effects(&mut errors, config);
    scene::validate_scene(&mut errors, config);
    scene::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
