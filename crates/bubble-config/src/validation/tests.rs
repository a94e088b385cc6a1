//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = BubbleConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_noise_intensity_too_large() {
    let mut config = BubbleConfig::default();
    config.noise.intensity = 0.9;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("noise.intensity"));
}

#[test]
fn catches_negative_noise_speed() {
    let mut config = BubbleConfig::default();
    config.noise.speed = -0.1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("noise.speed"));
}

#[test]
fn catches_nan_values() {
    let mut config = BubbleConfig::default();
    config.material.ior = f32::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("material.ior"));
}

#[test]
fn catches_too_few_segments() {
    let mut config = BubbleConfig::default();
    config.sphere.width_segments = 2;
    config.sphere.height_segments = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sphere.width_segments"));
    assert!(err.contains("sphere.height_segments"));
}

#[test]
fn catches_bad_material_color() {
    let mut config = BubbleConfig::default();
    config.material.color = "pink".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("material.color"));
}

#[test]
fn catches_saturation_out_of_range() {
    let mut config = BubbleConfig::default();
    config.effects.hue_saturation.saturation = 0.1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("effects.hue_saturation.saturation"));
}

#[test]
fn catches_bloom_resolution_too_large() {
    let mut config = BubbleConfig::default();
    config.effects.bloom.resolution_x = 4096;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("effects.bloom.resolution_x"));
}

#[test]
fn catches_empty_image_path() {
    let mut config = BubbleConfig::default();
    config.scene.image = Some("  ".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.image"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = BubbleConfig::default();
    config.noise.intensity = 1.0;
    config.effects.bloom.intensity = 10.0;
    config.window.width = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("noise.intensity"));
    assert!(err.contains("effects.bloom.intensity"));
    assert!(err.contains("window.width"));
    assert_eq!(err.matches("; ").count(), 2);
}

#[test]
fn range_boundaries_are_inclusive() {
    let mut config = BubbleConfig::default();
    config.noise.intensity = 0.5;
    config.noise.speed = 0.0;
    config.material.thickness = 3.0;
    config.effects.bloom.resolution_y = 2048;
    assert!(validate(&config).is_ok());
}
