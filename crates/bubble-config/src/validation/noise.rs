//! Noise and sphere geometry validation.

use crate::schema::BubbleConfig;

use super::helpers::{validate_range, validate_range_f32};

pub(crate) fn validate_noise(errors: &mut Vec<String>, config: &BubbleConfig) {
    validate_range_f32(errors, "noise.intensity", config.noise.intensity, 0.0, 0.5);
    validate_range_f32(errors, "noise.speed", config.noise.speed, 0.0, 0.5);
}

pub(crate) fn validate_sphere(errors: &mut Vec<String>, config: &BubbleConfig) {
    validate_range_f32(errors, "sphere.radius", config.sphere.radius, 0.01, 10.0);
    validate_range(
        errors,
        "sphere.width_segments",
        config.sphere.width_segments,
        3,
        512,
    );
    validate_range(
        errors,
        "sphere.height_segments",
        config.sphere.height_segments,
        2,
        512,
    );
}
