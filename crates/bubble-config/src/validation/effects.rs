//! Post-processing validation (hue/saturation, bloom).

use crate::schema::BubbleConfig;

use super::helpers::{validate_range, validate_range_f32};

pub(crate) fn validate_effects(errors: &mut Vec<String>, config: &BubbleConfig) {
    let hs = &config.effects.hue_saturation;
    validate_range_f32(errors, "effects.hue_saturation.hue", hs.hue, 0.0, 2.0);
    validate_range_f32(
        errors,
        "effects.hue_saturation.saturation",
        hs.saturation,
        0.2,
        0.8,
    );

    let bloom = &config.effects.bloom;
    validate_range_f32(errors, "effects.bloom.intensity", bloom.intensity, 0.0, 5.0);
    validate_range_f32(
        errors,
        "effects.bloom.luminance_threshold",
        bloom.luminance_threshold,
        0.0,
        1.0,
    );
    validate_range_f32(
        errors,
        "effects.bloom.luminance_smoothing",
        bloom.luminance_smoothing,
        0.0,
        1.0,
    );
    validate_range(
        errors,
        "effects.bloom.resolution_x",
        bloom.resolution_x,
        0,
        2048,
    );
    validate_range(
        errors,
        "effects.bloom.resolution_y",
        bloom.resolution_y,
        0,
        2048,
    );
}
