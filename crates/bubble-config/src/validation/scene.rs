//! Scene and window validation.

use crate::schema::BubbleConfig;

use super::helpers::{validate_color_field, validate_range, validate_range_f32};

pub(crate) fn validate_scene(errors: &mut Vec<String>, config: &BubbleConfig) {
    validate_color_field(errors, "scene.background", &config.scene.background);
    validate_range_f32(
        errors,
        "scene.image_scale",
        config.scene.image_scale,
        0.1,
        10.0,
    );
    if let Some(ref image) = config.scene.image {
        if image.trim().is_empty() {
            errors.push("scene.image must not be empty when set".into());
        }
    }
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &BubbleConfig) {
    validate_range(errors, "window.width", config.window.width, 100, 8192);
    validate_range(errors, "window.height", config.window.height, 100, 8192);
}
