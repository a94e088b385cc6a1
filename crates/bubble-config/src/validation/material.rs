//! Glass material validation.

use crate::schema::BubbleConfig;

use super::helpers::{validate_color_field, validate_range_f32};

pub(crate) fn validate_material(errors: &mut Vec<String>, config: &BubbleConfig) {
    let m = &config.material;
    validate_range_f32(errors, "material.thickness", m.thickness, 0.0, 3.0);
    validate_range_f32(errors, "material.roughness", m.roughness, 0.0, 1.0);
    validate_range_f32(errors, "material.ior", m.ior, 0.8, 1.2);
    validate_range_f32(
        errors,
        "material.chromatic_aberration",
        m.chromatic_aberration,
        0.0,
        0.5,
    );
    validate_range_f32(errors, "material.distortion", m.distortion, 0.0, 1.0);
    validate_range_f32(
        errors,
        "material.temporal_distortion",
        m.temporal_distortion,
        0.0,
        0.3,
    );
    validate_range_f32(
        errors,
        "material.distortion_scale",
        m.distortion_scale,
        0.0,
        1.0,
    );
    validate_range_f32(
        errors,
        "material.anisotropic_blur",
        m.anisotropic_blur,
        0.0,
        10.0,
    );
    validate_color_field(errors, "material.color", &m.color);
}
