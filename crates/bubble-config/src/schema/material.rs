//! Transmission (glass) material parameters.

use serde::{Deserialize, Serialize};

/// Optical parameters for the bubble's glass shader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialConfig {
    /// Refraction depth (valid range: 0.0-3.0).
    pub thickness: f32,
    /// Surface roughness (valid range: 0.0-1.0).
    pub roughness: f32,
    /// Index of refraction (valid range: 0.8-1.2).
    pub ior: f32,
    /// Per-channel refraction spread (valid range: 0.0-0.5).
    pub chromatic_aberration: f32,
    /// Noise distortion strength (valid range: 0.0-1.0).
    pub distortion: f32,
    /// Distortion drift speed (valid range: 0.0-0.3).
    pub temporal_distortion: f32,
    /// Distortion noise frequency (valid range: 0.0-1.0).
    pub distortion_scale: f32,
    /// Directional blur of the transmitted image (valid range: 0.0-10.0).
    pub anisotropic_blur: f32,
    /// Tint color as hex string.
    pub color: String,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            thickness: 3.0,
            roughness: 0.0,
            ior: 1.02,
            chromatic_aberration: 0.01,
            distortion: 1.0,
            temporal_distortion: 0.09,
            distortion_scale: 0.2,
            anisotropic_blur: 0.8,
            color: "#fdf1ff".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_partial_toml() {
        let toml_str = r##"
ior = 1.1
color = "#ff0000"
"##;
        let config: MaterialConfig = toml::from_str(toml_str).unwrap();
        assert!((config.ior - 1.1).abs() < f32::EPSILON);
        assert_eq!(config.color, "#ff0000");
        assert!((config.thickness - 3.0).abs() < f32::EPSILON);
    }
}
