//! Post-processing effects configuration types.
//!
//! Hue/saturation grading and bloom. Whether each effect runs is decided by
//! the scene variant (see [`super::SceneConfig`]); these structs only carry
//! the effect parameters.

use serde::{Deserialize, Serialize};

/// Hue rotation and saturation grading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HueSaturationConfig {
    /// Hue rotation in radians (valid range: 0.0-2.0).
    pub hue: f32,
    /// Saturation adjustment (valid range: 0.2-0.8).
    pub saturation: f32,
}

impl Default for HueSaturationConfig {
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 0.48,
        }
    }
}

/// Blur kernel size for the bloom pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BloomKernelSize {
    VerySmall,
    Small,
    #[default]
    Medium,
    Large,
    VeryLarge,
    Huge,
}

impl BloomKernelSize {
    /// All sizes, smallest first.
    pub const ALL: [BloomKernelSize; 6] = [
        BloomKernelSize::VerySmall,
        BloomKernelSize::Small,
        BloomKernelSize::Medium,
        BloomKernelSize::Large,
        BloomKernelSize::VeryLarge,
        BloomKernelSize::Huge,
    ];

    /// Position in [`Self::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).unwrap_or(2)
    }

    /// Size at `index`, clamped to the valid range.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }
}

/// Bloom (light bleed) effect settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomConfig {
    /// Bloom brightness multiplier (valid range: 0.0-5.0).
    pub intensity: f32,
    pub kernel_size: BloomKernelSize,
    /// Luminance below which pixels do not bloom (valid range: 0.0-1.0).
    pub luminance_threshold: f32,
    /// Softness of the threshold edge (valid range: 0.0-1.0).
    pub luminance_smoothing: f32,
    /// Blur at half resolution for a wider, cheaper glow.
    pub mipmap_blur: bool,
    /// Bloom target width in pixels, 0 = follow the window (valid range: 0-2048).
    pub resolution_x: u32,
    /// Bloom target height in pixels, 0 = follow the window (valid range: 0-2048).
    pub resolution_y: u32,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            intensity: 0.2,
            kernel_size: BloomKernelSize::Medium,
            luminance_threshold: 0.34,
            luminance_smoothing: 0.0,
            mipmap_blur: true,
            resolution_x: 0,
            resolution_y: 0,
        }
    }
}

/// Post-processing chain parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EffectsConfig {
    pub hue_saturation: HueSaturationConfig,
    pub bloom: BloomConfig,
}

// =============================================================================
// Tests
// =============================================================================
