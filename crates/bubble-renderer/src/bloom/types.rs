//! Bloom pipeline types.

use bubble_config::schema::{BloomConfig, BloomKernelSize};

/// Per-pass uniforms for the bloom shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BloomUniforms {
    /// 1.0 / texture_width, 1.0 / texture_height.
    pub texel_size: [f32; 2],
    /// Luminance below which pixels do not glow.
    pub luminance_threshold: f32,
    /// Width of the soft edge above the threshold (0 = hard cut).
    pub luminance_smoothing: f32,
    /// Distance between blur taps, in texels.
    pub spread: f32,
    pub _padding: [f32; 3],
}

/// Bloom configuration resolved for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomSettings {
    /// Whether bloom passes run at all.
    pub enabled: bool,
    /// Bloom brightness multiplier, applied in the composite pass.
    pub intensity: f32,
    pub kernel_size: BloomKernelSize,
    pub luminance_threshold: f32,
    pub luminance_smoothing: f32,
    /// Blur at half resolution.
    pub mipmap_blur: bool,
    /// Explicit target width (0 = derive from the window).
    pub resolution_x: u32,
    /// Explicit target height (0 = derive from the window).
    pub resolution_y: u32,
}

impl Default for BloomSettings {
    fn default() -> Self {
        Self::from_config(&BloomConfig::default(), true)
    }
}

impl BloomSettings {
    /// Settings from the bloom config; `enabled` comes from the scene features.
    pub fn from_config(config: &BloomConfig, enabled: bool) -> Self {
        Self {
            enabled,
            intensity: config.intensity,
            kernel_size: config.kernel_size,
            luminance_threshold: config.luminance_threshold,
            luminance_smoothing: config.luminance_smoothing,
            mipmap_blur: config.mipmap_blur,
            resolution_x: config.resolution_x,
            resolution_y: config.resolution_y,
        }
    }

    /// Intensity the composite pass should use (zero when disabled).
    pub fn effective_intensity(&self) -> f32 {
        if self.enabled {
            self.intensity
        } else {
            0.0
        }
    }

    /// Bloom target size for a `width × height` window.
    ///
    /// Explicit resolutions win per axis; otherwise the window size, halved
    /// when `mipmap_blur` is on. Never zero.
    pub fn target_size(&self, width: u32, height: u32) -> (u32, u32) {
        let divisor = if self.mipmap_blur { 2 } else { 1 };
        let pick = |explicit: u32, window: u32| {
            let size = if explicit > 0 { explicit } else { window / divisor };
            size.max(1)
        };
        (pick(self.resolution_x, width), pick(self.resolution_y, height))
    }

    /// Uniforms for a bloom target of the given size.
    pub fn uniforms(&self, target_width: u32, target_height: u32) -> BloomUniforms {
        BloomUniforms {
            texel_size: [
                1.0 / target_width.max(1) as f32,
                1.0 / target_height.max(1) as f32,
            ],
            luminance_threshold: self.luminance_threshold,
            luminance_smoothing: self.luminance_smoothing,
            spread: kernel_spread(self.kernel_size),
            _padding: [0.0; 3],
        }
    }
}

/// Tap spacing for each kernel size. Larger kernels reach further with the
/// same nine taps.
pub fn kernel_spread(kernel_size: BloomKernelSize) -> f32 {
    match kernel_size {
        BloomKernelSize::VerySmall => 0.5,
        BloomKernelSize::Small => 1.0,
        BloomKernelSize::Medium => 1.5,
        BloomKernelSize::Large => 2.5,
        BloomKernelSize::VeryLarge => 4.0,
        BloomKernelSize::Huge => 7.0,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bloom_uniforms_size_is_32_bytes() {
        assert_eq!(std::mem::size_of::<BloomUniforms>(), 32);
    }

    #[test]
    fn bloom_settings_default() {
        let s = BloomSettings::default();
        assert!(s.enabled);
        assert!((s.intensity - 0.2).abs() < f32::EPSILON);
        assert_eq!(s.kernel_size, BloomKernelSize::Medium);
        assert!((s.luminance_threshold - 0.34).abs() < f32::EPSILON);
        assert!(s.mipmap_blur);
    }

    #[test]
    fn disabled_bloom_contributes_nothing() {
        let s = BloomSettings::from_config(&BloomConfig::default(), false);
        assert_eq!(s.effective_intensity(), 0.0);
    }

    #[test]
    fn mipmap_blur_halves_target() {
        let s = BloomSettings::default();
        assert_eq!(s.target_size(1280, 800), (640, 400));
    }

    #[test]
    fn full_resolution_without_mipmap_blur() {
        let config = BloomConfig {
            mipmap_blur: false,
            ..Default::default()
        };
        let s = BloomSettings::from_config(&config, true);
        assert_eq!(s.target_size(1280, 800), (1280, 800));
    }

    #[test]
    fn explicit_resolution_overrides_per_axis() {
        let config = BloomConfig {
            resolution_x: 300,
            ..Default::default()
        };
        let s = BloomSettings::from_config(&config, true);
        assert_eq!(s.target_size(1280, 800), (300, 400));
    }

    #[test]
    fn target_size_never_zero() {
        let s = BloomSettings::default();
        assert_eq!(s.target_size(1, 0), (1, 1));
    }

    #[test]
    fn kernel_spread_grows_with_size() {
        let spreads: Vec<f32> = BloomKernelSize::ALL.iter().map(|k| kernel_spread(*k)).collect();
        assert!(spreads.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn uniforms_use_target_texels() {
        let u = BloomSettings::default().uniforms(640, 400);
        assert!((u.texel_size[0] - 1.0 / 640.0).abs() < 1e-9);
        assert!((u.texel_size[1] - 1.0 / 400.0).abs() < 1e-9);
        assert!((u.spread - 1.5).abs() < f32::EPSILON);
    }
}
