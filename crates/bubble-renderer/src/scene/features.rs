//! Optional render features and the variant presets that select them.

use bubble_config::schema::{SceneConfig, SceneVariant};

/// Which optional passes are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneFeatures {
    /// Draw an invisible copy of the bubble into the stencil buffer and
    /// reveal the backdrop image only inside it.
    pub mask: bool,
    pub bloom: bool,
    pub hue_saturation: bool,
}

impl SceneFeatures {
    /// The preset for a named variant.
    pub fn preset(variant: SceneVariant) -> Self {
        match variant {
            SceneVariant::Masked => Self {
                mask: true,
                bloom: false,
                hue_saturation: false,
            },
            SceneVariant::Bloom => Self {
                mask: false,
                bloom: true,
                hue_saturation: false,
            },
            SceneVariant::Graded => Self {
                mask: false,
                bloom: true,
                hue_saturation: true,
            },
        }
    }

    /// Variant preset with the per-feature overrides applied.
    pub fn from_config(scene: &SceneConfig) -> Self {
        let preset = Self::preset(scene.variant);
        Self {
            mask: scene.mask.unwrap_or(preset.mask),
            bloom: scene.bloom.unwrap_or(preset.bloom),
            hue_saturation: scene.hue_saturation.unwrap_or(preset.hue_saturation),
        }
    }

    /// Short label for the window title, e.g. `mask+bloom`.
    pub fn label(&self) -> String {
        let parts: Vec<&str> = [
            (self.mask, "mask"),
            (self.bloom, "bloom"),
            (self.hue_saturation, "hue/sat"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();

        if parts.is_empty() {
            "plain".to_string()
        } else {
            parts.join("+")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_variants() {
        assert_eq!(
            SceneFeatures::preset(SceneVariant::Masked),
            SceneFeatures {
                mask: true,
                bloom: false,
                hue_saturation: false
            }
        );
        assert!(SceneFeatures::preset(SceneVariant::Bloom).bloom);
        assert!(!SceneFeatures::preset(SceneVariant::Bloom).hue_saturation);
        let graded = SceneFeatures::preset(SceneVariant::Graded);
        assert!(graded.bloom && graded.hue_saturation && !graded.mask);
    }

    #[test]
    fn default_config_is_graded() {
        let features = SceneFeatures::from_config(&SceneConfig::default());
        assert_eq!(features, SceneFeatures::preset(SceneVariant::Graded));
    }

    #[test]
    fn overrides_apply_on_top_of_preset() {
        let scene = SceneConfig {
            variant: SceneVariant::Masked,
            bloom: Some(true),
            mask: Some(false),
            ..Default::default()
        };
        let features = SceneFeatures::from_config(&scene);
        assert!(!features.mask);
        assert!(features.bloom);
        assert!(!features.hue_saturation);
    }

    #[test]
    fn label_lists_active_features() {
        assert_eq!(SceneFeatures::preset(SceneVariant::Graded).label(), "bloom+hue/sat");
        assert_eq!(SceneFeatures::default().label(), "plain");
    }
}
