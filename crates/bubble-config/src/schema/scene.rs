//! Scene composition settings: which optional effects are active and what
//! sits behind the bubble.

use serde::{Deserialize, Serialize};

/// Named feature presets for the scene.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SceneVariant {
    /// Image revealed only through the bubble's silhouette; no post effects.
    Masked,
    /// Bloom only.
    Bloom,
    /// Hue/saturation grading followed by bloom.
    #[default]
    Graded,
}

impl SceneVariant {
    pub const ALL: [SceneVariant; 3] = [
        SceneVariant::Masked,
        SceneVariant::Bloom,
        SceneVariant::Graded,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SceneVariant::Masked => "masked",
            SceneVariant::Bloom => "bloom",
            SceneVariant::Graded => "graded",
        }
    }
}

impl std::str::FromStr for SceneVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SceneVariant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown scene variant '{s}' (expected masked, bloom, graded)"))
    }
}

/// Scene settings.
///
/// The `mask`, `bloom` and `hue_saturation` fields override the variant's
/// preset when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub variant: SceneVariant,
    pub mask: Option<bool>,
    pub bloom: Option<bool>,
    pub hue_saturation: Option<bool>,
    /// Canvas clear color as hex string.
    pub background: String,
    /// Image drawn behind the bubble (PNG or JPEG). None = no image.
    pub image: Option<String>,
    /// Image quad half-height in world units (valid range: 0.1-10.0).
    pub image_scale: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            variant: SceneVariant::Graded,
            mask: None,
            bloom: None,
            hue_saturation: None,
            background: "#ffffff".into(),
            image: None,
            image_scale: 1.0,
        }
    }
}
