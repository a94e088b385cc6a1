//! Configuration schema types for the bubble scene.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the scene was tuned with.

mod effects;
mod material;
mod noise;
mod scene;
mod sphere;
mod system;

pub use effects::*;
pub use material::*;
pub use noise::*;
pub use scene::*;
pub use sphere::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for the bubble scene.
///
/// Only override what you want to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BubbleConfig {
    pub noise: NoiseConfig,
    pub sphere: SphereConfig,
    pub material: MaterialConfig,
    pub effects: EffectsConfig,
    pub scene: SceneConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
