//! Bubble geometry settings.

use serde::{Deserialize, Serialize};

/// UV sphere dimensions for the bubble mesh.
///
/// Changing any of these on reload rebuilds the mesh and restarts the
/// noise clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    /// Sphere radius in world units (valid range: 0.01-10.0).
    pub radius: f32,
    /// Longitude segments (valid range: 3-512).
    pub width_segments: u32,
    /// Latitude segments (valid range: 2-512).
    pub height_segments: u32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 0.4,
            width_segments: 64,
            height_segments: 64,
        }
    }
}
