//! Vertex noise displacement parameters.

use serde::{Deserialize, Serialize};

/// Noise displacement settings, read by the displacer every frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Displacement magnitude scale (valid range: 0.0-0.5).
    pub intensity: f32,
    /// Clock advance rate per second (valid range: 0.0-0.5).
    pub speed: f32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            intensity: 0.08,
            speed: 0.36,
        }
    }
}
