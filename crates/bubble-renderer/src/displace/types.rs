//! Displacement target abstraction and per-frame parameters.

use std::f64::consts::TAU;

use bubble_config::schema::NoiseConfig;

/// Euler rotation in radians, applied X then Y then Z.
///
/// Angles accumulate every frame for as long as the scene runs, so they are
/// kept in `f64`; [`Rotation::wrapped`] narrows them for the GPU.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Rotation {
    /// Angles reduced to `[0, 2π)` and narrowed to `f32`.
    pub fn wrapped(&self) -> [f32; 3] {
        let wrap = |angle: f64| angle.rem_euclid(TAU) as f32;
        [wrap(self.x), wrap(self.y), wrap(self.z)]
    }
}

/// Live-tunable displacement inputs, read once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplacementParams {
    /// Displacement magnitude scale (>= 0).
    pub intensity: f32,
    /// Clock advance per second (>= 0).
    pub speed: f32,
}

impl Default for DisplacementParams {
    fn default() -> Self {
        Self::from(&NoiseConfig::default())
    }
}

impl From<&NoiseConfig> for DisplacementParams {
    fn from(noise: &NoiseConfig) -> Self {
        Self {
            intensity: noise.intensity,
            speed: noise.speed,
        }
    }
}

/// A mesh the displacer can animate.
///
/// The displacer writes positions but never owns them; implementors decide
/// when their geometry exists and what "dirty" means for their GPU copy.
pub trait DisplacementTarget {
    /// The live vertex positions, or `None` while geometry is not available.
    fn positions_mut(&mut self) -> Option<&mut [[f32; 3]]>;

    /// The mesh transform's rotation.
    fn rotation_mut(&mut self) -> &mut Rotation;

    /// Signal that the position buffer must be re-uploaded.
    fn mark_positions_dirty(&mut self);
}

/// What a tick did. Callers are free to ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The primary target had no geometry yet; nothing was touched.
    NotReady,
    /// This many targets were displaced and rotated.
    Displaced(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_reduces_large_angles() {
        let rotation = Rotation {
            x: 0.0,
            y: 8640.0,
            z: -1.0,
        };
        let [x, y, z] = rotation.wrapped();
        assert_eq!(x, 0.0);
        assert!((f64::from(y) - 8640.0_f64.rem_euclid(TAU)).abs() < 1e-6);
        assert!((f64::from(z) - (TAU - 1.0)).abs() < 1e-6);
    }

    #[test]
    fn wrapped_keeps_small_angles() {
        let rotation = Rotation {
            x: 0.5,
            y: 1.25,
            z: 3.0,
        };
        assert_eq!(rotation.wrapped(), [0.5, 1.25, 3.0]);
    }
}
