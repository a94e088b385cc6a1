//! The per-frame noise displacer.

use super::types::{DisplacementParams, DisplacementTarget, TickOutcome};

/// Spatial frequency of the per-axis sine waves.
pub const NOISE_FREQUENCY: f64 = 5.0;

/// Angular velocity around Y, radians per second.
pub const ROTATION_SPEED_Y: f64 = 0.2;

/// Angular velocity around Z, radians per second.
pub const ROTATION_SPEED_Z: f64 = 0.1;

/// Animates one or more meshes that share a single base shape.
///
/// Holds the base geometry snapshot and the noise clock. Create a new
/// displacer (or call [`NoiseDisplacer::reset`]) whenever the mesh topology
/// changes.
#[derive(Debug, Default)]
pub struct NoiseDisplacer {
    /// Snapshot of the primary target's positions, taken on first use.
    base: Option<Vec<[f32; 3]>>,
    /// Noise clock. Advances by `delta * speed`, never decreases. Kept in
    /// `f64` so per-frame steps stay exact over long sessions.
    time: f64,
    /// Displaced positions for the current frame, shared by all targets.
    scratch: Vec<[f32; 3]>,
}

impl NoiseDisplacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of the noise clock.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// The captured base geometry, if any.
    pub fn base(&self) -> Option<&[[f32; 3]]> {
        self.base.as_deref()
    }

    pub fn is_captured(&self) -> bool {
        self.base.is_some()
    }

    /// Forget the base geometry and restart the clock at zero.
    pub fn reset(&mut self) {
        self.base = None;
        self.time = 0.0;
        self.scratch.clear();
    }

    /// Advance one frame.
    ///
    /// The first target is the primary: its geometry is captured as the
    /// shared base and decides readiness. Every target that has geometry of
    /// matching length receives the same displaced positions and the same
    /// rotation increment.
    pub fn tick(
        &mut self,
        delta: f32,
        params: DisplacementParams,
        targets: &mut [&mut dyn DisplacementTarget],
    ) -> TickOutcome {
        let delta = f64::from(delta);
        self.time += delta * f64::from(params.speed);

        let Some(primary) = targets.first_mut() else {
            return TickOutcome::NotReady;
        };
        let Some(live) = primary.positions_mut() else {
            tracing::trace!("displacement target has no geometry yet");
            return TickOutcome::NotReady;
        };
        let base: &[[f32; 3]] = self.base.get_or_insert_with(|| {
            tracing::debug!(vertices = live.len(), "captured base geometry");
            live.to_vec()
        });

        self.scratch.clear();
        self.scratch.extend(
            base.iter()
                .map(|&vertex| displace_vertex(vertex, self.time, params.intensity)),
        );

        let mut displaced = 0;
        for target in targets.iter_mut() {
            let Some(live) = target.positions_mut() else {
                continue;
            };
            if live.len() != self.scratch.len() {
                tracing::warn!(
                    expected = self.scratch.len(),
                    actual = live.len(),
                    "displacement target topology changed, skipping"
                );
                continue;
            }
            live.copy_from_slice(&self.scratch);
            target.mark_positions_dirty();

            let rotation = target.rotation_mut();
            rotation.y += delta * ROTATION_SPEED_Y;
            rotation.z += delta * ROTATION_SPEED_Z;
            displaced += 1;
        }

        TickOutcome::Displaced(displaced)
    }
}

/// Radially displace one base vertex.
///
/// `noise = (sin(5x + t) + sin(5y + t) + sin(5z + t)) * intensity`, applied
/// along `base / |base|`. A vertex at the origin has no radial direction and
/// is returned unchanged. The phase is summed in `f64` so a large clock does
/// not swallow the per-vertex offset.
pub fn displace_vertex(base: [f32; 3], time: f64, intensity: f32) -> [f32; 3] {
    let [x, y, z] = base;
    let wave = |c: f32| (f64::from(c) * NOISE_FREQUENCY + time).sin();
    let noise = ((wave(x) + wave(y) + wave(z)) * f64::from(intensity)) as f32;

    let length = (x * x + y * y + z * z).sqrt();
    if length == 0.0 {
        return base;
    }

    [
        x + (x / length) * noise,
        y + (y / length) * noise,
        z + (z / length) * noise,
    ]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::displace::Rotation;

    /// Minimal target: optional geometry plus bookkeeping.
    #[derive(Default)]
    struct TestMesh {
        positions: Option<Vec<[f32; 3]>>,
        rotation: Rotation,
        dirty_marks: usize,
    }

    impl TestMesh {
        fn with(positions: Vec<[f32; 3]>) -> Self {
            Self {
                positions: Some(positions),
                ..Default::default()
            }
        }

        fn live(&self) -> &[[f32; 3]] {
            self.positions.as_deref().unwrap()
        }
    }

    impl DisplacementTarget for TestMesh {
        fn positions_mut(&mut self) -> Option<&mut [[f32; 3]]> {
            self.positions.as_deref_mut()
        }

        fn rotation_mut(&mut self) -> &mut Rotation {
            &mut self.rotation
        }

        fn mark_positions_dirty(&mut self) {
            self.dirty_marks += 1;
        }
    }

    fn ring(radius: f32, n: usize) -> Vec<[f32; 3]> {
        (0..n)
            .map(|i| {
                let a = i as f32 / n as f32 * std::f32::consts::TAU;
                [radius * a.cos(), radius * a.sin() * 0.6, radius * a.sin() * 0.8]
            })
            .collect()
    }

    const PARAMS: DisplacementParams = DisplacementParams {
        intensity: 0.08,
        speed: 0.36,
    };

    #[test]
    fn scenario_single_vertex_on_x_axis() {
        let mut mesh = TestMesh::with(vec![[0.4, 0.0, 0.0]]);
        let mut displacer = NoiseDisplacer::new();
        // delta = 0 keeps time at 0
        displacer.tick(0.0, PARAMS, &mut [&mut mesh]);

        let [x, y, z] = mesh.live()[0];
        let expected = 0.4 + 0.08 * 2.0_f32.sin();
        assert!((x - expected).abs() < 1e-6, "x = {x}");
        assert!((x - 0.4727).abs() < 1e-4);
        assert_eq!(y, 0.0);
        assert_eq!(z, 0.0);
    }

    #[test]
    fn clock_advances_by_delta_times_speed() {
        let mut mesh = TestMesh::with(ring(0.4, 8));
        let mut displacer = NoiseDisplacer::new();

        displacer.tick(0.016, PARAMS, &mut [&mut mesh]);
        assert!((displacer.time() - 0.00576).abs() < 1e-7);

        for _ in 1..100 {
            displacer.tick(0.016, PARAMS, &mut [&mut mesh]);
        }
        assert!((displacer.time() - 0.576).abs() < 1e-4);
    }

    #[test]
    fn clock_advances_even_when_not_ready() {
        let mut mesh = TestMesh::default();
        let mut displacer = NoiseDisplacer::new();
        let outcome = displacer.tick(1.0, PARAMS, &mut [&mut mesh]);
        assert_eq!(outcome, TickOutcome::NotReady);
        assert!((displacer.time() - 0.36).abs() < 1e-6);
    }

    #[test]
    fn not_ready_skips_displacement_and_rotation() {
        let mut mesh = TestMesh::default();
        let mut displacer = NoiseDisplacer::new();
        displacer.tick(0.5, PARAMS, &mut [&mut mesh]);

        assert!(!displacer.is_captured());
        assert_eq!(mesh.rotation, Rotation::default());
        assert_eq!(mesh.dirty_marks, 0);
    }

    #[test]
    fn base_is_captured_on_first_available_frame() {
        let original = ring(0.4, 16);
        let mut mesh = TestMesh::default();
        let mut displacer = NoiseDisplacer::new();

        displacer.tick(0.016, PARAMS, &mut [&mut mesh]);
        assert!(displacer.base().is_none());

        mesh.positions = Some(original.clone());
        let outcome = displacer.tick(0.016, PARAMS, &mut [&mut mesh]);
        assert_eq!(outcome, TickOutcome::Displaced(1));
        assert_eq!(displacer.base().unwrap(), original.as_slice());
    }

    #[test]
    fn base_is_never_overwritten() {
        let original = ring(0.4, 16);
        let mut mesh = TestMesh::with(original.clone());
        let mut displacer = NoiseDisplacer::new();

        for _ in 0..50 {
            displacer.tick(0.016, PARAMS, &mut [&mut mesh]);
        }
        assert_ne!(mesh.live(), original.as_slice());
        assert_eq!(displacer.base().unwrap(), original.as_slice());
    }

    #[test]
    fn topology_is_preserved() {
        let mut mesh = TestMesh::with(ring(0.4, 33));
        let mut displacer = NoiseDisplacer::new();
        for _ in 0..20 {
            displacer.tick(0.016, PARAMS, &mut [&mut mesh]);
            assert_eq!(mesh.live().len(), 33);
            assert_eq!(displacer.base().unwrap().len(), 33);
        }
    }

    #[test]
    fn zero_delta_is_idempotent() {
        let mut mesh = TestMesh::with(ring(0.4, 16));
        let mut displacer = NoiseDisplacer::new();
        displacer.tick(0.016, PARAMS, &mut [&mut mesh]);

        let time = displacer.time();
        let positions = mesh.live().to_vec();
        let rotation = mesh.rotation;

        displacer.tick(0.0, PARAMS, &mut [&mut mesh]);

        assert_eq!(displacer.time().to_bits(), time.to_bits());
        let bits = |v: &[[f32; 3]]| -> Vec<u32> {
            v.iter().flatten().map(|c| c.to_bits()).collect()
        };
        assert_eq!(bits(mesh.live()), bits(&positions));
        assert_eq!(mesh.rotation, rotation);
    }

    #[test]
    fn zero_intensity_is_a_fixed_point() {
        let original = ring(0.4, 16);
        let mut mesh = TestMesh::with(original.clone());
        let mut displacer = NoiseDisplacer::new();
        let params = DisplacementParams {
            intensity: 0.0,
            speed: 0.36,
        };

        for _ in 0..30 {
            displacer.tick(0.016, params, &mut [&mut mesh]);
            assert_eq!(mesh.live(), original.as_slice());
        }
        assert!(mesh.rotation.y > 0.0);
        assert!(mesh.rotation.z > 0.0);
    }

    #[test]
    fn synchronized_targets_stay_identical() {
        let original = ring(0.4, 24);
        let mut visible = TestMesh::with(original.clone());
        let mut stencil = TestMesh::with(original);
        let mut displacer = NoiseDisplacer::new();

        for _ in 0..10 {
            let outcome = displacer.tick(0.016, PARAMS, &mut [&mut visible, &mut stencil]);
            assert_eq!(outcome, TickOutcome::Displaced(2));
            assert_eq!(visible.live(), stencil.live());
            assert_eq!(visible.rotation, stencil.rotation);
        }
    }

    #[test]
    fn secondary_target_follows_primary_base() {
        // The stencil starts with different data; only the primary is captured.
        let mut visible = TestMesh::with(ring(0.4, 8));
        let mut stencil = TestMesh::with(ring(1.0, 8));
        let mut displacer = NoiseDisplacer::new();

        displacer.tick(0.016, PARAMS, &mut [&mut visible, &mut stencil]);
        assert_eq!(visible.live(), stencil.live());
    }

    #[test]
    fn unavailable_secondary_is_skipped() {
        let mut visible = TestMesh::with(ring(0.4, 8));
        let mut stencil = TestMesh::default();
        let mut displacer = NoiseDisplacer::new();

        let outcome = displacer.tick(0.016, PARAMS, &mut [&mut visible, &mut stencil]);
        assert_eq!(outcome, TickOutcome::Displaced(1));
        assert_eq!(stencil.rotation, Rotation::default());
        assert_eq!(visible.dirty_marks, 1);
    }

    #[test]
    fn mismatched_secondary_is_skipped() {
        let mut visible = TestMesh::with(ring(0.4, 8));
        let mut stencil = TestMesh::with(ring(0.4, 5));
        let mut displacer = NoiseDisplacer::new();

        let outcome = displacer.tick(0.016, PARAMS, &mut [&mut visible, &mut stencil]);
        assert_eq!(outcome, TickOutcome::Displaced(1));
        assert_eq!(stencil.live(), ring(0.4, 5).as_slice());
    }

    #[test]
    fn rotation_advances_linearly() {
        let mut mesh = TestMesh::with(ring(0.4, 4));
        let mut displacer = NoiseDisplacer::new();
        let delta = 0.02_f32;
        let frames = 250_u32;

        for _ in 0..frames {
            displacer.tick(delta, PARAMS, &mut [&mut mesh]);
        }
        let t = f64::from(frames);
        let delta = f64::from(delta);
        assert!((mesh.rotation.y - 0.2 * delta * t).abs() < 1e-9);
        assert!((mesh.rotation.z - 0.1 * delta * t).abs() < 1e-9);
        assert_eq!(mesh.rotation.x, 0.0);
    }

    #[test]
    fn hour_long_session_keeps_exact_steps() {
        let mut mesh = TestMesh::with(ring(0.4, 4));
        let mut displacer = NoiseDisplacer::new();
        let delta = 1.0_f32 / 60.0;
        let frames = 60 * 60 * 60_u32;

        for _ in 0..frames {
            displacer.tick(delta, PARAMS, &mut [&mut mesh]);
        }
        let time_before = displacer.time();
        let rotation_before = mesh.rotation;
        displacer.tick(delta, PARAMS, &mut [&mut mesh]);

        let delta = f64::from(delta);
        let speed = f64::from(PARAMS.speed);
        let elapsed = delta * f64::from(frames);
        assert!((time_before - elapsed * speed).abs() < 1e-6);
        assert!((rotation_before.y - elapsed * ROTATION_SPEED_Y).abs() < 1e-6);

        let time_step = displacer.time() - time_before;
        let y_step = mesh.rotation.y - rotation_before.y;
        let z_step = mesh.rotation.z - rotation_before.z;
        assert!((time_step - delta * speed).abs() < 1e-9, "time step {time_step}");
        assert!((y_step - delta * ROTATION_SPEED_Y).abs() < 1e-9, "y step {y_step}");
        assert!((z_step - delta * ROTATION_SPEED_Z).abs() < 1e-9, "z step {z_step}");
    }

    #[test]
    fn late_clock_still_varies_across_vertices() {
        // Twelve hours in: neighbouring vertices must still get distinct noise.
        let time = 12.0 * 3600.0 * 0.36;
        let a = displace_vertex([0.4, 0.0, 0.0], time, 0.08);
        let b = displace_vertex([0.401, 0.0, 0.0], time, 0.08);
        let offset = |v: [f32; 3], base: f32| v[0] - base;
        assert_ne!(offset(a, 0.4), offset(b, 0.401));
    }

    #[test]
    fn rotation_ignores_noise_speed() {
        let mut mesh = TestMesh::with(ring(0.4, 4));
        let mut displacer = NoiseDisplacer::new();
        let params = DisplacementParams {
            intensity: 0.08,
            speed: 0.0,
        };
        displacer.tick(1.0, params, &mut [&mut mesh]);
        assert_eq!(displacer.time(), 0.0);
        assert!((mesh.rotation.y - 0.2).abs() < 1e-6);
    }

    #[test]
    fn every_displaced_frame_marks_dirty() {
        let mut mesh = TestMesh::with(ring(0.4, 4));
        let mut displacer = NoiseDisplacer::new();
        for _ in 0..5 {
            displacer.tick(0.016, PARAMS, &mut [&mut mesh]);
        }
        assert_eq!(mesh.dirty_marks, 5);
    }

    #[test]
    fn vertex_at_origin_is_left_in_place() {
        let mut mesh = TestMesh::with(vec![[0.0, 0.0, 0.0], [0.4, 0.0, 0.0]]);
        let mut displacer = NoiseDisplacer::new();
        displacer.tick(0.3, PARAMS, &mut [&mut mesh]);

        assert_eq!(mesh.live()[0], [0.0, 0.0, 0.0]);
        assert!(mesh.live().iter().flatten().all(|c| c.is_finite()));
    }

    #[test]
    fn displacement_is_radial() {
        let base = [0.1, -0.2, 0.3];
        let moved = displace_vertex(base, 1.3, 0.4);
        // moved = base * (1 + noise/len), so every component scales equally
        let k = moved[0] / base[0];
        assert!((moved[1] / base[1] - k).abs() < 1e-5);
        assert!((moved[2] / base[2] - k).abs() < 1e-5);
    }

    #[test]
    fn reset_recaptures_and_restarts_clock() {
        let mut mesh = TestMesh::with(ring(0.4, 8));
        let mut displacer = NoiseDisplacer::new();
        displacer.tick(1.0, PARAMS, &mut [&mut mesh]);
        assert!(displacer.time() > 0.0);

        displacer.reset();
        assert_eq!(displacer.time(), 0.0);
        assert!(!displacer.is_captured());

        let bigger = ring(0.8, 12);
        mesh.positions = Some(bigger.clone());
        displacer.tick(0.0, PARAMS, &mut [&mut mesh]);
        assert_eq!(displacer.base().unwrap(), bigger.as_slice());
    }

    #[test]
    fn empty_target_list_is_not_ready() {
        let mut displacer = NoiseDisplacer::new();
        assert_eq!(displacer.tick(0.1, PARAMS, &mut []), TickOutcome::NotReady);
    }
}
