//! The animated bubble and its optional stencil twin.

use bubble_config::schema::SphereConfig;
use bubble_config::BubbleConfig;

use super::camera::Camera;
use super::features::SceneFeatures;
use crate::displace::{DisplacementParams, DisplacementTarget, NoiseDisplacer, TickOutcome};
use crate::mesh::MeshInstance;
use crate::sphere::generate_sphere_mesh;

/// What a config reload changed in the scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneChange {
    /// Sphere geometry was regenerated and the displacer restarted.
    pub geometry_rebuilt: bool,
    /// The active feature set differs from before.
    pub features_changed: bool,
}

/// Owns the displacer and every mesh it keeps in lockstep.
///
/// The visible bubble is always the primary displacement target. When the
/// mask feature is on, an invisible stencil copy receives the exact same
/// positions and rotation each frame.
pub struct BubbleScene {
    displacer: NoiseDisplacer,
    bubble: MeshInstance,
    stencil: Option<MeshInstance>,
    sphere: SphereConfig,
    features: SceneFeatures,
    camera: Camera,
}

impl BubbleScene {
    pub fn new(config: &BubbleConfig) -> Self {
        let features = SceneFeatures::from_config(&config.scene);
        let bubble = build_mesh(&config.sphere);
        let stencil = features.mask.then(|| bubble.clone());

        tracing::debug!(
            vertices = bubble.positions().map_or(0, |p| p.len()),
            features = %features.label(),
            "bubble scene created"
        );

        Self {
            displacer: NoiseDisplacer::new(),
            bubble,
            stencil,
            sphere: config.sphere.clone(),
            features,
            camera: Camera::default(),
        }
    }

    /// Advance the animation by `delta` seconds using the config's noise
    /// parameters.
    pub fn update(&mut self, delta: f32, config: &BubbleConfig) -> TickOutcome {
        let params = DisplacementParams::from(&config.noise);
        match self.stencil.as_mut() {
            Some(stencil) => self
                .displacer
                .tick(delta, params, &mut [&mut self.bubble, stencil]),
            None => self.displacer.tick(delta, params, &mut [&mut self.bubble]),
        }
    }

    /// React to a reloaded config.
    pub fn apply_config(&mut self, config: &BubbleConfig) -> SceneChange {
        let mut change = SceneChange::default();

        if config.sphere != self.sphere {
            tracing::info!(
                radius = config.sphere.radius,
                width = config.sphere.width_segments,
                height = config.sphere.height_segments,
                "sphere changed, rebuilding bubble mesh"
            );
            let rotation = self.bubble.rotation;
            self.bubble = build_mesh(&config.sphere);
            self.bubble.rotation = rotation;
            if self.stencil.is_some() {
                self.stencil = Some(self.bubble.clone());
            }
            self.displacer.reset();
            self.sphere = config.sphere.clone();
            change.geometry_rebuilt = true;
        }

        let features = SceneFeatures::from_config(&config.scene);
        if features != self.features {
            tracing::info!(features = %features.label(), "scene features changed");
            if features.mask && self.stencil.is_none() {
                let mut stencil = self.bubble.clone();
                stencil.mark_positions_dirty();
                self.stencil = Some(stencil);
            } else if !features.mask {
                self.stencil = None;
            }
            self.features = features;
            change.features_changed = true;
        }

        change
    }

    pub fn features(&self) -> SceneFeatures {
        self.features
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn displacer(&self) -> &NoiseDisplacer {
        &self.displacer
    }

    pub fn bubble(&self) -> &MeshInstance {
        &self.bubble
    }

    pub fn bubble_mut(&mut self) -> &mut MeshInstance {
        &mut self.bubble
    }

    pub fn stencil(&self) -> Option<&MeshInstance> {
        self.stencil.as_ref()
    }

    pub fn stencil_mut(&mut self) -> Option<&mut MeshInstance> {
        self.stencil.as_mut()
    }
}

fn build_mesh(sphere: &SphereConfig) -> MeshInstance {
    let mesh = generate_sphere_mesh(sphere.radius, sphere.width_segments, sphere.height_segments);
    MeshInstance::from_sphere(&mesh)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bubble_config::schema::SceneVariant;

    fn small_config() -> BubbleConfig {
        let mut config = BubbleConfig::default();
        config.sphere.width_segments = 8;
        config.sphere.height_segments = 6;
        config
    }

    fn masked_config() -> BubbleConfig {
        let mut config = small_config();
        config.scene.variant = SceneVariant::Masked;
        config
    }

    #[test]
    fn default_scene_has_no_stencil() {
        let scene = BubbleScene::new(&small_config());
        assert!(scene.stencil().is_none());
        assert!(scene.features().bloom);
    }

    #[test]
    fn masked_scene_keeps_meshes_in_lockstep() {
        let config = masked_config();
        let mut scene = BubbleScene::new(&config);
        for _ in 0..20 {
            assert_eq!(scene.update(0.016, &config), TickOutcome::Displaced(2));
        }
        let stencil = scene.stencil().unwrap();
        assert_eq!(scene.bubble().positions(), stencil.positions());
        assert_eq!(scene.bubble().rotation, stencil.rotation);
    }

    #[test]
    fn update_uses_live_noise_parameters() {
        let mut config = small_config();
        let mut scene = BubbleScene::new(&config);
        let base = scene.bubble().positions().unwrap().to_vec();

        config.noise.intensity = 0.0;
        scene.update(0.5, &config);
        assert_eq!(scene.bubble().positions().unwrap(), base.as_slice());

        config.noise.intensity = 0.3;
        scene.update(0.0, &config);
        assert_ne!(scene.bubble().positions().unwrap(), base.as_slice());
    }

    #[test]
    fn sphere_change_rebuilds_and_resets_clock() {
        let mut config = small_config();
        let mut scene = BubbleScene::new(&config);
        scene.update(1.0, &config);
        assert!(scene.displacer().time() > 0.0);

        config.sphere.width_segments = 12;
        let change = scene.apply_config(&config);
        assert!(change.geometry_rebuilt);
        assert_eq!(scene.displacer().time(), 0.0);
        assert!(!scene.displacer().is_captured());
        assert_eq!(scene.bubble().positions().unwrap().len(), 13 * 7);

        scene.update(0.016, &config);
        assert_eq!(scene.displacer().base().unwrap().len(), 13 * 7);
    }

    #[test]
    fn unchanged_config_is_a_no_op() {
        let config = small_config();
        let mut scene = BubbleScene::new(&config);
        scene.update(0.5, &config);
        let time = scene.displacer().time();

        assert_eq!(scene.apply_config(&config), SceneChange::default());
        assert_eq!(scene.displacer().time(), time);
    }

    #[test]
    fn toggling_mask_adds_synchronized_stencil() {
        let mut config = small_config();
        let mut scene = BubbleScene::new(&config);
        scene.update(0.3, &config);

        config.scene.mask = Some(true);
        let change = scene.apply_config(&config);
        assert!(change.features_changed);
        assert!(!change.geometry_rebuilt);

        let stencil = scene.stencil().unwrap();
        assert_eq!(stencil.positions(), scene.bubble().positions());
        assert!(stencil.needs_upload());

        scene.update(0.016, &config);
        assert_eq!(
            scene.stencil().unwrap().positions(),
            scene.bubble().positions()
        );

        config.scene.mask = Some(false);
        scene.apply_config(&config);
        assert!(scene.stencil().is_none());
    }
}
