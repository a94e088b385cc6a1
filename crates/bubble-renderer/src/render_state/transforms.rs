//! Per-frame matrices derived from the scene and the window aspect.

use crate::scene::BubbleScene;
use crate::sphere::matrix::{self, Mat4};

/// Every transform the passes need for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneTransforms {
    pub bubble_model: Mat4,
    pub bubble_mvp: Mat4,
    /// `None` when the mask feature is off.
    pub stencil_mvp: Option<Mat4>,
    /// The group transform (scale only); the image is not rotated.
    pub image_mvp: Mat4,
    pub eye: [f32; 3],
}

impl SceneTransforms {
    pub fn new(scene: &BubbleScene, aspect: f32) -> Self {
        let camera = scene.camera();
        let view_projection = camera.view_projection(aspect);
        let group_scale = camera.group_scale(aspect);

        let bubble_model = scene.bubble().model_matrix(group_scale);
        let stencil_mvp = scene
            .stencil()
            .map(|stencil| matrix::mul(&view_projection, &stencil.model_matrix(group_scale)));

        Self {
            bubble_model,
            bubble_mvp: matrix::mul(&view_projection, &bubble_model),
            stencil_mvp,
            image_mvp: matrix::mul(&view_projection, &matrix::scale(group_scale)),
            eye: [0.0, 0.0, camera.distance],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubble_config::schema::SceneVariant;
    use bubble_config::BubbleConfig;

    fn config(variant: SceneVariant) -> BubbleConfig {
        let mut config = BubbleConfig::default();
        config.scene.variant = variant;
        config.sphere.width_segments = 8;
        config.sphere.height_segments = 6;
        config
    }

    #[test]
    fn stencil_transform_only_with_mask() {
        let graded = BubbleScene::new(&config(SceneVariant::Graded));
        assert!(SceneTransforms::new(&graded, 1.6).stencil_mvp.is_none());

        let masked = BubbleScene::new(&config(SceneVariant::Masked));
        let t = SceneTransforms::new(&masked, 1.6);
        assert_eq!(t.stencil_mvp, Some(t.bubble_mvp));
    }

    #[test]
    fn stencil_tracks_bubble_rotation() {
        let config = config(SceneVariant::Masked);
        let mut scene = BubbleScene::new(&config);
        scene.update(2.0, &config);
        let t = SceneTransforms::new(&scene, 1.0);
        assert_eq!(t.stencil_mvp, Some(t.bubble_mvp));
        assert_ne!(t.bubble_mvp, t.image_mvp);
    }

    #[test]
    fn bubble_scales_with_window_width() {
        let scene = BubbleScene::new(&config(SceneVariant::Graded));
        let narrow = SceneTransforms::new(&scene, 1.0);
        let wide = SceneTransforms::new(&scene, 2.0);
        assert!((wide.bubble_model[0] - 2.0 * narrow.bubble_model[0]).abs() < 1e-5);
    }

    #[test]
    fn eye_sits_on_camera() {
        let scene = BubbleScene::new(&config(SceneVariant::Graded));
        assert_eq!(SceneTransforms::new(&scene, 1.0).eye, [0.0, 0.0, 5.0]);
    }
}
