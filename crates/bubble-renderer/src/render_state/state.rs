use std::path::{Path, PathBuf};
use std::sync::Arc;
use winit::window::Window;

use bubble_config::BubbleConfig;

use super::helpers::clear_color;
use super::targets::{OffscreenTargets, SCENE_FORMAT};
use crate::bloom::{BloomPipeline, BloomSettings};
use crate::gpu::{FrameBindings, GpuContext, RendererError};
use crate::mask::{ImageLayer, StencilMaskPipeline};
use crate::mesh::MeshBuffers;
use crate::post::CompositePipeline;
use crate::scene::{BubbleScene, SceneChange};
use crate::sphere::GlassPipeline;

// ---------------------------------------------------------------------------
// RenderState
// ---------------------------------------------------------------------------

/// GPU context plus every pipeline and target the bubble scene needs.
pub struct RenderState {
    pub gpu: GpuContext,
    pub(super) frame: FrameBindings,
    pub(super) targets: OffscreenTargets,
    pub(super) glass: GlassPipeline,
    pub(super) mask: StencilMaskPipeline,
    pub(super) image: ImageLayer,
    pub(super) bloom: BloomPipeline,
    pub(super) composite: CompositePipeline,
    pub(super) bubble_buffers: MeshBuffers,
    pub(super) stencil_buffers: Option<MeshBuffers>,
    pub(super) clear_color: wgpu::Color,
    /// Directory relative image paths resolve against.
    image_root: PathBuf,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    ///
    /// `image_root` is the directory relative `scene.image` paths resolve
    /// against (normally the config file's directory).
    pub async fn new(
        window: Arc<Window>,
        scene: &mut BubbleScene,
        config: &BubbleConfig,
        image_root: &Path,
    ) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window).await?;
        let device = &gpu.device;
        let (width, height) = (gpu.size.width, gpu.size.height);

        let frame = FrameBindings::new(device);
        let targets = OffscreenTargets::new(device, width, height);

        let glass = GlassPipeline::new(device, &frame.layout, &targets.backdrop_view, SCENE_FORMAT);
        let mask = StencilMaskPipeline::new(device, SCENE_FORMAT);

        let image_path = resolve_image(image_root, config.scene.image.as_deref());
        let image = ImageLayer::new(device, &gpu.queue, SCENE_FORMAT, image_path.as_deref());

        let bloom_settings =
            BloomSettings::from_config(&config.effects.bloom, scene.features().bloom);
        let bloom = BloomPipeline::new(device, &targets.scene_view, width, height, bloom_settings);

        let composite = CompositePipeline::new(
            device,
            &targets.scene_view,
            bloom.output_view(),
            gpu.format(),
        );

        let bubble_buffers = MeshBuffers::new(device, scene.bubble_mut(), "bubble");
        let stencil_buffers = scene
            .stencil_mut()
            .map(|stencil| MeshBuffers::new(device, stencil, "stencil"));

        tracing::info!(
            width,
            height,
            features = %scene.features().label(),
            "render state ready"
        );

        Ok(Self {
            clear_color: clear_color(&config.scene.background),
            frame,
            targets,
            glass,
            mask,
            image,
            bloom,
            composite,
            bubble_buffers,
            stencil_buffers,
            image_root: image_root.to_path_buf(),
            gpu,
        })
    }

    /// Handle a window resize by reconfiguring the surface and targets.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        let (width, height) = (self.gpu.size.width, self.gpu.size.height);
        let device = &self.gpu.device;

        self.targets = OffscreenTargets::new(device, width, height);
        self.glass.set_backdrop(device, &self.targets.backdrop_view);
        self.bloom
            .resize(device, &self.targets.scene_view, width, height);
        self.composite
            .rebind(device, &self.targets.scene_view, self.bloom.output_view());
    }

    /// Bring GPU state in line with a reloaded config.
    ///
    /// `change` is what [`BubbleScene::apply_config`] reported for the same
    /// config.
    pub fn apply_config(
        &mut self,
        config: &BubbleConfig,
        scene: &mut BubbleScene,
        change: SceneChange,
    ) {
        let device = &self.gpu.device;
        self.clear_color = clear_color(&config.scene.background);

        if change.geometry_rebuilt {
            self.bubble_buffers = MeshBuffers::new(device, scene.bubble_mut(), "bubble");
        }
        if change.geometry_rebuilt || change.features_changed {
            self.stencil_buffers = scene
                .stencil_mut()
                .map(|stencil| MeshBuffers::new(device, stencil, "stencil"));
        }

        let (width, height) = (self.gpu.size.width, self.gpu.size.height);
        let settings = BloomSettings::from_config(&config.effects.bloom, scene.features().bloom);
        if self.bloom.set_settings(settings, width, height) {
            self.bloom
                .resize(device, &self.targets.scene_view, width, height);
            self.composite
                .rebind(device, &self.targets.scene_view, self.bloom.output_view());
        }

        let image_path = resolve_image(&self.image_root, config.scene.image.as_deref());
        self.image
            .set_source(device, &self.gpu.queue, image_path.as_deref());
    }
}

/// Resolve a configured image path against `root` when it is relative.
pub(super) fn resolve_image(root: &Path, image: Option<&str>) -> Option<PathBuf> {
    let image = image?.trim();
    if image.is_empty() {
        return None;
    }
    let path = Path::new(image);
    Some(if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    })
}
