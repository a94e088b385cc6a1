//! Window-sized offscreen textures.

use crate::mask::create_stencil_texture;

/// Color format of every offscreen target.
pub const SCENE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// Backdrop (with its stencil attachment) and scene color targets.
pub struct OffscreenTargets {
    pub backdrop: wgpu::Texture,
    pub backdrop_view: wgpu::TextureView,
    pub stencil_view: wgpu::TextureView,
    pub scene: wgpu::Texture,
    pub scene_view: wgpu::TextureView,
    pub width: u32,
    pub height: u32,
}

impl OffscreenTargets {
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);

        let backdrop = create_color_texture(
            device,
            width,
            height,
            "backdrop",
            wgpu::TextureUsages::COPY_SRC,
        );
        let scene = create_color_texture(
            device,
            width,
            height,
            "scene",
            wgpu::TextureUsages::COPY_DST,
        );
        let (_, stencil_view) = create_stencil_texture(device, width, height);

        Self {
            backdrop_view: backdrop.create_view(&wgpu::TextureViewDescriptor::default()),
            scene_view: scene.create_view(&wgpu::TextureViewDescriptor::default()),
            backdrop,
            stencil_view,
            scene,
            width,
            height,
        }
    }

    /// Record a full copy of the backdrop into the scene target.
    pub fn copy_backdrop_to_scene(&self, encoder: &mut wgpu::CommandEncoder) {
        encoder.copy_texture_to_texture(
            self.backdrop.as_image_copy(),
            self.scene.as_image_copy(),
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );
    }
}

fn create_color_texture(
    device: &wgpu::Device,
    width: u32,
    height: u32,
    label: &str,
    extra_usage: wgpu::TextureUsages,
) -> wgpu::Texture {
    device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: SCENE_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT
            | wgpu::TextureUsages::TEXTURE_BINDING
            | extra_usage,
        view_formats: &[],
    })
}
