//! The textured image quad drawn behind the bubble.

use std::path::{Path, PathBuf};

use super::{stencil_state, MASK_REFERENCE};
use crate::gpu::RendererError;
use crate::sphere::matrix::Mat4;

/// Decoded RGBA8 pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ImageData {
    /// 1×1 fully transparent pixel.
    pub fn transparent() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![0, 0, 0, 0],
        }
    }

    /// Decode a PNG or JPEG file.
    pub fn load(path: &Path) -> Result<Self, RendererError> {
        let decoded = image::open(path)?.to_rgba8();
        let (width, height) = decoded.dimensions();
        Ok(Self {
            width,
            height,
            rgba: decoded.into_raw(),
        })
    }

    /// Decode `path`, or fall back to a transparent pixel with a warning.
    pub fn load_or_transparent(path: &Path) -> Self {
        match Self::load(path) {
            Ok(data) => {
                tracing::info!(
                    path = %path.display(),
                    width = data.width,
                    height = data.height,
                    "image loaded"
                );
                data
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "{e}, drawing nothing");
                Self::transparent()
            }
        }
    }

    /// Width over height.
    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}

/// Uniforms for the image shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ImageUniforms {
    pub mvp: Mat4,
    /// Quad half extents in group units.
    pub half_size: [f32; 2],
    pub _padding: [f32; 2],
}

/// Half extents of a quad `scale` units tall (half-height) keeping the
/// image's aspect ratio.
pub fn image_half_size(aspect: f32, scale: f32) -> [f32; 2] {
    [scale * aspect, scale]
}

/// Texture, bindings, and two pipelines (stencil-tested and not) for the
/// backdrop image.
pub struct ImageLayer {
    masked: wgpu::RenderPipeline,
    unmasked: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    sampler: wgpu::Sampler,
    aspect: f32,
    source: Option<PathBuf>,
}

impl ImageLayer {
    /// `color_format` must match the backdrop pass's color attachment.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        color_format: wgpu::TextureFormat,
        source: Option<&Path>,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("image shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/image.wgsl").into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("image uniforms"),
            size: std::mem::size_of::<ImageUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("image sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("image bind group layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: std::num::NonZeroU64::new(
                            std::mem::size_of::<ImageUniforms>() as u64,
                        ),
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("image pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let create_pipeline = |label: &str, compare: wgpu::CompareFunction| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: color_format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: Some(stencil_state(compare, wgpu::StencilOperation::Keep)),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
        };

        let masked = create_pipeline("image masked pipeline", wgpu::CompareFunction::Equal);
        let unmasked = create_pipeline("image pipeline", wgpu::CompareFunction::Always);

        let data = match source {
            Some(path) => ImageData::load_or_transparent(path),
            None => ImageData::transparent(),
        };
        let bind_group = Self::upload(
            device,
            queue,
            &bind_group_layout,
            &uniform_buffer,
            &sampler,
            &data,
        );

        Self {
            masked,
            unmasked,
            uniform_buffer,
            bind_group_layout,
            bind_group,
            sampler,
            aspect: data.aspect(),
            source: source.map(Path::to_path_buf),
        }
    }

    /// The configured image path, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Swap the image. No-op when the path is unchanged.
    pub fn set_source(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, source: Option<&Path>) {
        if self.source.as_deref() == source {
            return;
        }
        let data = match source {
            Some(path) => ImageData::load_or_transparent(path),
            None => ImageData::transparent(),
        };
        self.bind_group = Self::upload(
            device,
            queue,
            &self.bind_group_layout,
            &self.uniform_buffer,
            &self.sampler,
            &data,
        );
        self.aspect = data.aspect();
        self.source = source.map(Path::to_path_buf);
    }

    /// Place the quad in the bubble group's frame.
    pub fn update_uniforms(&self, queue: &wgpu::Queue, mvp: Mat4, scale: f32) {
        let uniforms = ImageUniforms {
            mvp,
            half_size: image_half_size(self.aspect, scale),
            _padding: [0.0; 2],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Record the quad into an open backdrop pass. With `masked`, only
    /// pixels inside the stencil silhouette are drawn.
    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>, masked: bool) {
        if self.source.is_none() {
            return;
        }
        if masked {
            pass.set_pipeline(&self.masked);
            pass.set_stencil_reference(MASK_REFERENCE);
        } else {
            pass.set_pipeline(&self.unmasked);
        }
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.draw(0..6, 0..1);
    }

    fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        uniform_buffer: &wgpu::Buffer,
        sampler: &wgpu::Sampler,
        data: &ImageData,
    ) -> wgpu::BindGroup {
        let size = wgpu::Extent3d {
            width: data.width,
            height: data.height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("image texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &data.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * data.width),
                rows_per_image: Some(data.height),
            },
            size,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("image bind group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_uniforms_size_is_80_bytes() {
        assert_eq!(std::mem::size_of::<ImageUniforms>(), 80);
    }

    #[test]
    fn transparent_is_one_clear_pixel() {
        let data = ImageData::transparent();
        assert_eq!((data.width, data.height), (1, 1));
        assert_eq!(data.rgba, vec![0, 0, 0, 0]);
        assert_eq!(data.aspect(), 1.0);
    }

    #[test]
    fn load_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portrait.png");
        let mut img = image::RgbaImage::new(4, 2);
        img.put_pixel(3, 1, image::Rgba([10, 20, 30, 255]));
        img.save(&path).unwrap();

        let data = ImageData::load(&path).unwrap();
        assert_eq!((data.width, data.height), (4, 2));
        assert_eq!(data.rgba.len(), 4 * 2 * 4);
        // pixel (3, 1) starts at byte (1 * 4 + 3) * 4
        assert_eq!(&data.rgba[28..32], &[10, 20, 30, 255]);
        assert!((data.aspect() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn load_jpeg_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portrait.jpg");
        image::RgbImage::from_pixel(6, 3, image::Rgb([200, 100, 50]))
            .save(&path)
            .unwrap();

        let data = ImageData::load(&path).unwrap();
        assert_eq!((data.width, data.height), (6, 3));
        assert_eq!(data.rgba[3], 255);
    }

    #[test]
    fn missing_image_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ImageData::load(&dir.path().join("nope.png"));
        assert!(matches!(result, Err(RendererError::ImageError(_))));
    }

    #[test]
    fn corrupt_image_falls_back_to_transparent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(ImageData::load(&path).is_err());
        assert_eq!(ImageData::load_or_transparent(&path), ImageData::transparent());
    }

    #[test]
    fn half_size_keeps_aspect() {
        assert_eq!(image_half_size(2.0, 1.5), [3.0, 1.5]);
        assert_eq!(image_half_size(1.0, 1.0), [1.0, 1.0]);
    }
}
