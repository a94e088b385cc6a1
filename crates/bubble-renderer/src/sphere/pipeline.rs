//! wgpu render pipeline for the bubble's transmission glass.
//!
//! Draws the displaced sphere into the scene texture, sampling the backdrop
//! texture behind it for refraction.

use bubble_common::types::Color;
use bubble_config::colors::parse_color_or;
use bubble_config::schema::MaterialConfig;

use super::matrix::Mat4;
use super::types::{PositionVertex, SurfaceVertex};
use crate::mesh::MeshBuffers;

/// Per-draw uniforms for the glass: transforms plus material parameters.
///
/// Uploaded to bind group 1 each frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlassUniforms {
    /// Model-View-Projection matrix (column-major).
    pub mvp: [f32; 16],
    /// Model matrix for world-space normal transform.
    pub model: [f32; 16],
    /// Camera position in world space (w unused).
    pub eye: [f32; 4],
    /// Linear tint color (RGBA).
    pub tint: [f32; 4],
    /// thickness, roughness, ior, chromatic_aberration.
    pub optics: [f32; 4],
    /// distortion, temporal_distortion, distortion_scale, anisotropic_blur.
    pub distortion: [f32; 4],
}

impl GlassUniforms {
    pub fn new(mvp: Mat4, model: Mat4, eye: [f32; 3], material: &MaterialConfig) -> Self {
        let tint = parse_color_or(&material.color, Color::from_rgba(255, 255, 255, 255));
        Self {
            mvp,
            model,
            eye: [eye[0], eye[1], eye[2], 1.0],
            tint: tint.to_linear_rgba(),
            optics: [
                material.thickness,
                material.roughness,
                material.ior,
                material.chromatic_aberration,
            ],
            distortion: [
                material.distortion,
                material.temporal_distortion,
                material.distortion_scale,
                material.anisotropic_blur,
            ],
        }
    }
}

/// Pipeline, uniforms, and backdrop binding for the glass pass.
pub struct GlassPipeline {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    sampler: wgpu::Sampler,
}

impl GlassPipeline {
    /// Create the glass pipeline.
    ///
    /// - `frame_layout`: layout for bind group 0 (shared `FrameUniforms`)
    /// - `backdrop_view`: the texture refracted through the bubble
    /// - `format`: scene texture format
    pub fn new(
        device: &wgpu::Device,
        frame_layout: &wgpu::BindGroupLayout,
        backdrop_view: &wgpu::TextureView,
        format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("glass shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/glass.wgsl").into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("glass uniforms"),
            size: std::mem::size_of::<GlassUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("glass sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("glass bind group layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: std::num::NonZeroU64::new(
                            std::mem::size_of::<GlassUniforms>() as u64,
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

        let bind_group = Self::create_bind_group(
            device,
            &bind_group_layout,
            &uniform_buffer,
            backdrop_view,
            &sampler,
        );

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("glass pipeline layout"),
            bind_group_layouts: &[frame_layout, &bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("glass pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[PositionVertex::LAYOUT, SurfaceVertex::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            uniform_buffer,
            bind_group_layout,
            bind_group,
            sampler,
        }
    }

    /// Rebind the backdrop after it was recreated (resize).
    pub fn set_backdrop(&mut self, device: &wgpu::Device, backdrop_view: &wgpu::TextureView) {
        self.bind_group = Self::create_bind_group(
            device,
            &self.bind_group_layout,
            &self.uniform_buffer,
            backdrop_view,
            &self.sampler,
        );
    }

    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &GlassUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Record the glass draw into an open pass over the scene texture.
    pub fn render(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        frame_bind_group: &wgpu::BindGroup,
        mesh: &MeshBuffers,
    ) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, frame_bind_group, &[]);
        pass.set_bind_group(1, &self.bind_group, &[]);
        mesh.draw(pass);
    }

    fn create_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        uniform_buffer: &wgpu::Buffer,
        backdrop_view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("glass bind group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(backdrop_view),
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
