//! Separable blur that turns the scene's bright pixels into glow.
//!
//! Stage `h` runs the bright-pass and blurs horizontally (scene → h);
//! stage `v` blurs vertically (h → v). The composite pass adds `v` over
//! the scene.

use super::types::{BloomSettings, BloomUniforms};

const BLOOM_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// One blur direction: its pipeline, its input binding, and its output.
struct BlurStage {
    label: &'static str,
    pipeline: wgpu::RenderPipeline,
    input: wgpu::BindGroup,
    output: wgpu::TextureView,
}

impl BlurStage {
    fn record(&self, encoder: &mut wgpu::CommandEncoder) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(self.label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &self.output,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.input, &[]);
        pass.draw(0..3, 0..1);
    }
}

/// Shared resources every stage binds.
struct BlurInputs {
    layout: wgpu::BindGroupLayout,
    uniforms: wgpu::Buffer,
    sampler: wgpu::Sampler,
}

impl BlurInputs {
    fn new(device: &wgpu::Device) -> Self {
        let uniform_entry = wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: std::num::NonZeroU64::new(
                    std::mem::size_of::<BloomUniforms>() as u64,
                ),
            },
            count: None,
        };
        let texture_entry = wgpu::BindGroupLayoutEntry {
            binding: 1,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        };
        let sampler_entry = wgpu::BindGroupLayoutEntry {
            binding: 2,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        };

        Self {
            layout: device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("bloom bind group layout"),
                entries: &[uniform_entry, texture_entry, sampler_entry],
            }),
            uniforms: device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("bloom uniforms"),
                size: std::mem::size_of::<BloomUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }),
            sampler: device.create_sampler(&wgpu::SamplerDescriptor {
                label: Some("bloom sampler"),
                address_mode_u: wgpu::AddressMode::ClampToEdge,
                address_mode_v: wgpu::AddressMode::ClampToEdge,
                mag_filter: wgpu::FilterMode::Linear,
                min_filter: wgpu::FilterMode::Linear,
                ..Default::default()
            }),
        }
    }

    fn bind(&self, device: &wgpu::Device, source: &wgpu::TextureView, label: &str) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: self.uniforms.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(source),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        })
    }
}

/// Bright-pass plus two-direction blur, sized by [`BloomSettings`].
pub struct BloomPipeline {
    inputs: BlurInputs,
    horizontal: BlurStage,
    vertical: BlurStage,
    settings: BloomSettings,
    target_size: (u32, u32),
}

impl BloomPipeline {
    /// `source_view` is the scene render; `width`/`height` are the window
    /// size the bloom target derives from.
    pub fn new(
        device: &wgpu::Device,
        source_view: &wgpu::TextureView,
        width: u32,
        height: u32,
        settings: BloomSettings,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("bloom shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/bloom.wgsl").into()),
        });
        let inputs = BlurInputs::new(device);
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("bloom pipeline layout"),
            bind_group_layouts: &[&inputs.layout],
            push_constant_ranges: &[],
        });

        let target_size = settings.target_size(width, height);
        let h_output = create_target(device, target_size, "bloom_h");
        let v_output = create_target(device, target_size, "bloom_v");

        let horizontal = BlurStage {
            label: "bloom h pass",
            pipeline: create_blur_pipeline(device, &layout, &shader, "fs_blur_h"),
            input: inputs.bind(device, source_view, "bloom bind group h"),
            output: h_output,
        };
        let vertical = BlurStage {
            label: "bloom v pass",
            pipeline: create_blur_pipeline(device, &layout, &shader, "fs_blur_v"),
            input: inputs.bind(device, &horizontal.output, "bloom bind group v"),
            output: v_output,
        };

        Self {
            inputs,
            horizontal,
            vertical,
            settings,
            target_size,
        }
    }

    pub fn settings(&self) -> &BloomSettings {
        &self.settings
    }

    pub fn target_size(&self) -> (u32, u32) {
        self.target_size
    }

    /// Rebind to a (possibly new) scene view and resize targets if the
    /// window or settings call for it.
    ///
    /// Returns whether the output view changed (the composite pass must
    /// rebind when it did).
    pub fn resize(
        &mut self,
        device: &wgpu::Device,
        source_view: &wgpu::TextureView,
        width: u32,
        height: u32,
    ) -> bool {
        let target_size = self.settings.target_size(width, height);
        let recreate = target_size != self.target_size;
        if recreate {
            self.horizontal.output = create_target(device, target_size, "bloom_h");
            self.vertical.output = create_target(device, target_size, "bloom_v");
            self.target_size = target_size;
            tracing::debug!(
                width = target_size.0,
                height = target_size.1,
                "bloom targets resized"
            );
        }

        self.horizontal.input = self.inputs.bind(device, source_view, "bloom bind group h");
        self.vertical.input = self
            .inputs
            .bind(device, &self.horizontal.output, "bloom bind group v");
        recreate
    }

    /// Replace the settings. Returns true when the target size changed and
    /// [`Self::resize`] must be called.
    pub fn set_settings(&mut self, settings: BloomSettings, width: u32, height: u32) -> bool {
        self.settings = settings;
        settings.target_size(width, height) != self.target_size
    }

    pub fn update_uniforms(&self, queue: &wgpu::Queue) {
        let (width, height) = self.target_size;
        let uniforms = self.settings.uniforms(width, height);
        queue.write_buffer(&self.inputs.uniforms, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Record both blur stages. Does nothing while bloom is disabled.
    pub fn render(&self, encoder: &mut wgpu::CommandEncoder) {
        if !self.settings.enabled {
            return;
        }
        self.horizontal.record(encoder);
        self.vertical.record(encoder);
    }

    /// The finished glow texture.
    pub fn output_view(&self) -> &wgpu::TextureView {
        &self.vertical.output
    }
}

fn create_blur_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    entry_point: &'static str,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(entry_point),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(entry_point),
            targets: &[Some(wgpu::ColorTargetState {
                format: BLOOM_FORMAT,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

fn create_target(device: &wgpu::Device, size: (u32, u32), label: &str) -> wgpu::TextureView {
    device
        .create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: size.0.max(1),
                height: size.1.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: BLOOM_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        })
        .create_view(&wgpu::TextureViewDescriptor::default())
}
