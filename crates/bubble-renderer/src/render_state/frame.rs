use bubble_config::BubbleConfig;

use crate::gpu::{FrameUniforms, RendererError};
use crate::mesh::MeshBuffers;
use crate::post::CompositeUniforms;
use crate::scene::BubbleScene;
use crate::sphere::GlassUniforms;

use super::helpers::log_first_frame;
use super::state::RenderState;
use super::transforms::SceneTransforms;

impl RenderState {
    /// Render a complete frame of the bubble scene.
    ///
    /// `elapsed` is wall-clock seconds since start and drives the glass
    /// shader's temporal distortion.
    pub fn render_frame(
        &mut self,
        scene: &mut BubbleScene,
        config: &BubbleConfig,
        elapsed: f32,
    ) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("surface lost or outdated, reconfiguring");
                let size = self.gpu.size;
                self.resize(size.width, size.height);
                return Ok(());
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(e.into());
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.upload(scene, config, elapsed);

        let features = scene.features();
        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("bubble frame encoder"),
            });

        // 1. Backdrop: clear color, stencil silhouette, image
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("backdrop pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.backdrop_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.stencil_view,
                    depth_ops: None,
                    stencil_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(0),
                        store: wgpu::StoreOp::Discard,
                    }),
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let masked = match (&self.stencil_buffers, features.mask) {
                (Some(buffers), true) => {
                    self.mask.render(&mut pass, buffers);
                    true
                }
                _ => false,
            };
            self.image.render(&mut pass, masked);
        }

        // 2. Scene: backdrop underneath, glass bubble on top
        self.targets.copy_backdrop_to_scene(&mut encoder);
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("bubble pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.scene_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.glass
                .render(&mut pass, &self.frame.bind_group, &self.bubble_buffers);
        }

        // 3. Bloom
        self.bloom.render(&mut encoder);

        // 4. Composite onto the surface
        self.composite.render(&mut encoder, &view);

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(())
    }

    /// Write this frame's vertex data and uniforms.
    fn upload(&mut self, scene: &mut BubbleScene, config: &BubbleConfig, elapsed: f32) {
        let queue = &self.gpu.queue;
        let size = self.gpu.size;

        if !self.bubble_buffers.fits(scene.bubble()) {
            self.bubble_buffers = MeshBuffers::new(&self.gpu.device, scene.bubble_mut(), "bubble");
        }
        self.bubble_buffers.sync(queue, scene.bubble_mut());
        if let (Some(buffers), Some(stencil)) = (&self.stencil_buffers, scene.stencil_mut()) {
            buffers.sync(queue, stencil);
        }

        let transforms = SceneTransforms::new(scene, size.aspect());
        let features = scene.features();

        self.frame
            .update(queue, &FrameUniforms::new(elapsed, size.width, size.height));
        self.glass.update_uniforms(
            queue,
            &GlassUniforms::new(
                transforms.bubble_mvp,
                transforms.bubble_model,
                transforms.eye,
                &config.material,
            ),
        );
        if let Some(mvp) = transforms.stencil_mvp {
            self.mask.update_uniforms(queue, mvp);
        }
        self.image
            .update_uniforms(queue, transforms.image_mvp, config.scene.image_scale);
        self.bloom.update_uniforms(queue);

        let grading = features
            .hue_saturation
            .then_some(&config.effects.hue_saturation);
        self.composite.update_uniforms(
            queue,
            &CompositeUniforms::new(grading, self.bloom.settings().effective_intensity()),
        );
    }
}
