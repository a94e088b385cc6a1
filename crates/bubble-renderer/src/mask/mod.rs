//! Backdrop layers: the stencil silhouette and the image it reveals.
//!
//! Both draw into the backdrop pass, which carries a stencil-only
//! attachment cleared to zero. The mask writes [`MASK_REFERENCE`] wherever
//! the invisible bubble covers; the masked image pipeline passes only there.

mod image_layer;
mod stencil;

pub use image_layer::*;
pub use stencil::*;

/// Format of the backdrop pass's depth-stencil attachment.
pub const STENCIL_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Stencil8;

/// Stencil value written by the mask and tested by the masked image.
pub const MASK_REFERENCE: u32 = 1;

/// Stencil-only state with the same test on both faces.
pub(crate) fn stencil_state(
    compare: wgpu::CompareFunction,
    pass_op: wgpu::StencilOperation,
) -> wgpu::DepthStencilState {
    let face = wgpu::StencilFaceState {
        compare,
        fail_op: wgpu::StencilOperation::Keep,
        depth_fail_op: wgpu::StencilOperation::Keep,
        pass_op,
    };
    wgpu::DepthStencilState {
        format: STENCIL_FORMAT,
        depth_write_enabled: false,
        depth_compare: wgpu::CompareFunction::Always,
        stencil: wgpu::StencilState {
            front: face,
            back: face,
            read_mask: 0xff,
            write_mask: 0xff,
        },
        bias: wgpu::DepthBiasState::default(),
    }
}

/// Create the backdrop pass's stencil attachment.
pub fn create_stencil_texture(
    device: &wgpu::Device,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("backdrop stencil"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: STENCIL_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_state_replaces_on_pass() {
        let state = stencil_state(
            wgpu::CompareFunction::Always,
            wgpu::StencilOperation::Replace,
        );
        assert_eq!(state.stencil.front, state.stencil.back);
        assert_eq!(state.stencil.front.pass_op, wgpu::StencilOperation::Replace);
        assert!(!state.depth_write_enabled);
    }

    #[test]
    fn test_state_keeps_stencil() {
        let state = stencil_state(wgpu::CompareFunction::Equal, wgpu::StencilOperation::Keep);
        assert_eq!(state.stencil.front.compare, wgpu::CompareFunction::Equal);
        assert_eq!(state.stencil.front.fail_op, wgpu::StencilOperation::Keep);
    }
}
