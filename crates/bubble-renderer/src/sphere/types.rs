//! Sphere mesh data and GPU vertex layouts.
//!
//! Positions live in their own vertex buffer because the displacer rewrites
//! them every frame; normals and uvs never change and sit in a second,
//! static buffer.

/// CPU-side indexed sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Dynamic per-vertex position, re-uploaded whenever the displacer runs.
///
/// Layout: position(vec3) = 12 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PositionVertex {
    pub position: [f32; 3],
}

impl PositionVertex {
    /// wgpu vertex buffer layout for `PositionVertex` (slot 0).
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<PositionVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
        ],
    };
}

/// Static per-vertex surface attributes.
///
/// Layout: normal(vec3) + uv(vec2) = 20 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SurfaceVertex {
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl SurfaceVertex {
    /// wgpu vertex buffer layout for `SurfaceVertex` (slot 1).
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SurfaceVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // normal: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 1,
            },
            // uv: vec2<f32> at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 12,
                shader_location: 2,
            },
        ],
    };
}

// =============================================================================
// Tests
// =============================================================================
