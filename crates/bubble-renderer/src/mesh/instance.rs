//! A renderable mesh whose positions are animated on the CPU.

use crate::displace::{DisplacementTarget, Rotation};
use crate::sphere::matrix::{self, Mat4};
use crate::sphere::{SphereMesh, SurfaceVertex};

/// Live geometry plus transform for one drawn mesh.
///
/// Positions start out `None` until geometry is attached, matching a mesh
/// whose buffers are created lazily. Normals, uvs, and indices are static.
#[derive(Debug, Clone, Default)]
pub struct MeshInstance {
    positions: Option<Vec<[f32; 3]>>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,
    pub rotation: Rotation,
    needs_upload: bool,
}

impl MeshInstance {
    /// A mesh with no geometry yet.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_sphere(mesh: &SphereMesh) -> Self {
        let mut instance = Self::empty();
        instance.attach(mesh);
        instance
    }

    /// Attach (or replace) geometry. Rotation is kept.
    pub fn attach(&mut self, mesh: &SphereMesh) {
        self.positions = Some(mesh.positions.clone());
        self.normals = mesh.normals.clone();
        self.uvs = mesh.uvs.clone();
        self.indices = mesh.indices.clone();
        self.needs_upload = true;
    }

    pub fn has_geometry(&self) -> bool {
        self.positions.is_some()
    }

    pub fn positions(&self) -> Option<&[[f32; 3]]> {
        self.positions.as_deref()
    }

    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    pub fn uvs(&self) -> &[[f32; 2]] {
        &self.uvs
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Interleaved normals and uvs for the static vertex buffer.
    pub fn surface_vertices(&self) -> Vec<SurfaceVertex> {
        self.normals
            .iter()
            .zip(&self.uvs)
            .map(|(&normal, &uv)| SurfaceVertex { normal, uv })
            .collect()
    }

    pub fn needs_upload(&self) -> bool {
        self.needs_upload
    }

    /// Positions to upload this frame, if they changed. Clears the flag.
    pub fn take_upload(&mut self) -> Option<&[[f32; 3]]> {
        if !self.needs_upload {
            return None;
        }
        self.needs_upload = false;
        self.positions.as_deref()
    }

    /// Uniform scale followed by the Euler rotation, column-major.
    pub fn model_matrix(&self, scale: f32) -> Mat4 {
        let [x, y, z] = self.rotation.wrapped();
        let rotation = matrix::euler_xyz(x, y, z);
        matrix::mul(&matrix::scale(scale), &rotation)
    }
}

impl DisplacementTarget for MeshInstance {
    fn positions_mut(&mut self) -> Option<&mut [[f32; 3]]> {
        self.positions.as_deref_mut()
    }

    fn rotation_mut(&mut self) -> &mut Rotation {
        &mut self.rotation
    }

    fn mark_positions_dirty(&mut self) {
        self.needs_upload = true;
    }
}

// =============================================================================
// Tests
// =============================================================================
