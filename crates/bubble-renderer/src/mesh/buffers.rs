//! GPU vertex and index buffers for a [`MeshInstance`].

use wgpu::util::DeviceExt;

use super::instance::MeshInstance;

/// Vertex slot 0 holds dynamic positions, slot 1 static normals and uvs.
pub struct MeshBuffers {
    positions: wgpu::Buffer,
    surface: wgpu::Buffer,
    indices: wgpu::Buffer,
    vertex_count: usize,
    index_count: u32,
}

impl MeshBuffers {
    /// Create buffers sized for `mesh`. Consumes the pending upload.
    pub fn new(device: &wgpu::Device, mesh: &mut MeshInstance, label: &str) -> Self {
        let positions_data = mesh.take_upload().unwrap_or(&[]);
        let vertex_count = positions_data.len();

        let positions = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} positions")),
            contents: bytemuck::cast_slice(positions_data),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let surface_data = mesh.surface_vertices();
        let surface = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} surface")),
            contents: bytemuck::cast_slice(&surface_data),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} indices")),
            contents: bytemuck::cast_slice(mesh.indices()),
            usage: wgpu::BufferUsages::INDEX,
        });

        tracing::debug!(
            label,
            vertices = vertex_count,
            indices = mesh.indices().len(),
            "mesh buffers created"
        );

        Self {
            positions,
            surface,
            indices,
            vertex_count,
            index_count: mesh.indices().len() as u32,
        }
    }

    /// Whether these buffers can hold `mesh`'s geometry.
    pub fn fits(&self, mesh: &MeshInstance) -> bool {
        mesh.positions().map_or(0, |p| p.len()) == self.vertex_count
    }

    /// Write positions if the mesh flagged them dirty. Returns whether an
    /// upload happened.
    pub fn sync(&self, queue: &wgpu::Queue, mesh: &mut MeshInstance) -> bool {
        if !self.fits(mesh) {
            tracing::warn!(
                buffer = self.vertex_count,
                mesh = mesh.positions().map_or(0, |p| p.len()),
                "mesh size differs from its buffers, skipping upload"
            );
            return false;
        }
        match mesh.take_upload() {
            Some(positions) if !positions.is_empty() => {
                queue.write_buffer(&self.positions, 0, bytemuck::cast_slice(positions));
                true
            }
            _ => false,
        }
    }

    /// Draw with positions only (slot 0).
    pub fn draw_positions(&self, pass: &mut wgpu::RenderPass<'_>) {
        if self.index_count == 0 {
            return;
        }
        pass.set_vertex_buffer(0, self.positions.slice(..));
        pass.set_index_buffer(self.indices.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }

    /// Draw with positions and surface attributes (slots 0 and 1).
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        if self.index_count == 0 {
            return;
        }
        pass.set_vertex_buffer(0, self.positions.slice(..));
        pass.set_vertex_buffer(1, self.surface.slice(..));
        pass.set_index_buffer(self.indices.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
