//! Sphere mesh generation.
//!
//! Generates an indexed UV sphere. Seam and pole vertices are duplicated so
//! every grid point carries its own uv; the pole rows emit one triangle per
//! quad and every other row emits two.

use super::types::SphereMesh;

/// Generate an indexed UV sphere centered at the origin.
///
/// Produces `(width + 1) * (height + 1)` vertices ordered row by row from
/// the north pole (0, r, 0) down to the south pole. Segment counts are
/// clamped to `width >= 3` and `height >= 2`.
pub fn generate_sphere_mesh(radius: f32, width_segments: u32, height_segments: u32) -> SphereMesh {
    let width = width_segments.max(3);
    let height = height_segments.max(2);

    let vertex_count = ((width + 1) * (height + 1)) as usize;
    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);
    let mut grid: Vec<Vec<u32>> = Vec::with_capacity(height as usize + 1);

    let mut next_index = 0u32;
    for iy in 0..=height {
        let v = iy as f32 / height as f32;

        // Nudge the pole uvs so the triangle fans sample the middle of the seam.
        let u_offset = if iy == 0 {
            0.5 / width as f32
        } else if iy == height {
            -0.5 / width as f32
        } else {
            0.0
        };

        let mut row = Vec::with_capacity(width as usize + 1);
        for ix in 0..=width {
            let u = ix as f32 / width as f32;
            let point = sphere_point(radius, u, v);

            positions.push(point);
            normals.push(normalize(point));
            uvs.push([u + u_offset, 1.0 - v]);

            row.push(next_index);
            next_index += 1;
        }
        grid.push(row);
    }

    let mut indices = Vec::new();
    for iy in 0..height as usize {
        for ix in 0..width as usize {
            let a = grid[iy][ix + 1];
            let b = grid[iy][ix];
            let c = grid[iy + 1][ix];
            let d = grid[iy + 1][ix + 1];

            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height as usize - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    SphereMesh {
        positions,
        normals,
        uvs,
        indices,
    }
}

/// Point on the sphere for normalized grid coordinates `u` (around) and `v`
/// (top to bottom), both in `0..=1`.
fn sphere_point(radius: f32, u: f32, v: f32) -> [f32; 3] {
    let phi = u * std::f32::consts::TAU;
    let theta = v * std::f32::consts::PI;

    [
        -radius * phi.cos() * theta.sin(),
        radius * theta.cos(),
        radius * phi.sin() * theta.sin(),
    ]
}

fn normalize(p: [f32; 3]) -> [f32; 3] {
    let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
    if len == 0.0 {
        return [0.0, 0.0, 0.0];
    }
    [p[0] / len, p[1] / len, p[2] / len]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn length(p: [f32; 3]) -> f32 {
        (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt()
    }

    #[test]
    fn vertex_count_includes_seams() {
        let mesh = generate_sphere_mesh(0.4, 64, 64);
        assert_eq!(mesh.vertex_count(), 65 * 65);
        assert_eq!(mesh.normals.len(), 65 * 65);
        assert_eq!(mesh.uvs.len(), 65 * 65);
    }

    #[test]
    fn triangle_count_skips_degenerate_pole_triangles() {
        let (w, h) = (8, 6);
        let mesh = generate_sphere_mesh(1.0, w, h);
        // Two triangles per quad, minus one per quad in each pole row.
        let expected = (2 * w * h - 2 * w) as usize;
        assert_eq!(mesh.triangle_count(), expected);
    }

    #[test]
    fn indices_are_in_range() {
        let mesh = generate_sphere_mesh(0.4, 12, 9);
        let n = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
    }

    #[test]
    fn first_vertex_is_north_pole() {
        let mesh = generate_sphere_mesh(0.4, 8, 4);
        let p = mesh.positions[0];
        assert!(p[0].abs() < 1e-6);
        assert!((p[1] - 0.4).abs() < 1e-6);
        assert!(p[2].abs() < 1e-6);
    }

    #[test]
    fn last_vertex_is_south_pole() {
        let mesh = generate_sphere_mesh(0.4, 8, 4);
        let p = *mesh.positions.last().unwrap();
        assert!(p[0].abs() < 1e-5);
        assert!((p[1] + 0.4).abs() < 1e-6);
        assert!(p[2].abs() < 1e-5);
    }

    #[test]
    fn equator_starts_on_negative_x() {
        let mesh = generate_sphere_mesh(1.0, 8, 4);
        // Row 2 of 4 is the equator; ix = 0 sits at (-r, 0, 0).
        let p = mesh.positions[2 * 9];
        assert!((p[0] + 1.0).abs() < 1e-6);
        assert!(p[1].abs() < 1e-6);
        assert!(p[2].abs() < 1e-6);
    }

    #[test]
    fn all_vertices_lie_on_radius() {
        let mesh = generate_sphere_mesh(0.4, 16, 12);
        for (i, p) in mesh.positions.iter().enumerate() {
            assert!((length(*p) - 0.4).abs() < 1e-5, "vertex {i}");
        }
    }

    #[test]
    fn normals_are_unit_and_outward() {
        let mesh = generate_sphere_mesh(0.4, 16, 12);
        for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
            assert!((length(*n) - 1.0).abs() < 1e-5);
            let dot = p[0] * n[0] + p[1] * n[1] + p[2] * n[2];
            assert!(dot > 0.0);
        }
    }

    #[test]
    fn seam_vertices_coincide() {
        let mesh = generate_sphere_mesh(1.0, 8, 4);
        let row = 9;
        for iy in 0..=4 {
            let first = mesh.positions[iy * row];
            let last = mesh.positions[iy * row + 8];
            for k in 0..3 {
                assert!((first[k] - last[k]).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn first_quad_below_pole_row_winding() {
        let mesh = generate_sphere_mesh(1.0, 4, 3);
        // Row 0 emits only (b, c, d) for ix = 0: (0, 5, 6).
        assert_eq!(&mesh.indices[0..3], &[0, 5, 6]);
    }

    #[test]
    fn minimum_segments_clamped() {
        let mesh = generate_sphere_mesh(1.0, 1, 1);
        assert_eq!(mesh.vertex_count(), 4 * 3);
        assert_eq!(mesh.triangle_count(), (2 * 3 * 2 - 2 * 3) as usize);
    }
}
