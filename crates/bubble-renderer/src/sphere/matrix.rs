//! 4×4 matrix math for MVP transforms.
//!
//! Column-major layout matching WGSL `mat4x4<f32>`. Projections target the
//! wgpu clip volume (depth in `0..1`).

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Right-handed perspective projection with depth mapped to `0..1`.
///
/// `fov_y` is vertical field of view in radians.
/// `near` and `far` are the clip planes (must be > 0).
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect,
        0.0,
        0.0,
        0.0,
        0.0,
        f,
        0.0,
        0.0,
        0.0,
        0.0,
        far * range_inv,
        -1.0,
        0.0,
        0.0,
        far * near * range_inv,
        0.0,
    ]
}

/// Rotation around the X axis.
pub fn rotate_x(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        1.0, 0.0, 0.0, 0.0, 0.0, c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Rotation around the Y axis.
pub fn rotate_y(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        c, 0.0, -s, 0.0, 0.0, 1.0, 0.0, 0.0, s, 0.0, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Rotation around the Z axis.
pub fn rotate_z(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Euler rotation in XYZ order: `Rx × Ry × Rz`.
pub fn euler_xyz(x: f32, y: f32, z: f32) -> Mat4 {
    mul(&mul(&rotate_x(x), &rotate_y(y)), &rotate_z(z))
}

/// Translation matrix.
pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, y, z, 1.0,
    ]
}

/// Uniform scale matrix.
pub fn scale(s: f32) -> Mat4 {
    [
        s, 0.0, 0.0, 0.0, 0.0, s, 0.0, 0.0, 0.0, 0.0, s, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Multiply two 4×4 column-major matrices: result = a × b.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

/// Transform a homogeneous point: `m × p`.
pub fn transform(m: &Mat4, p: [f32; 4]) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for (row, value) in out.iter_mut().enumerate() {
        *value = (0..4).map(|k| m[k * 4 + row] * p[k]).sum();
    }
    out
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx_eq(a: &[f32], b: &[f32], eps: f32) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < eps)
    }

    #[test]
    fn identity_mul_identity() {
        let result = mul(&IDENTITY, &IDENTITY);
        assert!(approx_eq(&result, &IDENTITY, 1e-6));
    }

    #[test]
    fn translate_moves_point() {
        let t = translate(1.0, 2.0, 3.0);
        let p = transform(&t, [1.0, 1.0, 1.0, 1.0]);
        assert!(approx_eq(&p, &[2.0, 3.0, 4.0, 1.0], 1e-6));
    }

    #[test]
    fn scale_doubles_position() {
        let p = transform(&scale(2.0), [1.0, -1.0, 0.5, 1.0]);
        assert!(approx_eq(&p, &[2.0, -2.0, 1.0, 1.0], 1e-6));
    }

    #[test]
    fn rotate_x_90_maps_y_to_z() {
        let p = transform(&rotate_x(FRAC_PI_2), [0.0, 1.0, 0.0, 1.0]);
        assert!(approx_eq(&p, &[0.0, 0.0, 1.0, 1.0], 1e-5));
    }

    #[test]
    fn rotate_y_90_maps_z_to_x() {
        let p = transform(&rotate_y(FRAC_PI_2), [0.0, 0.0, 1.0, 1.0]);
        assert!(approx_eq(&p, &[1.0, 0.0, 0.0, 1.0], 1e-5));
    }

    #[test]
    fn rotate_z_90_maps_x_to_y() {
        let p = transform(&rotate_z(FRAC_PI_2), [1.0, 0.0, 0.0, 1.0]);
        assert!(approx_eq(&p, &[0.0, 1.0, 0.0, 1.0], 1e-5));
    }

    #[test]
    fn euler_applies_z_first() {
        // z then y: x-axis -> y-axis (z), y-axis stays (y rotation)
        let m = euler_xyz(0.0, FRAC_PI_2, FRAC_PI_2);
        let p = transform(&m, [1.0, 0.0, 0.0, 1.0]);
        assert!(approx_eq(&p, &[0.0, 1.0, 0.0, 1.0], 1e-5));
    }

    #[test]
    fn euler_zero_is_identity() {
        assert!(approx_eq(&euler_xyz(0.0, 0.0, 0.0), &IDENTITY, 1e-6));
    }

    #[test]
    fn perspective_maps_near_and_far_to_unit_depth() {
        let p = perspective(75f32.to_radians(), 1.6, 0.1, 1000.0);
        let near = transform(&p, [0.0, 0.0, -0.1, 1.0]);
        let far = transform(&p, [0.0, 0.0, -1000.0, 1.0]);
        assert!((near[2] / near[3]).abs() < 1e-5);
        assert!((far[2] / far[3] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn perspective_basic() {
        let p = perspective(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
        let f = 1.0 / (std::f32::consts::FRAC_PI_4 * 0.5).tan();
        assert!((p[0] - f / (16.0 / 9.0)).abs() < 1e-5);
        assert!((p[5] - f).abs() < 1e-5);
        assert!((p[11] - (-1.0)).abs() < 1e-6);
    }
}
