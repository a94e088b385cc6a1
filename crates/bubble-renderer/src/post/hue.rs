//! Hue rotation and saturation grading.
//!
//! The hue rotation is a symmetric 3×3 matrix built from a single vector
//! whose components are permuted per channel. The composite shader applies
//! [`apply_hue_saturation`]'s math on the GPU; this CPU copy builds the
//! uniforms and pins the math down in tests.

/// Rotation vector for `hue` radians.
///
/// The output channel `r` is `dot(rgb, v.xyz)`, `g` is `dot(rgb, v.zxy)`
/// and `b` is `dot(rgb, v.yzx)`.
pub fn hue_vector(hue: f32) -> [f32; 3] {
    let s = hue.sin();
    let c = hue.cos();
    let sqrt3 = 3.0f32.sqrt();
    [
        (2.0 * c + 1.0) / 3.0,
        (-sqrt3 * s - c + 1.0) / 3.0,
        (sqrt3 * s - c + 1.0) / 3.0,
    ]
}

fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Rotate hue, then push channels away from (saturation > 0) or toward
/// (saturation < 0) their average.
pub fn apply_hue_saturation(rgb: [f32; 3], hue: f32, saturation: f32) -> [f32; 3] {
    let [x, y, z] = hue_vector(hue);
    let mut color = [
        dot(rgb, [x, y, z]),
        dot(rgb, [z, x, y]),
        dot(rgb, [y, z, x]),
    ];

    let average = (color[0] + color[1] + color[2]) / 3.0;
    let factor = if saturation > 0.0 {
        1.0 - 1.0 / (1.001 - saturation)
    } else {
        -saturation
    };
    for channel in &mut color {
        *channel += (average - *channel) * factor;
    }
    color
}
