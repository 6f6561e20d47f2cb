//! 4x4 Matrix utilities for 3D transformations
//!
//! Matrices are column-major (`m[column][row]`), matching WGSL's `mat4x4<f32>`
//! layout so they can be copied into uniform buffers unchanged.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Multiply two matrices: `a * b` (applies `b` first, then `a`)
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];
    for col in 0..4 {
        for row in 0..4 {
            result[col][row] = a[0][row] * b[col][0]
                + a[1][row] * b[col][1]
                + a[2][row] * b[col][2]
                + a[3][row] * b[col][3];
        }
    }
    result
}

/// Rotation about the X axis (right-handed)
pub fn rotation_x(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, s, 0.0],
        [0.0, -s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Rotation about the Y axis (right-handed)
pub fn rotation_y(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        [c, 0.0, -s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Rotation about the Z axis (right-handed)
pub fn rotation_z(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        [c, s, 0.0, 0.0],
        [-s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Translation matrix
pub fn translation(offset: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = offset.x;
    m[3][1] = offset.y;
    m[3][2] = offset.z;
    m
}

/// Uniform scale matrix
pub fn uniform_scale(s: f32) -> Mat4 {
    let mut m = IDENTITY;
    m[0][0] = s;
    m[1][1] = s;
    m[2][2] = s;
    m
}

/// Transform a point (w = 1)
pub fn transform_point(m: &Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
        m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
        m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
    )
}

/// Transform a direction (w = 0)
pub fn transform_vector(m: &Mat4, v: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z,
        m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z,
        m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z,
    )
}

/// Normal matrix: inverse-transpose of the upper-left 3x3, padded to 4x4
///
/// For columns `c0, c1, c2` the inverse-transpose is
/// `[c1 x c2, c2 x c0, c0 x c1] / det`. A singular matrix yields the
/// unscaled cofactor matrix.
pub fn normal_matrix(m: &Mat4) -> Mat4 {
    let c0 = Vec3::new(m[0][0], m[0][1], m[0][2]);
    let c1 = Vec3::new(m[1][0], m[1][1], m[1][2]);
    let c2 = Vec3::new(m[2][0], m[2][1], m[2][2]);

    let n0 = c1.cross(c2);
    let n1 = c2.cross(c0);
    let n2 = c0.cross(c1);

    let det = c0.dot(n0);
    let inv_det = if det.abs() > 1e-12 { 1.0 / det } else { 1.0 };

    [
        [n0.x * inv_det, n0.y * inv_det, n0.z * inv_det, 0.0],
        [n1.x * inv_det, n1.y * inv_det, n1.z * inv_det, 0.0],
        [n2.x * inv_det, n2.y * inv_det, n2.z * inv_det, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Perspective projection for wgpu clip space (depth 0..1, right-handed view)
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, far * nf, -1.0],
        [0.0, 0.0, near * far * nf, 0.0],
    ]
}

/// Look-at view matrix
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = (target - eye).normalized();
    let s = f.cross(up).normalized();
    let u = s.cross(f);

    [
        [s.x, u.x, -f.x, 0.0],
        [s.y, u.y, -f.y, 0.0],
        [s.z, u.z, -f.z, 0.0],
        [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON && (a.z - b.z).abs() < EPSILON
    }

    fn mat_approx_eq(a: &Mat4, b: &Mat4) -> bool {
        a.iter().flatten().zip(b.iter().flatten()).all(|(x, y)| (x - y).abs() < EPSILON)
    }

    #[test]
    fn test_rotation_y_quarter_turn() {
        // +X rotates to -Z about +Y
        let m = rotation_y(FRAC_PI_2);
        let v = transform_vector(&m, Vec3::X);
        assert!(vec_approx_eq(v, -Vec3::Z), "got {:?}", v);
    }

    #[test]
    fn test_rotation_x_quarter_turn() {
        let m = rotation_x(FRAC_PI_2);
        let v = transform_vector(&m, Vec3::Y);
        assert!(vec_approx_eq(v, Vec3::Z), "got {:?}", v);
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        let m = rotation_z(FRAC_PI_2);
        let v = transform_vector(&m, Vec3::X);
        assert!(vec_approx_eq(v, Vec3::Y), "got {:?}", v);
    }

    #[test]
    fn test_mul_order() {
        // Translate after rotating: rotate X to -Z, then shift by +X
        let m = mul(&translation(Vec3::X), &rotation_y(FRAC_PI_2));
        let p = transform_point(&m, Vec3::X);
        assert!(vec_approx_eq(p, Vec3::new(1.0, 0.0, -1.0)), "got {:?}", p);
    }

    #[test]
    fn test_mul_identity() {
        let m = rotation_y(0.3);
        assert!(mat_approx_eq(&mul(&IDENTITY, &m), &m));
        assert!(mat_approx_eq(&mul(&m, &IDENTITY), &m));
    }

    #[test]
    fn test_normal_matrix_of_rotation_is_rotation() {
        let m = mul(&rotation_y(0.7), &rotation_x(-0.4));
        let n = normal_matrix(&m);
        let mut expected = m;
        expected[3] = [0.0, 0.0, 0.0, 1.0];
        assert!(mat_approx_eq(&n, &expected));
    }

    #[test]
    fn test_normal_matrix_undoes_scale() {
        let m = uniform_scale(2.0);
        let n = normal_matrix(&m);
        let v = transform_vector(&n, Vec3::Z);
        assert!(vec_approx_eq(v, Vec3::Z * 0.5), "got {:?}", v);
    }

    #[test]
    fn test_look_at_maps_target_to_negative_z() {
        let view = look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let p = transform_point(&view, Vec3::ZERO);
        assert!(vec_approx_eq(p, Vec3::new(0.0, 0.0, -5.0)), "got {:?}", p);
    }

    #[test]
    fn test_perspective_depth_range() {
        let proj = perspective(1.0, 1.0, 0.1, 100.0);
        // Near plane maps to depth 0, far plane to depth 1
        let depth = |z: f32| {
            let clip_z = proj[2][2] * z + proj[3][2];
            let clip_w = proj[2][3] * z;
            clip_z / clip_w
        };
        assert!((depth(-0.1)).abs() < 1e-4);
        assert!((depth(-100.0) - 1.0).abs() < 1e-4);
    }
}
