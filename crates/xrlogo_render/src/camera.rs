//! Look-at camera

use xrlogo_math::{mat4, Mat4, Vec3};

/// A perspective camera looking at a fixed target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 45f32.to_radians(),
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    /// Create a camera at `eye` looking at `target`
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            ..Self::default()
        }
    }

    /// Set the vertical field of view in degrees
    pub fn with_fov_degrees(mut self, fov: f32) -> Self {
        self.fov_y = fov.to_radians();
        self
    }

    /// Set the clip planes
    pub fn with_clip(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// World-to-view matrix
    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at(self.eye, self.target, self.up)
    }

    /// Projection matrix for wgpu clip space
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        mat4::perspective(self.fov_y, aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_target_lands_on_view_axis() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.5, 0.0));
        let p = mat4::transform_point(&camera.view_matrix(), camera.target);
        assert!(approx_eq(p.x, 0.0));
        assert!(approx_eq(p.y, 0.0));
        assert!(p.z < 0.0);
    }

    #[test]
    fn test_projection_depth_range() {
        let camera = Camera::default();
        let proj = camera.projection_matrix(1.0);

        // Points on the near and far planes map to depth 0 and 1
        let clip = |z: f32| {
            let v = [0.0, 0.0, z, 1.0];
            let mut out = [0.0f32; 4];
            for (row, o) in out.iter_mut().enumerate() {
                *o = (0..4).map(|col| proj[col][row] * v[col]).sum();
            }
            out[2] / out[3]
        };
        assert!(approx_eq(clip(-camera.near), 0.0));
        assert!((clip(-camera.far) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_fov_degrees() {
        let camera = Camera::default().with_fov_degrees(90.0).with_clip(0.5, 10.0);
        assert!(approx_eq(camera.fov_y, std::f32::consts::FRAC_PI_2));
        assert_eq!(camera.near, 0.5);
        assert_eq!(camera.far, 10.0);
    }
}
