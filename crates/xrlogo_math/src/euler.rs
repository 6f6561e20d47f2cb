//! Euler angle rotation

use serde::{Serialize, Deserialize};
use crate::mat4::{self, Mat4};

/// Rotation as Euler angles in radians, applied in XYZ order
///
/// The matrix is `Rx * Ry * Rz`, so Z is applied to a point first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Euler {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Euler {
    /// No rotation
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    /// Create from three angles
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Rotation about the vertical (Y) axis only
    #[inline]
    pub const fn from_y(angle: f32) -> Self {
        Self { x: 0.0, y: angle, z: 0.0 }
    }

    /// Build the rotation matrix
    pub fn to_matrix(&self) -> Mat4 {
        let xy = mat4::mul(&mat4::rotation_x(self.x), &mat4::rotation_y(self.y));
        mat4::mul(&xy, &mat4::rotation_z(self.z))
    }
}
