//! 3D Transform (position, rotation, scale)
//!
//! A Transform3D places a scene node relative to its parent.

use xrlogo_math::{mat4, Euler, Mat4, Vec3};
use serde::{Serialize, Deserialize};

/// A 3D transform with position, Euler rotation, and uniform scale
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    /// Position relative to the parent
    pub position: Vec3,
    /// Rotation in XYZ Euler order
    pub rotation: Euler,
    /// Uniform scale factor
    pub scale: f32,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// Create an identity transform (no translation, rotation, or scale change)
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Euler::IDENTITY,
            scale: 1.0,
        }
    }

    /// Create a transform with just a rotation
    pub fn from_rotation(rotation: Euler) -> Self {
        Self {
            rotation,
            ..Self::identity()
        }
    }

    /// Local-to-parent matrix
    ///
    /// Applies scale, then rotation, then translation.
    pub fn matrix(&self) -> Mat4 {
        let rs = mat4::mul(&self.rotation.to_matrix(), &mat4::uniform_scale(self.scale));
        mat4::mul(&mat4::translation(self.position), &rs)
    }

    /// Transform a point from local space to parent space
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        mat4::transform_point(&self.matrix(), p)
    }

    /// Rotate around the vertical axis by `angle` radians
    pub fn rotate_y(&mut self, angle: f32) {
        self.rotation.y += angle;
    }

    /// Set the rotation
    pub fn set_rotation(&mut self, rotation: Euler) {
        self.rotation = rotation;
    }
}
