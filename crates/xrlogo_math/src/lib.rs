//! Math Library
//!
//! This crate provides the small vector, color, and rotation types used to
//! build and place the logo.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D point used by outline paths
//! - [`Vec3`] - 3D vector for normals and positions
//! - [`Color`] - Linear RGB color built from packed hex values
//! - [`Euler`] - XYZ-order Euler rotation
//! - [`Mat4`] - Column-major 4x4 matrix helpers

mod vec2;
mod vec3;
mod color;
mod euler;
pub mod mat4;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use color::Color;
pub use euler::Euler;
pub use mat4::Mat4;

/// Linear interpolation between two scalars: `a + t * (b - a)`
///
/// This exact form is used by the outline builder; it is not
/// numerically identical to `a * (1 - t) + b * t`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}
