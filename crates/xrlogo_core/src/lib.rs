//! Core types for the WebXR logo spinner
//!
//! This crate builds the four-fin logo independently of any renderer:
//!
//! - [`LogoParams`] - The five scalars that define a fin's outline
//! - [`FinOutline`] / [`build_fin_shape`] - Seven-command fin outline
//! - [`ShapePath`] / [`PathSink`] - Path recording and the path-builder capability
//! - [`ShapeGeometry`] - Flat mesh tessellated from an outline with lyon
//! - [`ShaderMaterial`] / [`logo_shader`] - Gradient material for each fin
//! - [`FinRole`] / [`Palette`] - Fin angles and colors
//! - [`LogoHost`] / [`SceneNode`] - What a graphics backend must provide
//! - [`LogoSpinner`] - Assembles the logo against a host
//! - [`CpuHost`] - Host producing plain CPU-side scene data

mod error;
mod params;
mod transform;
pub mod path;
pub mod fin;
pub mod geometry;
pub mod shading;
pub mod palette;
mod host;
mod spinner;
mod cpu_host;

pub use error::{GeometryError, ParamsError};
pub use params::LogoParams;
pub use transform::Transform3D;
pub use path::{PathCommand, PathSink, ShapePath};
pub use fin::{build_fin_shape, FinOutline};
pub use geometry::{ShapeGeometry, DEFAULT_TOLERANCE};
pub use shading::{logo_shader, ShaderMaterial, Side, Uniform};
pub use palette::{ColorPair, FinRole, Palette, FIN_COUNT, GROUP_ROTATION_Y};
pub use host::{LogoHost, SceneNode};
pub use spinner::LogoSpinner;
pub use cpu_host::{CpuHost, GroupNode, MeshNode};

// Re-export commonly used math types for convenience
pub use xrlogo_math::{Color, Euler, Vec2, Vec3};
