//! Logo Rendering Library
//!
//! This crate provides the wgpu backend for the logo spinner.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`WgpuHost`] - Builds the logo's geometry, materials and meshes on the GPU
//! - [`pipeline::LogoPipelines`] - Bind group layouts and the pipeline cache
//! - [`LogoRenderer`] - Camera uniforms, depth buffer and the render pass
//! - [`Camera`] - Look-at camera producing view and projection matrices

pub mod context;
pub mod camera;
pub mod pipeline;
mod error;
mod host;
mod scene;
mod renderer;

pub use camera::Camera;
pub use error::RenderError;
pub use host::WgpuHost;
pub use scene::{GpuGeometry, GpuGroup, GpuMaterial, GpuMesh};
pub use renderer::LogoRenderer;

// Re-export core types for convenience
pub use xrlogo_core::{LogoParams, LogoSpinner, SceneNode};
