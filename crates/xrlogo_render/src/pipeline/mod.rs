//! Rendering pipeline components
//!
//! GPU data layouts and the pipeline cache for logo materials.

pub mod types;
pub mod logo_pipeline;

pub use types::{CameraUniforms, GpuVertex, MeshUniforms};
pub use logo_pipeline::{blend_state, cull_mode, LogoPipelines, DEPTH_FORMAT};
