//! GPU-compatible data types for the logo pipeline
//!
//! These types match the layouts in `logo.wgsl` exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use xrlogo_math::{mat4, Mat4};
use xrlogo_core::{Color, ShapeGeometry};

/// A vertex of a flat fin mesh
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    /// Position in the fin's local space
    pub position: [f32; 3],
    /// Surface normal (always +Z for flat shapes)
    pub normal: [f32; 3],
    /// Texture coordinate
    pub uv: [f32; 2],
}

impl GpuVertex {
    /// Interleave a shape geometry's attribute arrays
    pub fn from_geometry(geometry: &ShapeGeometry) -> Vec<Self> {
        geometry
            .positions
            .iter()
            .zip(&geometry.normals)
            .zip(&geometry.uvs)
            .map(|((p, n), uv)| Self {
                position: p.to_array(),
                normal: n.to_array(),
                uv: uv.to_array(),
            })
            .collect()
    }

    /// Vertex buffer layout matching `VertexInput` in the shader
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GpuVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec3<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                // normal: vec3<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
                // uv: vec2<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 24,
                    shader_location: 2,
                },
            ],
        }
    }
}

/// Camera uniforms, bind group 0
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CameraUniforms {
    /// Projection matrix
    pub projection: Mat4,
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self {
            projection: mat4::IDENTITY,
        }
    }
}

/// Per-mesh uniforms, bind group 1
/// Layout: 160 bytes total (must match logo.wgsl MeshUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct MeshUniforms {
    /// Model-view matrix (64 bytes)
    pub model_view: Mat4,
    /// Inverse-transpose of model-view, padded to 4x4 (64 bytes)
    pub normal_matrix: Mat4,
    /// Gradient color at the bottom, alpha unused (16 bytes)
    pub color1: [f32; 4],
    /// Gradient color at the top, alpha unused (16 bytes)
    pub color2: [f32; 4],
}

impl MeshUniforms {
    /// Uniforms for a mesh with the given model-view matrix
    pub fn new(model_view: Mat4, color1: Color, color2: Color) -> Self {
        Self {
            model_view,
            normal_matrix: mat4::normal_matrix(&model_view),
            color1: color1.with_alpha(1.0),
            color2: color2.with_alpha(1.0),
        }
    }
}

impl Default for MeshUniforms {
    fn default() -> Self {
        Self {
            model_view: mat4::IDENTITY,
            normal_matrix: mat4::IDENTITY,
            color1: [1.0; 4],
            color2: [1.0; 4],
        }
    }
}
