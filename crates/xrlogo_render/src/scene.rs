//! GPU scene nodes produced by [`WgpuHost`](crate::WgpuHost)

use std::sync::Arc;

use xrlogo_core::{Color, SceneNode, Transform3D};
use xrlogo_math::{mat4, Mat4};

use crate::pipeline::MeshUniforms;

/// Vertex and index buffers for one uploaded shape
pub struct GpuGeometry {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

/// A compiled material: shared pipeline plus the gradient colors
pub struct GpuMaterial {
    pub label: String,
    pub pipeline: Arc<wgpu::RenderPipeline>,
    pub color1: Color,
    pub color2: Color,
}

/// A drawable fin
pub struct GpuMesh {
    pub geometry: Arc<GpuGeometry>,
    pub material: GpuMaterial,
    pub transform: Transform3D,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

impl GpuMesh {
    /// Uniforms for this mesh under a parent matrix and a view matrix
    pub fn uniforms(&self, view: &Mat4, parent: &Mat4) -> MeshUniforms {
        let world = mat4::mul(parent, &self.transform.matrix());
        MeshUniforms::new(
            mat4::mul(view, &world),
            self.material.color1,
            self.material.color2,
        )
    }
}

impl SceneNode for GpuMesh {
    fn transform(&self) -> &Transform3D {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform3D {
        &mut self.transform
    }
}

/// A group of fins drawn together
#[derive(Default)]
pub struct GpuGroup {
    pub transform: Transform3D,
    pub children: Vec<GpuMesh>,
}

impl GpuGroup {
    /// Write every child's uniforms for the current view
    ///
    /// Call once per frame after changing the group's transform.
    pub fn sync_uniforms(&self, queue: &wgpu::Queue, view: &Mat4) {
        let parent = self.transform.matrix();
        for child in &self.children {
            let uniforms = child.uniforms(view, &parent);
            queue.write_buffer(&child.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        }
    }
}

impl SceneNode for GpuGroup {
    fn transform(&self) -> &Transform3D {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform3D {
        &mut self.transform
    }
}
