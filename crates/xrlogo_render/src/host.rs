//! wgpu implementation of the logo host
//!
//! Shapes are recorded and tessellated by a [`CpuHost`], then uploaded once; every
//! fin mesh holds an `Arc` to the same buffers. Materials resolve to a
//! cached pipeline plus the two gradient colors, and each mesh gets its own
//! uniform buffer and bind group.

use std::sync::Arc;

use wgpu::util::DeviceExt;
use xrlogo_core::shading::{COLOR1_UNIFORM, COLOR2_UNIFORM};
use xrlogo_core::{CpuHost, LogoHost, ShaderMaterial, ShapePath, Transform3D};

use crate::error::RenderError;
use crate::pipeline::{GpuVertex, LogoPipelines, MeshUniforms};
use crate::scene::{GpuGeometry, GpuGroup, GpuMaterial, GpuMesh};

/// Builds logo scene nodes on a wgpu device
pub struct WgpuHost<'a> {
    device: &'a wgpu::Device,
    pipelines: &'a mut LogoPipelines,
    cpu: CpuHost,
}

impl<'a> WgpuHost<'a> {
    /// Create a host that compiles into `pipelines`
    pub fn new(device: &'a wgpu::Device, pipelines: &'a mut LogoPipelines) -> Self {
        Self {
            device,
            pipelines,
            cpu: CpuHost::new(),
        }
    }

    /// Set the maximum distance between a curve and its flattened outline
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.cpu = self.cpu.with_tolerance(tolerance);
        self
    }
}

impl LogoHost for WgpuHost<'_> {
    type Shape = ShapePath;
    type Geometry = Arc<GpuGeometry>;
    type Material = GpuMaterial;
    type Mesh = GpuMesh;
    type Group = GpuGroup;
    type Error = RenderError;

    fn create_shape(&mut self) -> ShapePath {
        self.cpu.create_shape()
    }

    fn create_shape_geometry(&mut self, shape: &ShapePath) -> Result<Arc<GpuGeometry>, RenderError> {
        let geometry = self.cpu.create_shape_geometry(shape)?;
        let vertices = GpuVertex::from_geometry(&geometry);

        let vertex_buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Fin Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Fin Index Buffer"),
            contents: bytemuck::cast_slice(&geometry.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!(
            "Uploaded shape: {} vertices, {} triangles",
            geometry.vertex_count(),
            geometry.triangle_count()
        );

        Ok(Arc::new(GpuGeometry {
            vertex_buffer,
            index_buffer,
            index_count: geometry.indices.len() as u32,
        }))
    }

    fn create_shader_material(&mut self, material: &ShaderMaterial) -> Result<GpuMaterial, RenderError> {
        let color1 = material
            .color_uniform(COLOR1_UNIFORM)
            .ok_or_else(|| RenderError::MissingUniform(COLOR1_UNIFORM.to_string()))?;
        let color2 = material
            .color_uniform(COLOR2_UNIFORM)
            .ok_or_else(|| RenderError::MissingUniform(COLOR2_UNIFORM.to_string()))?;

        let pipeline = self.pipelines.get_or_create(self.device, material)?;

        Ok(GpuMaterial {
            label: material.label.clone(),
            pipeline,
            color1,
            color2,
        })
    }

    fn create_mesh(
        &mut self,
        geometry: &Arc<GpuGeometry>,
        material: GpuMaterial,
    ) -> Result<GpuMesh, RenderError> {
        let uniforms = MeshUniforms::new(xrlogo_math::mat4::IDENTITY, material.color1, material.color2);
        let uniform_buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Uniform Buffer"),
            contents: bytemuck::bytes_of(&uniforms),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Mesh Bind Group"),
            layout: self.pipelines.mesh_layout(),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Ok(GpuMesh {
            geometry: Arc::clone(geometry),
            material,
            transform: Transform3D::identity(),
            uniform_buffer,
            bind_group,
        })
    }

    fn create_group(&mut self) -> GpuGroup {
        GpuGroup::default()
    }

    fn add_to_group(&mut self, group: &mut GpuGroup, mesh: GpuMesh) {
        group.children.push(mesh);
    }
}
