//! Logo renderer
//!
//! Owns the pipeline cache, the camera uniform buffer and the depth texture,
//! and draws every fin of a [`GpuGroup`] in a single render pass.

use wgpu::util::DeviceExt;
use xrlogo_math::Mat4;

use crate::error::RenderError;
use crate::host::WgpuHost;
use crate::pipeline::{CameraUniforms, LogoPipelines, DEPTH_FORMAT};
use crate::scene::GpuGroup;

/// Draws logo groups to a surface
pub struct LogoRenderer {
    pipelines: LogoPipelines,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    depth_texture: Option<wgpu::TextureView>,
    depth_size: (u32, u32),
}

impl LogoRenderer {
    /// Create a renderer for a surface format
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let pipelines = LogoPipelines::new(device, surface_format);

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Uniform Buffer"),
            contents: bytemuck::bytes_of(&CameraUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: pipelines.camera_layout(),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        Self {
            pipelines,
            camera_buffer,
            camera_bind_group,
            depth_texture: None,
            depth_size: (0, 0),
        }
    }

    /// A host that builds logo nodes into this renderer's pipeline cache
    pub fn host<'a>(&'a mut self, device: &'a wgpu::Device) -> WgpuHost<'a> {
        WgpuHost::new(device, &mut self.pipelines)
    }

    /// Number of pipelines compiled so far
    pub fn pipeline_count(&self) -> usize {
        self.pipelines.cached_count()
    }

    /// Update the projection matrix
    pub fn update_camera(&self, queue: &wgpu::Queue, projection: Mat4) {
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::bytes_of(&CameraUniforms { projection }),
        );
    }

    /// Ensure depth texture exists and is the right size
    pub fn ensure_depth_texture(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if self.depth_texture.is_none() || self.depth_size != (width, height) {
            let depth_texture = device.create_texture(&wgpu::TextureDescriptor {
                label: Some("Depth Texture"),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: DEPTH_FORMAT,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            });

            self.depth_texture = Some(depth_texture.create_view(&wgpu::TextureViewDescriptor::default()));
            self.depth_size = (width, height);
        }
    }

    /// Record a render pass drawing every fin of `group`
    ///
    /// Uniforms must already be synced with [`GpuGroup::sync_uniforms`].
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        group: &GpuGroup,
        clear_color: wgpu::Color,
    ) -> Result<(), RenderError> {
        let depth_view = self
            .depth_texture
            .as_ref()
            .ok_or(RenderError::MissingDepthTexture)?;

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Logo Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);

        for mesh in &group.children {
            render_pass.set_pipeline(&mesh.material.pipeline);
            render_pass.set_bind_group(1, &mesh.bind_group, &[]);
            render_pass.set_vertex_buffer(0, mesh.geometry.vertex_buffer.slice(..));
            render_pass.set_index_buffer(mesh.geometry.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..mesh.geometry.index_count, 0, 0..1);
        }

        Ok(())
    }
}
