//! Render pipelines for logo materials
//!
//! Every fin material shares one shader source, so pipelines are cached by
//! source, face mode and blending. Four fins compile one pipeline.

use std::collections::HashMap;
use std::sync::Arc;

use xrlogo_core::{ShaderMaterial, Side};

use super::types::GpuVertex;
use crate::error::RenderError;

/// Depth buffer format shared by the pipelines and the renderer
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct PipelineKey {
    source: String,
    vertex_entry: &'static str,
    fragment_entry: &'static str,
    side: Side,
    transparent: bool,
}

impl PipelineKey {
    fn new(material: &ShaderMaterial) -> Self {
        Self {
            source: material.source.clone(),
            vertex_entry: material.vertex_entry,
            fragment_entry: material.fragment_entry,
            side: material.side,
            transparent: material.transparent,
        }
    }
}

/// Bind group layouts and the pipeline cache
pub struct LogoPipelines {
    /// Group 0: camera uniforms
    camera_layout: wgpu::BindGroupLayout,
    /// Group 1: per-mesh uniforms
    mesh_layout: wgpu::BindGroupLayout,
    pipeline_layout: wgpu::PipelineLayout,
    surface_format: wgpu::TextureFormat,
    cache: HashMap<PipelineKey, Arc<wgpu::RenderPipeline>>,
}

impl LogoPipelines {
    /// Create the layouts for a surface format
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let camera_layout = uniform_layout(device, "Camera Bind Group Layout", wgpu::ShaderStages::VERTEX);
        let mesh_layout = uniform_layout(
            device,
            "Mesh Bind Group Layout",
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        );

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Logo Pipeline Layout"),
            bind_group_layouts: &[&camera_layout, &mesh_layout],
            push_constant_ranges: &[],
        });

        Self {
            camera_layout,
            mesh_layout,
            pipeline_layout,
            surface_format,
            cache: HashMap::new(),
        }
    }

    /// Layout for bind group 0
    pub fn camera_layout(&self) -> &wgpu::BindGroupLayout {
        &self.camera_layout
    }

    /// Layout for bind group 1
    pub fn mesh_layout(&self) -> &wgpu::BindGroupLayout {
        &self.mesh_layout
    }

    /// Number of distinct pipelines compiled so far
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    /// Get the pipeline for a material, compiling it on first use
    ///
    /// Compilation runs inside a validation error scope so WGSL errors are
    /// returned as [`RenderError::Shader`] instead of reaching the device's
    /// uncaptured-error handler.
    pub fn get_or_create(
        &mut self,
        device: &wgpu::Device,
        material: &ShaderMaterial,
    ) -> Result<Arc<wgpu::RenderPipeline>, RenderError> {
        let key = PipelineKey::new(material);
        if let Some(pipeline) = self.cache.get(&key) {
            return Ok(Arc::clone(pipeline));
        }

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = self.create_pipeline(device, material);
        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            return Err(RenderError::Shader(err.to_string()));
        }

        log::debug!(
            "Compiled pipeline '{}' (side {:?}, transparent {})",
            material.label,
            material.side,
            material.transparent
        );

        let pipeline = Arc::new(pipeline);
        self.cache.insert(key, Arc::clone(&pipeline));
        Ok(pipeline)
    }

    fn create_pipeline(&self, device: &wgpu::Device, material: &ShaderMaterial) -> wgpu::RenderPipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(material.label.as_str()),
            source: wgpu::ShaderSource::Wgsl(material.source.as_str().into()),
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(material.label.as_str()),
            layout: Some(&self.pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(material.vertex_entry),
                buffers: &[GpuVertex::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(material.fragment_entry),
                targets: &[Some(wgpu::ColorTargetState {
                    format: self.surface_format,
                    blend: Some(blend_state(material.transparent)),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: cull_mode(material.side),
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }
}

fn uniform_layout(
    device: &wgpu::Device,
    label: &str,
    visibility: wgpu::ShaderStages,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

/// Faces to cull for a material side
pub fn cull_mode(side: Side) -> Option<wgpu::Face> {
    match side {
        Side::Front => Some(wgpu::Face::Back),
        Side::Back => Some(wgpu::Face::Front),
        Side::Double => None,
    }
}

/// Color blending for a material
pub fn blend_state(transparent: bool) -> wgpu::BlendState {
    if transparent {
        wgpu::BlendState::ALPHA_BLENDING
    } else {
        wgpu::BlendState::REPLACE
    }
}
