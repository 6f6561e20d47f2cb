//! CPU scene host
//!
//! A [`LogoHost`] that builds plain data: recorded paths, tessellated
//! geometry behind an `Arc`, material descriptors, and a small node tree.
//! GPU backends reuse its geometry step; tests use it to inspect the
//! assembled logo without a device.

use std::sync::Arc;
use xrlogo_math::{mat4, Mat4};
use crate::error::GeometryError;
use crate::geometry::{ShapeGeometry, DEFAULT_TOLERANCE, MIN_TOLERANCE};
use crate::host::{LogoHost, SceneNode};
use crate::path::ShapePath;
use crate::shading::ShaderMaterial;
use crate::transform::Transform3D;

/// A mesh node: shared geometry, owned material, local transform
#[derive(Clone, Debug)]
pub struct MeshNode {
    pub geometry: Arc<ShapeGeometry>,
    pub material: ShaderMaterial,
    pub transform: Transform3D,
}

impl SceneNode for MeshNode {
    fn transform(&self) -> &Transform3D {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform3D {
        &mut self.transform
    }
}

/// A group node holding meshes
#[derive(Clone, Debug, Default)]
pub struct GroupNode {
    pub transform: Transform3D,
    pub children: Vec<MeshNode>,
}

impl GroupNode {
    /// World matrix of each child (group matrix times child matrix)
    pub fn child_matrices(&self) -> impl Iterator<Item = Mat4> + '_ {
        let group = self.transform.matrix();
        self.children
            .iter()
            .map(move |child| mat4::mul(&group, &child.transform.matrix()))
    }
}

impl SceneNode for GroupNode {
    fn transform(&self) -> &Transform3D {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform3D {
        &mut self.transform
    }
}

/// Host producing CPU-side scene data
#[derive(Clone, Copy, Debug)]
pub struct CpuHost {
    tolerance: f32,
}

impl Default for CpuHost {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuHost {
    /// Create a host using the default curve tolerance
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Set the maximum distance between a curve and its flattened outline
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance.max(MIN_TOLERANCE);
        self
    }

    /// Curve flattening tolerance
    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }
}

impl LogoHost for CpuHost {
    type Shape = ShapePath;
    type Geometry = Arc<ShapeGeometry>;
    type Material = ShaderMaterial;
    type Mesh = MeshNode;
    type Group = GroupNode;
    type Error = GeometryError;

    fn create_shape(&mut self) -> ShapePath {
        ShapePath::new()
    }

    fn create_shape_geometry(&mut self, shape: &ShapePath) -> Result<Arc<ShapeGeometry>, GeometryError> {
        ShapeGeometry::from_path(shape, self.tolerance).map(Arc::new)
    }

    fn create_shader_material(&mut self, material: &ShaderMaterial) -> Result<ShaderMaterial, GeometryError> {
        Ok(material.clone())
    }

    fn create_mesh(
        &mut self,
        geometry: &Arc<ShapeGeometry>,
        material: ShaderMaterial,
    ) -> Result<MeshNode, GeometryError> {
        Ok(MeshNode {
            geometry: Arc::clone(geometry),
            material,
            transform: Transform3D::identity(),
        })
    }

    fn create_group(&mut self) -> GroupNode {
        GroupNode::default()
    }

    fn add_to_group(&mut self, group: &mut GroupNode, mesh: MeshNode) {
        group.children.push(mesh);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathSink;

    #[test]
    fn test_meshes_share_geometry() {
        let mut host = CpuHost::new();
        let mut shape = host.create_shape();
        shape.move_to(0.0, 0.0);
        shape.line_to(1.0, 0.0);
        shape.line_to(0.0, 1.0);
        let geometry = host.create_shape_geometry(&shape).unwrap();

        let material = ShaderMaterial {
            label: "test".to_string(),
            source: String::new(),
            vertex_entry: "vs_main",
            fragment_entry: "fs_main",
            uniforms: Vec::new(),
            side: Default::default(),
            transparent: false,
        };
        let a = host.create_mesh(&geometry, material.clone()).unwrap();
        let b = host.create_mesh(&geometry, material).unwrap();
        assert!(Arc::ptr_eq(&a.geometry, &b.geometry));
        assert_eq!(Arc::strong_count(&geometry), 3);
    }

    #[test]
    fn test_geometry_error_propagates() {
        let mut host = CpuHost::new();
        let mut shape = host.create_shape();
        shape.move_to(0.0, 0.0);
        shape.line_to(1.0, 0.0);
        assert_eq!(
            host.create_shape_geometry(&shape).unwrap_err(),
            GeometryError::TooFewPoints(2)
        );
    }

    #[test]
    fn test_tolerance_floor() {
        assert_eq!(CpuHost::new().with_tolerance(0.0).tolerance(), MIN_TOLERANCE);
        assert_eq!(CpuHost::new().with_tolerance(f32::NAN).tolerance(), MIN_TOLERANCE);
        assert_eq!(CpuHost::new().with_tolerance(0.01).tolerance(), 0.01);
    }

    #[test]
    fn test_group_children() {
        let mut host = CpuHost::new();
        let group = host.create_group();
        assert!(group.children.is_empty());
        assert_eq!(group.child_matrices().count(), 0);
    }
}
