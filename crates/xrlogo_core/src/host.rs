//! Graphics host capabilities
//!
//! The logo never talks to a renderer directly. It is built against
//! [`LogoHost`], a narrow set of factories a graphics backend provides:
//! path builders, flat geometry, shader materials, meshes and groups.
//! Backends report failures through their own `Error` type, which the
//! assembly passes through unchanged.

use crate::path::PathSink;
use crate::shading::ShaderMaterial;
use crate::transform::Transform3D;

/// A node in the host's scene graph with a local transform
pub trait SceneNode {
    /// The node's transform relative to its parent
    fn transform(&self) -> &Transform3D;

    /// Mutable access to the node's transform
    fn transform_mut(&mut self) -> &mut Transform3D;
}

/// Factory interface a graphics backend implements to build the logo
pub trait LogoHost {
    /// Path builder handed to the outline builder
    type Shape: PathSink;
    /// Flat geometry derived from a shape; meshes may share one
    type Geometry;
    /// Compiled shader material
    type Material;
    /// Renderable pairing of geometry and material
    type Mesh: SceneNode;
    /// Container node for meshes
    type Group: SceneNode;
    /// Backend failure
    type Error;

    /// Create an empty path builder
    fn create_shape(&mut self) -> Self::Shape;

    /// Build flat geometry from a finished shape
    fn create_shape_geometry(&mut self, shape: &Self::Shape) -> Result<Self::Geometry, Self::Error>;

    /// Compile a shader material
    fn create_shader_material(
        &mut self,
        material: &ShaderMaterial,
    ) -> Result<Self::Material, Self::Error>;

    /// Pair geometry with a material
    ///
    /// The geometry is borrowed so several meshes can share it.
    fn create_mesh(
        &mut self,
        geometry: &Self::Geometry,
        material: Self::Material,
    ) -> Result<Self::Mesh, Self::Error>;

    /// Create an empty group
    fn create_group(&mut self) -> Self::Group;

    /// Attach a mesh as a child of a group
    fn add_to_group(&mut self, group: &mut Self::Group, mesh: Self::Mesh);
}
