//! Flat shape geometry
//!
//! Turns a closed [`ShapePath`] into a triangle mesh lying in the XY plane.
//! Curves are flattened and filled by lyon's [`FillTessellator`]; triangles
//! are then wound counter-clockwise so every one faces +Z.

use lyon::tessellation::{BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers};
use xrlogo_math::{Vec2, Vec3};
use crate::error::GeometryError;
use crate::path::ShapePath;

/// Default maximum distance between a curve and its flattened polyline
pub const DEFAULT_TOLERANCE: f32 = 0.001;

/// Smallest tolerance a host accepts
pub const MIN_TOLERANCE: f32 = 1e-5;

/// A flat triangle mesh built from an outline
///
/// Positions lie at z = 0, normals are all +Z, and UVs are the local XY
/// coordinates of each vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeGeometry {
    /// Vertex positions
    pub positions: Vec<Vec3>,
    /// Vertex normals (one per position)
    pub normals: Vec<Vec3>,
    /// Texture coordinates (one per position)
    pub uvs: Vec<Vec2>,
    /// Triangle list indices into `positions`
    pub indices: Vec<u32>,
}

impl ShapeGeometry {
    /// Build geometry from a recorded path
    ///
    /// `tolerance` bounds how far the flattened curves may stray from the
    /// true ones; it is clamped to [`MIN_TOLERANCE`].
    pub fn from_path(path: &ShapePath, tolerance: f32) -> Result<Self, GeometryError> {
        let points = path.point_count();
        if points < 3 {
            return Err(GeometryError::TooFewPoints(points));
        }
        if !path.is_finite() {
            return Err(GeometryError::NotFinite);
        }

        let mut buffers: VertexBuffers<Vec2, u32> = VertexBuffers::new();
        let mut tessellator = FillTessellator::new();
        tessellator
            .tessellate_path(
                &path.to_path(),
                &FillOptions::tolerance(tolerance.max(MIN_TOLERANCE)),
                &mut BuffersBuilder::new(&mut buffers, |vertex: FillVertex| {
                    let p = vertex.position();
                    Vec2::new(p.x, p.y)
                }),
            )
            .map_err(|e| GeometryError::Tessellation(format!("{:?}", e)))?;

        let mut indices = buffers.indices;
        for tri in indices.chunks_exact_mut(3) {
            let a = buffers.vertices[tri[0] as usize];
            let b = buffers.vertices[tri[1] as usize];
            let c = buffers.vertices[tri[2] as usize];
            if (b - a).perp_dot(c - a) < 0.0 {
                tri.swap(1, 2);
            }
        }

        let geometry = Self {
            positions: buffers.vertices.iter().map(|p| Vec3::new(p.x, p.y, 0.0)).collect(),
            normals: vec![Vec3::Z; buffers.vertices.len()],
            uvs: buffers.vertices,
            indices,
        };

        let area = geometry.area();
        if !area.is_finite() || area <= f32::EPSILON * f32::EPSILON {
            return Err(GeometryError::ZeroArea);
        }

        log::trace!(
            "Tessellated shape: {} vertices, {} triangles",
            geometry.vertex_count(),
            geometry.triangle_count()
        );
        Ok(geometry)
    }

    /// Get the number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over triangles as vertex index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Sum of the triangle areas
    pub fn area(&self) -> f32 {
        self.triangles()
            .map(|[a, b, c]| {
                let a = self.positions[a as usize];
                let b = self.positions[b as usize];
                let c = self.positions[c as usize];
                (b - a).cross(c - a).length() * 0.5
            })
            .sum()
    }

    /// Axis-aligned bounds in XY as `(min, max)`
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let first = self.positions.first()?;
        let init = (Vec2::new(first.x, first.y), Vec2::new(first.x, first.y));
        Some(self.positions.iter().fold(init, |(min, max), p| {
            (
                Vec2::new(min.x.min(p.x), min.y.min(p.y)),
                Vec2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fin::build_fin_shape;
    use crate::params::LogoParams;
    use crate::path::{PathCommand, PathSink};

    const EPSILON: f32 = 1e-5;

    fn polygon(points: &[(f32, f32)]) -> ShapePath {
        let mut path = ShapePath::new();
        path.move_to(points[0].0, points[0].1);
        for &(x, y) in &points[1..] {
            path.line_to(x, y);
        }
        path
    }

    fn square() -> ShapePath {
        polygon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    fn fin(params: &LogoParams) -> ShapePath {
        let mut path = ShapePath::new();
        build_fin_shape(params, &mut path);
        path
    }

    /// Shoelace area of a closed polygon
    fn polygon_area(points: &[Vec2]) -> f32 {
        let n = points.len();
        (0..n)
            .map(|i| points[i].perp_dot(points[(i + 1) % n]))
            .sum::<f32>()
            .abs()
            * 0.5
    }

    /// Outline corners with each curve replaced by its chord
    fn chord_polygon(path: &ShapePath) -> Vec<Vec2> {
        path.commands().iter().map(PathCommand::end_point).collect()
    }

    /// Outline corners with each curve replaced by its control point
    fn control_polygon(path: &ShapePath) -> Vec<Vec2> {
        path.commands()
            .iter()
            .flat_map(|cmd| match *cmd {
                PathCommand::QuadraticCurveTo { control, to } => vec![control, to],
                other => vec![other.end_point()],
            })
            .collect()
    }

    fn assert_faces_z(geometry: &ShapeGeometry) {
        for [a, b, c] in geometry.triangles() {
            let a = geometry.positions[a as usize];
            let b = geometry.positions[b as usize];
            let c = geometry.positions[c as usize];
            assert!((b - a).cross(c - a).z >= 0.0);
        }
    }

    #[test]
    fn test_square() {
        let geometry = ShapeGeometry::from_path(&square(), DEFAULT_TOLERANCE).unwrap();
        assert_eq!(geometry.triangle_count(), 2);
        assert!((geometry.area() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_clockwise_gives_ccw_triangles() {
        let cw = polygon(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        let geometry = ShapeGeometry::from_path(&cw, DEFAULT_TOLERANCE).unwrap();
        assert_faces_z(&geometry);
    }

    #[test]
    fn test_concave() {
        // An L shape: the reflex corner must not produce an outside triangle
        let l_shape = polygon(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ]);
        let geometry = ShapeGeometry::from_path(&l_shape, DEFAULT_TOLERANCE).unwrap();
        assert!((geometry.area() - 3.0).abs() < EPSILON);
        assert_faces_z(&geometry);
    }

    #[test]
    fn test_too_few_points() {
        let line = polygon(&[(0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(
            ShapeGeometry::from_path(&line, DEFAULT_TOLERANCE),
            Err(GeometryError::TooFewPoints(2))
        );
    }

    #[test]
    fn test_zero_area() {
        let flat = polygon(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert_eq!(
            ShapeGeometry::from_path(&flat, DEFAULT_TOLERANCE),
            Err(GeometryError::ZeroArea)
        );
    }

    #[test]
    fn test_non_finite() {
        let path = fin(&LogoParams { width: 0.0, ..LogoParams::WEBXR });
        assert_eq!(
            ShapeGeometry::from_path(&path, DEFAULT_TOLERANCE),
            Err(GeometryError::NotFinite)
        );
    }

    #[test]
    fn test_fin_geometry() {
        let path = fin(&LogoParams::WEBXR);
        let geometry = ShapeGeometry::from_path(&path, DEFAULT_TOLERANCE).unwrap();

        assert!(geometry.triangle_count() >= geometry.vertex_count() - 2);
        assert!(geometry.normals.iter().all(|n| *n == Vec3::Z));
        assert!(geometry.positions.iter().all(|p| p.z == 0.0));
        assert_faces_z(&geometry);

        // Rounded corners sit between their chords and their control points
        let area = geometry.area();
        assert!(area >= polygon_area(&chord_polygon(&path)) - EPSILON);
        assert!(area <= polygon_area(&control_polygon(&path)) + EPSILON);
    }

    #[test]
    fn test_tolerance_refines_curves() {
        let path = fin(&LogoParams::WEBXR);
        let coarse = ShapeGeometry::from_path(&path, 0.05).unwrap();
        let fine = ShapeGeometry::from_path(&path, 0.0001).unwrap();
        assert!(fine.vertex_count() > coarse.vertex_count());
        let chord = polygon_area(&chord_polygon(&path));
        let control = polygon_area(&control_polygon(&path));
        for geometry in [coarse, fine] {
            assert!(geometry.area() >= chord - EPSILON);
            assert!(geometry.area() <= control + EPSILON);
        }
    }

    #[test]
    fn test_sharp_corners() {
        // A zero radius collapses both curves onto their corner points
        for tolerance in [0.1, 0.01, DEFAULT_TOLERANCE, MIN_TOLERANCE] {
            for bottom_indent in [0.0, 0.08] {
                let params = LogoParams {
                    corner_radius: 0.0,
                    bottom_indent,
                    ..LogoParams::WEBXR
                };
                assert!(params.validate().is_ok());

                let path = fin(&params);
                let geometry = ShapeGeometry::from_path(&path, tolerance).unwrap_or_else(|e| {
                    panic!("indent {} tolerance {}: {}", bottom_indent, tolerance, e)
                });
                let expected = polygon_area(&chord_polygon(&path));
                assert!(
                    (geometry.area() - expected).abs() < EPSILON,
                    "area {} != {}",
                    geometry.area(),
                    expected
                );
                assert_faces_z(&geometry);
            }
        }
    }

    #[test]
    fn test_valid_params_tessellate() {
        let radii = [0.0, 0.01, 0.12, 0.25];
        let scales = [0.3, 0.54, 1.0];
        let indents = [0.0, 0.08, 0.3];
        for corner_radius in radii {
            for bottom_scale in scales {
                for bottom_indent in indents {
                    let params = LogoParams {
                        corner_radius,
                        bottom_scale,
                        bottom_indent,
                        ..LogoParams::WEBXR
                    };
                    if params.validate().is_err() {
                        continue;
                    }
                    let path = fin(&params);
                    let geometry = ShapeGeometry::from_path(&path, DEFAULT_TOLERANCE)
                        .unwrap_or_else(|e| panic!("{:?}: {}", params, e));
                    assert!(geometry.area() > 0.0);
                    assert!(geometry.area() <= polygon_area(&control_polygon(&path)) + EPSILON);
                }
            }
        }
    }

    #[test]
    fn test_fin_bounds() {
        let geometry = ShapeGeometry::from_path(&fin(&LogoParams::WEBXR), DEFAULT_TOLERANCE).unwrap();
        let (min, max) = geometry.bounds().unwrap();

        // The centerline is the left edge; the shape stays within half the width
        assert_eq!(min.x, 0.0);
        assert!(max.x <= 0.5);
        // Vertical extent stays within +-height/2
        assert!(min.y >= -0.4 - EPSILON);
        assert!(max.y <= 0.4 + EPSILON);
        assert!((max.y - 0.4).abs() < EPSILON);
    }

    #[test]
    fn test_uvs_match_positions() {
        let geometry = ShapeGeometry::from_path(&square(), DEFAULT_TOLERANCE).unwrap();
        for (uv, p) in geometry.uvs.iter().zip(&geometry.positions) {
            assert_eq!(uv.x, p.x);
            assert_eq!(uv.y, p.y);
        }
    }
}
