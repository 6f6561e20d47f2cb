//! Render error types

use std::fmt;
use xrlogo_core::GeometryError;

/// Errors from GPU setup, logo construction, and frame rendering
#[derive(Debug)]
pub enum RenderError {
    /// The window surface could not be created
    CreateSurface(String),
    /// No adapter compatible with the surface was found
    NoAdapter,
    /// The adapter refused to create a device
    RequestDevice(String),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Fin geometry could not be tessellated
    Geometry(GeometryError),
    /// Shader module or pipeline failed validation
    Shader(String),
    /// A material is missing a uniform the shader reads
    MissingUniform(String),
    /// Rendering was attempted before the depth texture was created
    MissingDepthTexture,
    /// Other surface error
    Other(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::CreateSurface(msg) => write!(f, "Failed to create surface: {}", msg),
            RenderError::NoAdapter => write!(f, "No compatible GPU adapter found"),
            RenderError::RequestDevice(msg) => write!(f, "Failed to create device: {}", msg),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Geometry(err) => write!(f, "Geometry error: {}", err),
            RenderError::Shader(msg) => write!(f, "Shader error: {}", msg),
            RenderError::MissingUniform(name) => write!(f, "Missing uniform '{}'", name),
            RenderError::MissingDepthTexture => {
                write!(f, "Depth texture not created; call ensure_depth_texture first")
            }
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Geometry(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GeometryError> for RenderError {
    fn from(err: GeometryError) -> Self {
        RenderError::Geometry(err)
    }
}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(err: wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Other(format!("{:?}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
        assert_eq!(
            format!("{}", RenderError::MissingUniform("color1".to_string())),
            "Missing uniform 'color1'"
        );
    }

    #[test]
    fn test_geometry_error_source() {
        let err = RenderError::from(GeometryError::ZeroArea);
        assert!(matches!(err, RenderError::Geometry(GeometryError::ZeroArea)));
        assert!(err.source().is_some());
        assert!(RenderError::NoAdapter.source().is_none());
    }

    #[test]
    fn test_surface_error_conversion() {
        assert!(matches!(
            RenderError::from(wgpu::SurfaceError::Lost),
            RenderError::SurfaceLost
        ));
        assert!(matches!(
            RenderError::from(wgpu::SurfaceError::OutOfMemory),
            RenderError::OutOfMemory
        ));
        assert!(matches!(
            RenderError::from(wgpu::SurfaceError::Timeout),
            RenderError::Other(_)
        ));
    }
}
