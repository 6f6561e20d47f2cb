//! Error types for parameter validation and shape geometry

use std::fmt;

/// Error returned by [`LogoParams::validate`](crate::LogoParams::validate)
#[derive(Debug, Clone, PartialEq)]
pub enum ParamsError {
    /// A field is NaN or infinite
    NotFinite(&'static str),
    /// A field must be greater than zero
    NonPositive(&'static str),
    /// A field is outside the range that keeps the outline simple
    OutOfRange {
        field: &'static str,
        value: f32,
    },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::NotFinite(field) => write!(f, "Logo parameter '{}' is not finite", field),
            ParamsError::NonPositive(field) => {
                write!(f, "Logo parameter '{}' must be positive", field)
            }
            ParamsError::OutOfRange { field, value } => {
                write!(f, "Logo parameter '{}' is out of range: {}", field, value)
            }
        }
    }
}

impl std::error::Error for ParamsError {}

/// Error building flat geometry from an outline path
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The path visits fewer than three points
    TooFewPoints(usize),
    /// A path coordinate is NaN or infinite
    NotFinite,
    /// The filled path covers no area
    ZeroArea,
    /// The tessellator rejected the path
    Tessellation(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::TooFewPoints(n) => {
                write!(f, "Shape path has too few points: {}", n)
            }
            GeometryError::NotFinite => write!(f, "Shape path has a non-finite coordinate"),
            GeometryError::ZeroArea => write!(f, "Shape path encloses no area"),
            GeometryError::Tessellation(msg) => write!(f, "Tessellation failed: {}", msg),
        }
    }
}

impl std::error::Error for GeometryError {}
