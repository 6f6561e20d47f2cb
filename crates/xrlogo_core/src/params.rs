//! Logo shape parameters
//!
//! The five scalars that fully determine a fin's outline. They are passed
//! explicitly to the builder instead of living in module-level constants.

use serde::{Serialize, Deserialize};
use crate::error::ParamsError;

/// Dimensions of a single logo fin
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoParams {
    /// Overall width of the fin pair (a fin spans half of it)
    pub width: f32,
    /// Overall height
    pub height: f32,
    /// Radius used to round the outer corners
    pub corner_radius: f32,
    /// Scale applied to the bottom edge relative to the top
    pub bottom_scale: f32,
    /// How far the bottom of the centerline is pulled up
    pub bottom_indent: f32,
}

impl LogoParams {
    /// The WebXR logo proportions
    pub const WEBXR: Self = Self {
        width: 1.0,
        height: 0.8,
        corner_radius: 0.12,
        bottom_scale: 0.54,
        bottom_indent: 0.08,
    };

    /// Half of the width
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    /// Half of the height
    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    /// Check that the parameters describe a non-degenerate outline
    ///
    /// The corner radius has to fit inside both the scaled bottom half-width
    /// and the half-height, and the indent has to stay below the top edge.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("corner_radius", self.corner_radius),
            ("bottom_scale", self.bottom_scale),
            ("bottom_indent", self.bottom_indent),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ParamsError::NotFinite(name));
            }
        }

        if self.width <= 0.0 {
            return Err(ParamsError::NonPositive("width"));
        }
        if self.height <= 0.0 {
            return Err(ParamsError::NonPositive("height"));
        }
        if self.bottom_scale <= 0.0 || self.bottom_scale > 1.0 {
            return Err(ParamsError::OutOfRange {
                field: "bottom_scale",
                value: self.bottom_scale,
            });
        }
        if self.corner_radius < 0.0
            || self.corner_radius >= self.half_width() * self.bottom_scale
            || self.corner_radius >= self.half_height()
        {
            return Err(ParamsError::OutOfRange {
                field: "corner_radius",
                value: self.corner_radius,
            });
        }
        if self.bottom_indent < 0.0 || self.bottom_indent >= self.height {
            return Err(ParamsError::OutOfRange {
                field: "bottom_indent",
                value: self.bottom_indent,
            });
        }

        Ok(())
    }
}

impl Default for LogoParams {
    fn default() -> Self {
        Self::WEBXR
    }
}
