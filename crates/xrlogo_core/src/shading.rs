//! Logo shader material
//!
//! [`logo_shader`] describes the material each fin gets: a WGSL program, the
//! two gradient colors as named uniforms, and double-sided rendering. The
//! fragment math is mirrored on the CPU by [`color_mix`], [`frontness_alpha`]
//! and [`shade`].

use xrlogo_math::{Color, Vec3};
use crate::palette::ColorPair;
use crate::params::LogoParams;

/// WGSL template for the fin shader
pub const LOGO_SHADER_TEMPLATE: &str = include_str!("shaders/logo.wgsl");

/// Placeholder in [`LOGO_SHADER_TEMPLATE`] replaced by the fin height
pub const LOGO_HEIGHT_PLACEHOLDER: &str = "{{LOGO_HEIGHT}}";

/// Vertex stage entry point
pub const VERTEX_ENTRY: &str = "vs_main";

/// Fragment stage entry point
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Uniform holding the bottom gradient color
pub const COLOR1_UNIFORM: &str = "color1";

/// Uniform holding the top gradient color
pub const COLOR2_UNIFORM: &str = "color2";

/// Direction the fins fade towards when facing it
pub const BACK_DIR: Vec3 = Vec3::new(-1.0, 0.0, 0.0);

/// Lowest alpha a fin can have
pub const MIN_ALPHA: f32 = 0.75;

/// Highest alpha a fin can have
pub const MAX_ALPHA: f32 = 1.0;

/// Which faces of a surface are rendered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Side {
    #[default]
    Front,
    Back,
    Double,
}

/// A named color uniform
#[derive(Clone, Debug, PartialEq)]
pub struct Uniform {
    pub name: String,
    pub value: Color,
}

impl Uniform {
    /// Create a color uniform
    pub fn color(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            value: color,
        }
    }
}

/// Description of a shader material for a host to compile
#[derive(Clone, Debug, PartialEq)]
pub struct ShaderMaterial {
    /// Debug label
    pub label: String,
    /// WGSL module containing both stages
    pub source: String,
    /// Vertex entry point
    pub vertex_entry: &'static str,
    /// Fragment entry point
    pub fragment_entry: &'static str,
    /// Named uniform values
    pub uniforms: Vec<Uniform>,
    /// Face culling mode
    pub side: Side,
    /// Whether fragment alpha is blended
    pub transparent: bool,
}

impl ShaderMaterial {
    /// Look up a color uniform by name
    pub fn color_uniform(&self, name: &str) -> Option<Color> {
        self.uniforms.iter().find(|u| u.name == name).map(|u| u.value)
    }
}

/// WGSL source with the fin height baked in
pub fn logo_shader_source(params: &LogoParams) -> String {
    // Debug formatting keeps a decimal point, which WGSL needs for an f32 literal
    LOGO_SHADER_TEMPLATE.replace(LOGO_HEIGHT_PLACEHOLDER, &format!("{:?}", params.height))
}

/// Create the gradient material for one fin
pub fn logo_shader(params: &LogoParams, colors: ColorPair) -> ShaderMaterial {
    ShaderMaterial {
        label: "Logo Fin Material".to_string(),
        source: logo_shader_source(params),
        vertex_entry: VERTEX_ENTRY,
        fragment_entry: FRAGMENT_ENTRY,
        uniforms: vec![
            Uniform::color(COLOR1_UNIFORM, colors.color1),
            Uniform::color(COLOR2_UNIFORM, colors.color2),
        ],
        side: Side::Double,
        transparent: true,
    }
}

/// Gradient factor: 0 at the bottom edge, 1 at the top edge
#[inline]
pub fn color_mix(local_y: f32, height: f32) -> f32 {
    (local_y + height * 0.5) / height
}

/// Opacity from the view-space normal, always within [0.75, 1.0]
///
/// A NaN normal yields the minimum alpha.
#[inline]
pub fn frontness_alpha(view_normal: Vec3) -> f32 {
    let frontness = view_normal.dot(BACK_DIR) + MIN_ALPHA;
    if frontness.is_nan() {
        return MIN_ALPHA;
    }
    frontness.clamp(MIN_ALPHA, MAX_ALPHA)
}

/// CPU evaluation of the fragment stage, returning RGBA
pub fn shade(colors: ColorPair, local_y: f32, view_normal: Vec3, height: f32) -> [f32; 4] {
    let t = color_mix(local_y, height);
    colors.color1.mix(colors.color2, t).with_alpha(frontness_alpha(view_normal))
}
