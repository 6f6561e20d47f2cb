//! Fin outline construction
//!
//! A fin is a rounded wedge: its right edge leans in towards the bottom,
//! its left edge is the vertical centerline of the logo. The outline is
//! drawn as seven path commands:
//!
//! ```text
//!   0,hh ___________ (hw - r, hh)
//!       |           \  <- quadratic corner around (hw, hh)
//!       |            |
//!       |            |  right edge, leaning in
//!       |           /
//!  0,-hh+indent    /
//!        \____    (  <- quadratic corner around (hw * bottom_scale, -hh)
//! ```

use xrlogo_math::{lerp, Vec2};
use crate::params::LogoParams;
use crate::path::PathSink;

/// Values derived from [`LogoParams`] that position the fin's control points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FinOutline {
    /// Corner radius copied from the params
    pub corner_radius: f32,
    /// Bottom-edge scale copied from the params
    pub bottom_scale: f32,
    /// Bottom indent copied from the params
    pub bottom_indent: f32,
    /// Half-width
    pub hw: f32,
    /// Half-height
    pub hh: f32,
    /// Half-width where the top corner rounding starts
    pub hw_r: f32,
    /// Half-width where the bottom corner rounding ends
    pub hw_br: f32,
    /// Half-height where the bottom edge meets the bottom corner
    pub hh_r: f32,
}

impl FinOutline {
    /// Derive the outline values from shape parameters
    pub fn new(params: &LogoParams) -> Self {
        let hw = params.width / 2.0;
        let hh = params.height / 2.0;

        // Interpolation ratios for the corner rounding
        let rhr = params.corner_radius / params.height;
        let rbwr = params.corner_radius / (params.width * params.bottom_scale);

        Self {
            corner_radius: params.corner_radius,
            bottom_scale: params.bottom_scale,
            bottom_indent: params.bottom_indent,
            hw,
            hh,
            hw_r: lerp(hw, hw * params.bottom_scale, rhr),
            hw_br: lerp(hw * params.bottom_scale, hw, rhr),
            hh_r: lerp(hh, hh - params.bottom_indent, rbwr),
        }
    }

    /// First point of the outline, also its last
    #[inline]
    pub fn start(&self) -> Vec2 {
        Vec2::new(self.hw_br, -self.hh + self.corner_radius)
    }

    /// Draw the seven outline commands into a path builder
    pub fn trace<S: PathSink + ?Sized>(&self, sink: &mut S) {
        let r = self.corner_radius;
        let start = self.start();

        sink.move_to(start.x, start.y);
        sink.line_to(self.hw_r, self.hh - r);
        sink.quadratic_curve_to(self.hw, self.hh, self.hw - r, self.hh);
        sink.line_to(0.0, self.hh);
        sink.line_to(0.0, -self.hh + self.bottom_indent);
        sink.line_to((self.hw - r) * self.bottom_scale, -self.hh_r);
        sink.quadratic_curve_to(self.hw * self.bottom_scale, -self.hh, start.x, start.y);
    }
}

/// Populate a path builder with a single fin of the logo
///
/// Returns the builder so the call can be chained into geometry creation.
pub fn build_fin_shape<'a, S: PathSink + ?Sized>(params: &LogoParams, sink: &'a mut S) -> &'a mut S {
    FinOutline::new(params).trace(sink);
    sink
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{PathCommand, ShapePath};

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn webxr_path() -> ShapePath {
        let mut path = ShapePath::new();
        build_fin_shape(&LogoParams::WEBXR, &mut path);
        path
    }

    #[test]
    fn test_seven_commands_in_order() {
        let path = webxr_path();
        let kinds: Vec<&str> = path
            .commands()
            .iter()
            .map(|cmd| match cmd {
                PathCommand::MoveTo(_) => "move",
                PathCommand::LineTo(_) => "line",
                PathCommand::QuadraticCurveTo { .. } => "quad",
            })
            .collect();
        assert_eq!(kinds, ["move", "line", "quad", "line", "line", "line", "quad"]);
    }

    #[test]
    fn test_first_point() {
        // x = lerp(0.54 * 0.5, 0.5, 0.12 / 0.8), y = -0.4 + 0.12
        let path = webxr_path();
        let start = path.start_point().unwrap();
        assert!(approx_eq(start.x, 0.3045), "x = {}", start.x);
        assert!(approx_eq(start.y, -0.28), "y = {}", start.y);
    }

    #[test]
    fn test_outline_is_closed() {
        let path = webxr_path();
        assert!(path.is_closed());
        assert_eq!(path.start_point(), path.end_point());
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(webxr_path(), webxr_path());
        assert_eq!(FinOutline::new(&LogoParams::WEBXR), FinOutline::new(&LogoParams::WEBXR));
    }

    #[test]
    fn test_derived_values() {
        let outline = FinOutline::new(&LogoParams::WEBXR);
        assert!(approx_eq(outline.hw, 0.5));
        assert!(approx_eq(outline.hh, 0.4));
        assert!(approx_eq(outline.hw_r, 0.4655));
        assert!(approx_eq(outline.hw_br, 0.3045));
        // rbwr = 0.12 / 0.54
        assert!(approx_eq(outline.hh_r, 0.4 - 0.08 * (0.12 / 0.54)));
    }

    #[test]
    fn test_control_points() {
        let path = webxr_path();
        let cmds = path.commands();

        assert_eq!(cmds[3], PathCommand::LineTo(Vec2::new(0.0, 0.4)));

        match cmds[2] {
            PathCommand::QuadraticCurveTo { control, to } => {
                assert!(approx_eq(control.x, 0.5) && approx_eq(control.y, 0.4));
                assert!(approx_eq(to.x, 0.38) && approx_eq(to.y, 0.4));
            }
            other => panic!("Expected top corner curve, got {:?}", other),
        }

        match cmds[4] {
            PathCommand::LineTo(p) => {
                assert_eq!(p.x, 0.0);
                assert!(approx_eq(p.y, -0.32));
            }
            other => panic!("Expected centerline, got {:?}", other),
        }

        match cmds[5] {
            PathCommand::LineTo(p) => assert!(approx_eq(p.x, 0.38 * 0.54)),
            other => panic!("Expected bottom edge, got {:?}", other),
        }

        match cmds[6] {
            PathCommand::QuadraticCurveTo { control, .. } => {
                assert!(approx_eq(control.x, 0.27) && approx_eq(control.y, -0.4));
            }
            other => panic!("Expected bottom corner curve, got {:?}", other),
        }
    }

    #[test]
    fn test_follows_params() {
        let wide = LogoParams { width: 2.0, ..LogoParams::WEBXR };
        let narrow = FinOutline::new(&LogoParams::WEBXR);
        let wide = FinOutline::new(&wide);
        assert!(wide.hw > narrow.hw);
        assert!(wide.start().x > narrow.start().x);
    }
}
