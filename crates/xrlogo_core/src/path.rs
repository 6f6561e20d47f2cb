//! 2D outline paths
//!
//! [`PathSink`] is the path-builder capability a graphics host hands to the
//! outline builder. [`ShapePath`] is the plain recording implementation: it
//! stores the commands and converts them into a [`lyon::path::Path`] for
//! tessellation.

use lyon::math::{point, Point};
use lyon::path::Path;
use xrlogo_math::Vec2;

/// A single path-construction command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Start a sub-path at the given point
    MoveTo(Vec2),
    /// Straight segment to the given point
    LineTo(Vec2),
    /// Quadratic Bézier to `to`, pulled towards `control`
    QuadraticCurveTo { control: Vec2, to: Vec2 },
}

impl PathCommand {
    /// The point the pen ends up at after this command
    #[inline]
    pub fn end_point(&self) -> Vec2 {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
            PathCommand::QuadraticCurveTo { to, .. } => to,
        }
    }
}

/// Receiver for path-construction commands
pub trait PathSink {
    /// Move the pen without drawing
    fn move_to(&mut self, x: f32, y: f32);

    /// Draw a straight line from the pen position
    fn line_to(&mut self, x: f32, y: f32);

    /// Draw a quadratic curve from the pen position
    fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32);
}

/// A recorded outline path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapePath {
    commands: Vec<PathCommand>,
}

impl ShapePath {
    /// Create an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands in drawing order
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Number of recorded commands
    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if nothing has been recorded
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Where the path starts (the pen starts at the origin when the first
    /// command is not a move)
    pub fn start_point(&self) -> Option<Vec2> {
        self.commands.first().map(|cmd| match cmd {
            PathCommand::MoveTo(p) => *p,
            _ => Vec2::ZERO,
        })
    }

    /// Where the pen is after the last command
    pub fn end_point(&self) -> Option<Vec2> {
        self.commands.last().map(PathCommand::end_point)
    }

    /// Check that the last command ends exactly on the start point
    pub fn is_closed(&self) -> bool {
        match (self.start_point(), self.end_point()) {
            (Some(start), Some(end)) => self.commands.len() > 1 && start == end,
            _ => false,
        }
    }

    /// Number of points the pen visits, counting the implicit origin when
    /// the first command is not a move
    pub fn point_count(&self) -> usize {
        match self.commands.first() {
            Some(PathCommand::MoveTo(_)) | None => self.commands.len(),
            Some(_) => self.commands.len() + 1,
        }
    }

    /// Check that every recorded coordinate is finite
    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(|cmd| match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => is_finite(p),
            PathCommand::QuadraticCurveTo { control, to } => is_finite(control) && is_finite(to),
        })
    }

    /// Build a lyon path from the recorded commands
    ///
    /// Every sub-path is closed. A second move starts a new sub-path.
    pub fn to_path(&self) -> Path {
        let mut builder = Path::builder();
        let mut open = false;

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    if open {
                        builder.close();
                    }
                    builder.begin(to_point(p));
                    open = true;
                }
                PathCommand::LineTo(p) => {
                    if !open {
                        builder.begin(point(0.0, 0.0));
                        open = true;
                    }
                    builder.line_to(to_point(p));
                }
                PathCommand::QuadraticCurveTo { control, to } => {
                    if !open {
                        builder.begin(point(0.0, 0.0));
                        open = true;
                    }
                    builder.quadratic_bezier_to(to_point(control), to_point(to));
                }
            }
        }

        if open {
            builder.close();
        }
        builder.build()
    }
}

impl PathSink for ShapePath {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo(Vec2::new(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo(Vec2::new(x, y)));
    }

    fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::QuadraticCurveTo {
            control: Vec2::new(cpx, cpy),
            to: Vec2::new(x, y),
        });
    }
}

#[inline]
fn to_point(p: Vec2) -> Point {
    point(p.x, p.y)
}

#[inline]
fn is_finite(p: Vec2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
