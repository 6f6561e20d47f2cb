//! Fin colors and placement
//!
//! Each of the four fins has a fixed role that decides its rotation around
//! the vertical axis and which of the two red gradients it uses. The
//! palettes alternate, so opposite fins (180° apart) share a palette.

use std::f32::consts::PI;
use xrlogo_math::Color;

/// Rotation applied to the whole logo group around Y
pub const GROUP_ROTATION_Y: f32 = PI * 0.5;

/// Number of fins in the logo
pub const FIN_COUNT: usize = 4;

/// Gradient colors for one fin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPair {
    /// Bottom color (gradient factor 0)
    pub color1: Color,
    /// Top color (gradient factor 1)
    pub color2: Color,
}

impl ColorPair {
    /// Create a pair from packed `0xRRGGBB` values
    pub fn from_hex(color1: u32, color2: u32) -> Self {
        Self {
            color1: Color::from_hex(color1),
            color2: Color::from_hex(color2),
        }
    }
}

/// The two gradients used by the logo
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Palette {
    /// Dark red to bright red
    A,
    /// Bright red to medium red
    B,
}

impl Palette {
    /// Packed `(color1, color2)` values
    pub const fn hex(self) -> (u32, u32) {
        match self {
            Palette::A => (0xAE100F, 0xD40002),
            Palette::B => (0xFD0003, 0xD20002),
        }
    }

    /// Unpacked colors
    pub fn colors(self) -> ColorPair {
        let (color1, color2) = self.hex();
        ColorPair::from_hex(color1, color2)
    }
}

/// Position of a fin in the logo, in assembly order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FinRole {
    RearRight,
    RearLeft,
    FrontLeft,
    FrontRight,
}

impl FinRole {
    /// All roles in assembly order
    pub const ALL: [FinRole; FIN_COUNT] = [
        FinRole::RearRight,
        FinRole::RearLeft,
        FinRole::FrontLeft,
        FinRole::FrontRight,
    ];

    /// Index in assembly order
    pub const fn index(self) -> usize {
        match self {
            FinRole::RearRight => 0,
            FinRole::RearLeft => 1,
            FinRole::FrontLeft => 2,
            FinRole::FrontRight => 3,
        }
    }

    /// Rotation around Y in radians: 45°, 135°, 225°, 315°
    pub fn angle(self) -> f32 {
        match self {
            FinRole::RearRight => PI * 0.25,
            FinRole::RearLeft => PI * 0.75,
            FinRole::FrontLeft => PI * 1.25,
            FinRole::FrontRight => PI * 1.75,
        }
    }

    /// Gradient used by this fin; palettes alternate by index
    pub const fn palette(self) -> Palette {
        if self.index() % 2 == 0 {
            Palette::A
        } else {
            Palette::B
        }
    }

    /// Human-readable name for labels and logs
    pub const fn name(self) -> &'static str {
        match self {
            FinRole::RearRight => "rear right",
            FinRole::RearLeft => "rear left",
            FinRole::FrontLeft => "front left",
            FinRole::FrontRight => "front right",
        }
    }
}
