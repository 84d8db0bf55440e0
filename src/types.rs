//! Geometry and color primitives.
//!
//! Coordinates are SVG user units with y growing downward. Numeric values that
//! come from callers go through the `require_*` checks before they are stored.

use std::fmt;

use glam::DVec2;

use crate::errors::GeometryError;

/// A 2D point in canvas units (y axis grows downward)
pub type Point = DVec2;

/// Shorthand constructor for a [`Point`]
#[inline]
pub const fn pt(x: f64, y: f64) -> Point {
    DVec2::new(x, y)
}

/// How many hex digits per channel a color is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorDepth {
    /// `#rrggbb`, lossless
    #[default]
    Full,
    /// `#rgb` with each channel divided by 16 (legacy output)
    Short,
}

/// An 8-bit-per-channel RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Hex notation at the requested depth, e.g. `#ff0000` or `#f00`
    pub fn to_hex(self, depth: ColorDepth) -> String {
        match depth {
            ColorDepth::Full => format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
            ColorDepth::Short => format!("#{:x}{:x}{:x}", self.r / 16, self.g / 16, self.b / 16),
        }
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::rgb(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex(ColorDepth::Full))
    }
}

/// Reject NaN and infinities
#[inline]
pub fn require_finite(what: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { what })
    }
}

/// Finite and strictly greater than zero
#[inline]
pub fn require_positive(what: &'static str, value: f64) -> Result<f64, GeometryError> {
    let value = require_finite(what, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::NonPositive { what, value })
    }
}

/// Finite and zero or greater
#[inline]
pub fn require_non_negative(what: &'static str, value: f64) -> Result<f64, GeometryError> {
    let value = require_finite(what, value)?;
    if value < 0.0 {
        Err(GeometryError::Negative { what, value })
    } else {
        Ok(value)
    }
}

/// Both coordinates finite
#[inline]
pub fn require_point(what: &'static str, p: Point) -> Result<Point, GeometryError> {
    if p.is_finite() {
        Ok(p)
    } else {
        Err(GeometryError::NonFinite { what })
    }
}
