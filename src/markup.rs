//! SVG document assembly
//!
//! Shapes are built as `svg` crate elements and wrapped in a root `<svg>`
//! with one styled group. Every coordinate and length is an integer,
//! truncated toward zero; the patterns are meant for printing.
//!
//! The legacy layout is the one place markup is formatted by hand. It exists
//! only to reproduce the historical files byte for byte, including their odd
//! whitespace, which no serializer would emit.

use svg::Document;
use svg::node::element::Group;

use crate::types::{Color, ColorDepth};

pub const XML_DECLARATION: &str = "<?xml version=\"1.0\"?>\n";

/// Default stroke and opacity for everything in a scene
pub const GROUP_STYLE: &str = "fill-opacity:1.0; stroke:black; stroke-width:1;";

/// Knobs that change the serialized text without changing the geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Hex digits per color channel
    pub color_depth: ColorDepth,
    /// Emit the historical hand-laid-out markup instead of a serialized
    /// document. Text labels are then written verbatim.
    pub legacy_layout: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color_depth: ColorDepth::Full,
            legacy_layout: false,
        }
    }
}

impl RenderOptions {
    /// Byte-for-byte compatible with the historical generator: `#rgb`
    /// colors, its exact layout, labels unescaped.
    pub fn legacy() -> Self {
        Self {
            color_depth: ColorDepth::Short,
            legacy_layout: true,
        }
    }

    pub fn color(&self, color: Color) -> String {
        color.to_hex(self.color_depth)
    }
}

/// Truncate a coordinate toward zero, like `%d` formatting of a float.
#[inline]
pub fn px(v: f64) -> i64 {
    v as i64
}

/// Root element sized to the canvas, holding the styled group.
pub fn document(width: u32, height: u32, group: Group) -> Document {
    Document::new()
        .set("height", height)
        .set("width", width)
        .add(group.set("style", GROUP_STYLE))
}

pub fn legacy_header(width: u32, height: u32) -> String {
    format!(
        "{XML_DECLARATION}<svg height=\"{height}\" width=\"{width}\" >\n \
         <g style=\"fill-opacity:1.0; stroke:black;\n  stroke-width:1;\">\n"
    )
}

pub const LEGACY_FOOTER: &str = " </g>\n</svg>\n";
