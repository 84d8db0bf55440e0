//! Error types with diagnostics using miette
//!
//! Geometry is validated when a shape or scene is constructed, so by the time
//! anything is serialized the only thing left that can fail is the file I/O.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Geometry Errors
// ============================================================================

/// Rejected shape or canvas parameters
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("{what} is not a finite number")]
    #[diagnostic(code(testpattern::geometry::non_finite))]
    NonFinite { what: &'static str },

    #[error("{what} must be positive, got {value}")]
    #[diagnostic(code(testpattern::geometry::non_positive))]
    NonPositive { what: &'static str, value: f64 },

    #[error("{what} must not be negative, got {value}")]
    #[diagnostic(code(testpattern::geometry::negative))]
    Negative { what: &'static str, value: f64 },

    #[error("a radial pattern needs at least one spoke")]
    #[diagnostic(code(testpattern::geometry::no_spokes))]
    NoSpokes,

    #[error("canvas must have a positive size, got {width}x{height}")]
    #[diagnostic(code(testpattern::geometry::empty_canvas))]
    EmptyCanvas { width: u32, height: u32 },
}

// ============================================================================
// Scene Errors
// ============================================================================

/// Errors raised while writing or displaying a scene
#[derive(Error, Diagnostic, Debug)]
pub enum SceneError {
    #[error("failed to write {}", .path.display())]
    #[diagnostic(
        code(testpattern::scene::io),
        help("check that the directory exists and is writable")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("scene has not been written to a file yet")]
    #[diagnostic(
        code(testpattern::scene::not_written),
        help("call `write_svg` before `display`")
    )]
    NotWritten,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Geometry(#[from] GeometryError),
}
