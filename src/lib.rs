//! Optical test patterns as SVG.
//!
//! Build a [`Scene`], add [`Drawable`] shapes to it, then serialize or write
//! it. Two ready-made page layouts live in [`patterns`]: stacked radial spoke
//! targets and a run of three-bar resolution targets.
//!
//! ```
//! use testpattern::{Color, RadialPattern, Scene, ThreeBar, pt};
//!
//! let mut scene = Scene::new("demo", 200, 200)?;
//! scene.add(RadialPattern::new(12, 80.0, pt(100.0, 100.0))?);
//! scene.add(ThreeBar::new(4.0, pt(5.0, 5.0))?.with_color(Color::RED));
//! let svg = scene.serialize();
//! assert!(svg.contains("12 Spokes"));
//! # Ok::<(), testpattern::GeometryError>(())
//! ```

pub mod defaults;
pub mod errors;
pub mod log;
pub mod markup;
pub mod patterns;
pub mod scene;
pub mod shapes;
pub mod types;

pub use errors::{GeometryError, SceneError};
pub use patterns::PageLayout;
pub use scene::{Scene, Viewer};
pub use shapes::{Circle, Drawable, Line, RadialPattern, Rectangle, Render, Text, ThreeBar, Triangle};
pub use markup::RenderOptions;
pub use types::{Color, ColorDepth, Point, pt};
