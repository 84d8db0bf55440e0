//! Default sizes and settings (canvas units, 100 per inch on a printed page)

/// US letter portrait width
pub const PAGE_WIDTH: u32 = 850;
/// US letter portrait height
pub const PAGE_HEIGHT: u32 = 1100;
/// Space around the page border and between patterns
pub const PAGE_MARGIN: f64 = 10.0;

pub const SCENE_NAME: &str = "svg";
pub const SCENE_WIDTH: u32 = 400;
pub const SCENE_HEIGHT: u32 = 400;

pub const TEXT_SIZE: f64 = 24.0;
pub const SPOKE_LABEL_SIZE: f64 = 12.0;
/// Baseline of the spoke label, in multiples of its font size below the top
pub const SPOKE_LABEL_DROP: f64 = 1.25;

/// Width and height of a three-bar bar, in multiples of the pitch
pub const BAR_WIDTH: f64 = 2.5;
pub const BAR_HEIGHT: f64 = 0.5;

/// ImageMagick's viewer
pub const VIEWER: &str = "display";
