//! Page-sized test pattern generators
//!
//! Each generator lays its pattern out on a [`PageLayout`] and returns the
//! populated scene; writing and viewing it is up to the caller.

use crate::defaults;
use crate::errors::GeometryError;
use crate::log::{debug, warn};
use crate::scene::Scene;
use crate::shapes::{Circle, Line, RadialPattern, Rectangle, Text, ThreeBar, Triangle};
use crate::types::{Color, Point, pt};

/// Spoke counts of the two radial targets, top then bottom
pub const RADIAL_SPOKES: [u32; 2] = [30, 45];
/// Number of three-bar groups on a page
pub const THREE_BAR_STEPS: u32 = 9;

/// Page geometry shared by the generators
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub width: u32,
    pub height: u32,
    /// Space around the border and between patterns
    pub margin: f64,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            width: defaults::PAGE_WIDTH,
            height: defaults::PAGE_HEIGHT,
            margin: defaults::PAGE_MARGIN,
        }
    }
}

impl PageLayout {
    /// Largest radius that fits two targets stacked vertically
    pub fn radial_radius(&self) -> f64 {
        let (w, h, m) = (f64::from(self.width), f64::from(self.height), self.margin);
        ((h - 3.0 * m) / 4.0).min((w - 2.0 * m) / 2.0)
    }

    /// Centers of the upper and lower radial targets
    pub fn radial_origins(&self) -> [Point; 2] {
        let r = self.radial_radius();
        let cx = f64::from(self.width) / 2.0;
        [pt(cx, r + self.margin), pt(cx, 3.0 * r + 2.0 * self.margin)]
    }
}

/// Two spoke targets (30 and 45 spokes) stacked on one page.
pub fn radial_scene(page: &PageLayout) -> Result<Scene, GeometryError> {
    let mut scene = Scene::new("radialPattern", page.width, page.height)?;
    let r = page.radial_radius();
    let origins = page.radial_origins();
    debug!(radius = r, ?origins, "radial layout");

    for (spokes, origin) in RADIAL_SPOKES.into_iter().zip(origins) {
        scene.add(RadialPattern::new(spokes, r, origin)?);
    }
    Ok(scene)
}

/// Nine three-bar groups down the left edge, pitch growing by `2i` at
/// step `i` and each group starting four pitches below the previous one.
pub fn three_bar_scene(page: &PageLayout) -> Result<Scene, GeometryError> {
    let mut scene = Scene::new("3-bar-pattern-test", page.width, page.height)?;
    let inset = 2.0 * page.margin;
    let mut pitch = 1.0;
    let mut y = inset;

    for i in 1..=THREE_BAR_STEPS {
        let bars = ThreeBar::new(pitch, pt(inset, y))?;
        debug!(step = i, pitch, y, "three-bar");
        if bars.bottom() > f64::from(page.height) {
            warn!(step = i, bottom = bars.bottom(), page_height = page.height, "three-bar runs off the page");
        }
        scene.add(bars);
        y += 4.0 * pitch;
        pitch += 2.0 * f64::from(i);
    }
    Ok(scene)
}

/// One of every primitive, for eyeballing the renderer.
pub fn sampler_scene() -> Result<Scene, GeometryError> {
    let mut scene = Scene::new("test", defaults::SCENE_WIDTH, defaults::SCENE_HEIGHT)?;
    let hub = pt(200.0, 200.0);

    scene.add(Rectangle::new(pt(100.0, 100.0), 200.0, 200.0, Color::CYAN)?);
    for end in [pt(200.0, 300.0), pt(300.0, 200.0), pt(100.0, 200.0), pt(200.0, 100.0)] {
        scene.add(Line::new(hub, end)?);
    }
    let dots = [
        (hub, Color::BLUE),
        (pt(200.0, 300.0), Color::GREEN),
        (pt(300.0, 200.0), Color::RED),
        (pt(100.0, 200.0), Color::YELLOW),
        (pt(200.0, 100.0), Color::MAGENTA),
    ];
    for (center, color) in dots {
        scene.add(Circle::new(center, 30.0, color)?);
    }
    scene.add(Text::new(pt(50.0, 50.0), "Testing SVG")?);
    scene.add(Triangle::new(
        pt(350.0, 350.0),
        pt(350.0, 395.0),
        pt(395.0, 350.0),
        Color::BLACK,
    )?);
    Ok(scene)
}

/// A single 25-spoke target on the default canvas.
pub fn sampler_radial_scene() -> Result<Scene, GeometryError> {
    let mut scene = Scene::new("testRadial", defaults::SCENE_WIDTH, defaults::SCENE_HEIGHT)?;
    scene.add(RadialPattern::new(25, 200.0, pt(200.0, 200.0))?);
    Ok(scene)
}

/// Three-bar groups with geometrically growing pitch (`pitch *= 1.1·i`).
pub fn sampler_three_bar_scene(page: &PageLayout) -> Result<Scene, GeometryError> {
    let mut scene = Scene::new("testThreeBar", page.width, page.height)?;
    let mut pitch = 1.0;
    let mut y = 20.0;
    for i in 1..=THREE_BAR_STEPS {
        scene.add(ThreeBar::new(pitch, pt(20.0, y))?);
        y += 3.0 * pitch;
        pitch *= f64::from(i) * 1.1;
    }
    Ok(scene)
}
