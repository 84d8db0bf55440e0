//! Drawable shapes
//!
//! Each shape is its own type that knows how to validate its geometry and
//! render itself to SVG fragments. [`Drawable`] is the closed set of shapes a
//! [`Scene`](crate::Scene) can hold; adding a shape means adding a variant.

use std::f64::consts::PI;

use enum_dispatch::enum_dispatch;
use glam::dvec2;
use svg::Node;
use svg::node::element::{self, Element};

use crate::defaults;
use crate::errors::GeometryError;
use crate::markup::{RenderOptions, px};
use crate::types::{Color, Point, require_non_negative, require_point, require_positive};

/// Common behavior for all drawables
#[enum_dispatch]
pub trait Render {
    /// Short name used in logs
    fn kind(&self) -> &'static str;

    /// Elements for the serialized document, in paint order
    fn nodes(&self, options: &RenderOptions) -> Vec<Box<dyn Node>>;

    /// Hand-laid-out markup matching the historical generator
    fn legacy_fragments(&self, options: &RenderOptions) -> Vec<String>;

    /// Render to markup fragments, one per element
    fn render_with(&self, options: &RenderOptions) -> Vec<String> {
        if options.legacy_layout {
            self.legacy_fragments(options)
        } else {
            self.nodes(options).iter().map(|node| node.to_string()).collect()
        }
    }

    /// Render with the default options (full-depth colors)
    fn render(&self) -> Vec<String> {
        self.render_with(&RenderOptions::default())
    }
}

/// Anything a scene can paint
#[enum_dispatch(Render)]
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Line,
    Circle,
    Rectangle,
    Triangle,
    Text,
    RadialPattern,
    ThreeBar,
}

// ============================================================================
// Primitives
// ============================================================================

/// A straight stroked segment
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Result<Self, GeometryError> {
        Ok(Self {
            start: require_point("line start", start)?,
            end: require_point("line end", end)?,
        })
    }
}

impl Render for Line {
    fn kind(&self) -> &'static str {
        "line"
    }

    fn nodes(&self, _options: &RenderOptions) -> Vec<Box<dyn Node>> {
        vec![
            element::Line::new()
                .set("x1", px(self.start.x))
                .set("y1", px(self.start.y))
                .set("x2", px(self.end.x))
                .set("y2", px(self.end.y))
                .into(),
        ]
    }

    fn legacy_fragments(&self, _options: &RenderOptions) -> Vec<String> {
        vec![format!(
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" />\n",
            px(self.start.x),
            px(self.start.y),
            px(self.end.x),
            px(self.end.y)
        )]
    }
}

/// A filled circle
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
    color: Color,
}

impl Circle {
    pub fn new(center: Point, radius: f64, color: Color) -> Result<Self, GeometryError> {
        Ok(Self {
            center: require_point("circle center", center)?,
            radius: require_positive("circle radius", radius)?,
            color,
        })
    }
}

impl Render for Circle {
    fn kind(&self) -> &'static str {
        "circle"
    }

    fn nodes(&self, options: &RenderOptions) -> Vec<Box<dyn Node>> {
        vec![
            element::Circle::new()
                .set("cx", px(self.center.x))
                .set("cy", px(self.center.y))
                .set("r", px(self.radius))
                .set("fill", options.color(self.color))
                .into(),
        ]
    }

    fn legacy_fragments(&self, options: &RenderOptions) -> Vec<String> {
        vec![format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\"\n    style=\"fill:{};\"  />\n",
            px(self.center.x),
            px(self.center.y),
            px(self.radius),
            options.color(self.color)
        )]
    }
}

/// A filled axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    origin: Point,
    height: f64,
    width: f64,
    color: Color,
}

impl Rectangle {
    pub fn new(origin: Point, height: f64, width: f64, color: Color) -> Result<Self, GeometryError> {
        Ok(Self {
            origin: require_point("rectangle origin", origin)?,
            height: require_non_negative("rectangle height", height)?,
            width: require_non_negative("rectangle width", width)?,
            color,
        })
    }
}

impl Render for Rectangle {
    fn kind(&self) -> &'static str {
        "rectangle"
    }

    fn nodes(&self, options: &RenderOptions) -> Vec<Box<dyn Node>> {
        vec![
            element::Rectangle::new()
                .set("x", px(self.origin.x))
                .set("y", px(self.origin.y))
                .set("height", px(self.height))
                .set("width", px(self.width))
                .set("fill", options.color(self.color))
                .into(),
        ]
    }

    fn legacy_fragments(&self, options: &RenderOptions) -> Vec<String> {
        vec![format!(
            "  <rect x=\"{}\" y=\"{}\" height=\"{}\"\n    width=\"{}\" style=\"fill:{};\" />\n",
            px(self.origin.x),
            px(self.origin.y),
            px(self.height),
            px(self.width),
            options.color(self.color)
        )]
    }
}

/// A filled polygon through three corners
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    corners: [Point; 3],
    color: Color,
}

impl Triangle {
    pub fn new(c1: Point, c2: Point, c3: Point, color: Color) -> Result<Self, GeometryError> {
        Ok(Self {
            corners: [
                require_point("triangle corner", c1)?,
                require_point("triangle corner", c2)?,
                require_point("triangle corner", c3)?,
            ],
            color,
        })
    }
}

impl Render for Triangle {
    fn kind(&self) -> &'static str {
        "triangle"
    }

    fn nodes(&self, options: &RenderOptions) -> Vec<Box<dyn Node>> {
        vec![
            element::Polygon::new()
                .set("points", points(&self.corners))
                .set("fill", options.color(self.color))
                .into(),
        ]
    }

    fn legacy_fragments(&self, options: &RenderOptions) -> Vec<String> {
        vec![format!(
            "  <polygon points=\"{}\" fill=\"{}\" />\n",
            points(&self.corners),
            options.color(self.color)
        )]
    }
}

/// A text label anchored at its baseline start
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    origin: Point,
    text: String,
    size: f64,
}

impl Text {
    /// A label in the default 24px font size
    pub fn new(origin: Point, text: impl Into<String>) -> Result<Self, GeometryError> {
        Self::with_size(origin, text, defaults::TEXT_SIZE)
    }

    pub fn with_size(
        origin: Point,
        text: impl Into<String>,
        size: f64,
    ) -> Result<Self, GeometryError> {
        Ok(Self {
            origin: require_point("text origin", origin)?,
            text: text.into(),
            size: require_positive("font size", size)?,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Render for Text {
    fn kind(&self) -> &'static str {
        "text"
    }

    fn nodes(&self, _options: &RenderOptions) -> Vec<Box<dyn Node>> {
        vec![text_node(self.origin, self.size, &self.text).into()]
    }

    fn legacy_fragments(&self, _options: &RenderOptions) -> Vec<String> {
        vec![legacy_text(self.origin, self.size, &self.text, "")]
    }
}

/// `<text>` element; the content is escaped by `svg::node::Text`
fn text_node(origin: Point, size: f64, content: &str) -> Element {
    let mut text = Element::new("text");
    text.assign("x", px(origin.x));
    text.assign("y", px(origin.y));
    text.assign("font-size", px(size));
    text.append(svg::node::Text::new(content));
    text
}

/// Space-separated `x,y` pairs, truncated
fn points(corners: &[Point]) -> String {
    corners
        .iter()
        .map(|p| format!("{},{}", px(p.x), px(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn legacy_text(origin: Point, size: f64, content: &str, lead: &str) -> String {
    format!(
        "{lead}  <text x=\"{}\" y=\"{}\" font-size=\"{}\">\n   {content}\n  </text>\n",
        px(origin.x),
        px(origin.y),
        px(size)
    )
}

// ============================================================================
// Test patterns
// ============================================================================

/// A spoke target: alternating filled wedges around a center, labeled with
/// the spoke count.
///
/// Wedge `i` spans the angles `2i·w` to `(2i+1)·w` where `w = π / spokes`,
/// with rim points mirrored in x (`x = cx - r·cos θ`, `y = cy + r·sin θ`).
#[derive(Debug, Clone, PartialEq)]
pub struct RadialPattern {
    spokes: u32,
    radius: f64,
    origin: Point,
    color: Color,
    label_size: f64,
}

impl RadialPattern {
    pub fn new(spokes: u32, radius: f64, origin: Point) -> Result<Self, GeometryError> {
        if spokes == 0 {
            return Err(GeometryError::NoSpokes);
        }
        Ok(Self {
            spokes,
            radius: require_positive("pattern radius", radius)?,
            origin: require_point("pattern origin", origin)?,
            color: Color::BLACK,
            label_size: defaults::SPOKE_LABEL_SIZE,
        })
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_label_size(mut self, size: f64) -> Result<Self, GeometryError> {
        self.label_size = require_positive("label size", size)?;
        Ok(self)
    }

    pub fn spokes(&self) -> u32 {
        self.spokes
    }

    /// The untruncated corners of every wedge: origin, leading rim point,
    /// trailing rim point.
    pub fn wedges(&self) -> impl Iterator<Item = [Point; 3]> + '_ {
        let w = PI / f64::from(self.spokes);
        let rim = move |theta: f64| self.origin + dvec2(-theta.cos(), theta.sin()) * self.radius;
        (0..self.spokes).map(move |i| {
            let i = f64::from(i);
            [self.origin, rim(2.0 * i * w), rim((2.0 * i + 1.0) * w)]
        })
    }

    fn label(&self) -> String {
        format!("{} Spokes", self.spokes)
    }

    fn label_origin(&self) -> Point {
        let top_left = self.origin - dvec2(self.radius, self.radius);
        top_left + dvec2(0.0, defaults::SPOKE_LABEL_DROP * self.label_size)
    }
}

impl Render for RadialPattern {
    fn kind(&self) -> &'static str {
        "radial pattern"
    }

    fn nodes(&self, options: &RenderOptions) -> Vec<Box<dyn Node>> {
        let fill = options.color(self.color);

        let mut nodes: Vec<Box<dyn Node>> = Vec::with_capacity(self.spokes as usize + 1);
        nodes.push(text_node(self.label_origin(), self.label_size, &self.label()).into());
        nodes.extend(self.wedges().map(|corners| -> Box<dyn Node> {
            element::Polygon::new()
                .set("points", points(&corners))
                .set("fill", fill.as_str())
                .set("stroke-width", 0)
                .into()
        }));
        nodes
    }

    fn legacy_fragments(&self, options: &RenderOptions) -> Vec<String> {
        let fill = options.color(self.color);

        let mut fragments = Vec::with_capacity(self.spokes as usize + 1);
        fragments.push(legacy_text(self.label_origin(), self.label_size, &self.label(), "\n"));
        fragments.extend(self.wedges().map(|corners| {
            format!(
                "\n  <polygon points=\"{}\" fill=\"{fill}\" stroke-width=\"0\" />\n",
                points(&corners)
            )
        }));
        fragments
    }
}

/// A three-bar resolution target: three bars of `2.5·pitch × 0.5·pitch`
/// stacked `pitch` apart.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreeBar {
    pitch: f64,
    origin: Point,
    color: Color,
}

impl ThreeBar {
    pub fn new(pitch: f64, origin: Point) -> Result<Self, GeometryError> {
        Ok(Self {
            pitch: require_positive("bar pitch", pitch)?,
            origin: require_point("bar origin", origin)?,
            color: Color::BLACK,
        })
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn bar_height(&self) -> f64 {
        defaults::BAR_HEIGHT * self.pitch
    }

    pub fn bar_width(&self) -> f64 {
        defaults::BAR_WIDTH * self.pitch
    }

    fn bar_tops(&self) -> impl Iterator<Item = f64> + '_ {
        (0..3u32).map(|n| self.origin.y + f64::from(n) * self.pitch)
    }

    /// Lowest y any bar reaches
    pub fn bottom(&self) -> f64 {
        self.origin.y + 2.0 * self.pitch + self.bar_height()
    }
}

impl Render for ThreeBar {
    fn kind(&self) -> &'static str {
        "three-bar"
    }

    fn nodes(&self, options: &RenderOptions) -> Vec<Box<dyn Node>> {
        let fill = options.color(self.color);
        let (height, width) = (px(self.bar_height()), px(self.bar_width()));

        self.bar_tops()
            .map(|y| -> Box<dyn Node> {
                element::Rectangle::new()
                    .set("x", px(self.origin.x))
                    .set("y", px(y))
                    .set("height", height)
                    .set("width", width)
                    .set("fill", fill.as_str())
                    .set("stroke-width", 0)
                    .into()
            })
            .collect()
    }

    fn legacy_fragments(&self, options: &RenderOptions) -> Vec<String> {
        let fill = options.color(self.color);
        let (height, width) = (px(self.bar_height()), px(self.bar_width()));

        let mut fragments: Vec<String> = self
            .bar_tops()
            .map(|y| {
                format!(
                    "  <rect x=\"{}\" y=\"{}\" height=\"{height}\" width=\"{width}\" style=\"fill:{fill};\" stroke-width=\"0\" />\n",
                    px(self.origin.x),
                    px(y)
                )
            })
            .collect();
        // blank line after each group
        if let Some(last) = fragments.last_mut() {
            last.push('\n');
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pt;
    use regex_lite::Regex;

    fn polygon_points(fragment: &str) -> Vec<(i64, i64)> {
        let re = Regex::new(r#"points="([^"]*)""#).unwrap();
        let pair = Regex::new(r"(-?\d+),(-?\d+)").unwrap();
        let points = &re.captures(fragment).unwrap()[1];
        pair.captures_iter(points)
            .map(|c| (c[1].parse().unwrap(), c[2].parse().unwrap()))
            .collect()
    }

    fn attr(fragment: &str, name: &str) -> String {
        let re = Regex::new(&format!(r#"(?:^|\s){name}="([^"]*)""#)).unwrap();
        match re.captures(fragment) {
            Some(c) => c[1].to_string(),
            None => panic!("no {name} in {fragment}"),
        }
    }

    fn num(fragment: &str, name: &str) -> i64 {
        attr(fragment, name).parse().unwrap()
    }

    #[test]
    fn line_truncates_coordinates() {
        let line = Line::new(pt(200.9, 200.2), pt(-3.5, 300.0)).unwrap();
        let fragments = line.render();
        assert_eq!(fragments.len(), 1);
        let f = &fragments[0];
        assert!(f.starts_with("<line"));
        assert_eq!(
            (num(f, "x1"), num(f, "y1"), num(f, "x2"), num(f, "y2")),
            (200, 200, -3, 300)
        );
        assert_eq!(
            line.render_with(&RenderOptions::legacy()),
            vec!["  <line x1=\"200\" y1=\"200\" x2=\"-3\" y2=\"300\" />\n"]
        );
    }

    #[test]
    fn circle_renders_fill() {
        let circle = Circle::new(pt(200.0, 300.0), 30.0, Color::GREEN).unwrap();
        let f = &circle.render()[0];
        assert!(f.starts_with("<circle"));
        assert_eq!((num(f, "cx"), num(f, "cy"), num(f, "r")), (200, 300, 30));
        assert_eq!(attr(f, "fill"), "#00ff00");
        assert_eq!(
            circle.render_with(&RenderOptions::legacy()),
            vec!["  <circle cx=\"200\" cy=\"300\" r=\"30\"\n    style=\"fill:#0f0;\"  />\n"]
        );
    }

    #[test]
    fn circle_rejects_negative_radius() {
        assert_eq!(
            Circle::new(pt(0.0, 0.0), -1.0, Color::RED),
            Err(GeometryError::NonPositive {
                what: "circle radius",
                value: -1.0
            })
        );
    }

    #[test]
    fn rectangle_keeps_height_and_width_apart() {
        let rect = Rectangle::new(pt(100.0, 100.0), 200.0, 150.0, Color::CYAN).unwrap();
        let f = &rect.render()[0];
        assert!(f.starts_with("<rect"));
        assert_eq!((num(f, "x"), num(f, "y")), (100, 100));
        assert_eq!((num(f, "height"), num(f, "width")), (200, 150));
        assert_eq!(attr(f, "fill"), "#00ffff");
        assert_eq!(
            rect.render_with(&RenderOptions::legacy()),
            vec!["  <rect x=\"100\" y=\"100\" height=\"200\"\n    width=\"150\" style=\"fill:#0ff;\" />\n"]
        );
        assert!(Rectangle::new(pt(0.0, 0.0), -1.0, 1.0, Color::CYAN).is_err());
    }

    #[test]
    fn triangle_has_three_corners() {
        let tri = Triangle::new(pt(350.0, 350.0), pt(350.0, 395.0), pt(395.0, 350.0), Color::BLACK)
            .unwrap();
        for options in [RenderOptions::default(), RenderOptions::legacy()] {
            let fragments = tri.render_with(&options);
            assert_eq!(fragments.len(), 1);
            assert_eq!(
                polygon_points(&fragments[0]),
                vec![(350, 350), (350, 395), (395, 350)]
            );
        }
        assert_eq!(attr(&tri.render()[0], "fill"), "#000000");
    }

    #[test]
    fn text_is_escaped_in_documents() {
        let text = Text::new(pt(50.0, 50.0), "A & <B>").unwrap();
        let f = &text.render()[0];
        assert!(f.starts_with("<text"));
        assert_eq!((num(f, "x"), num(f, "y")), (50, 50));
        assert!(f.contains("font-size=\"24\""));
        assert!(f.contains("A &amp; &lt;B&gt;"));
        assert!(!f.contains("<B>"));
    }

    #[test]
    fn text_is_verbatim_in_legacy_layout() {
        let text = Text::new(pt(50.0, 50.0), "A & <B>").unwrap();
        assert_eq!(
            text.render_with(&RenderOptions::legacy()),
            vec!["  <text x=\"50\" y=\"50\" font-size=\"24\">\n   A & <B>\n  </text>\n"]
        );
    }

    #[test]
    fn text_rejects_zero_size() {
        assert!(Text::with_size(pt(0.0, 0.0), "x", 0.0).is_err());
    }

    #[test]
    fn radial_emits_label_then_one_wedge_per_spoke() {
        for spokes in [1, 2, 7, 30, 45] {
            let pattern = RadialPattern::new(spokes, 50.0, pt(60.0, 60.0)).unwrap();
            for options in [RenderOptions::default(), RenderOptions::legacy()] {
                let fragments = pattern.render_with(&options);
                assert_eq!(fragments.len(), spokes as usize + 1);
                assert_eq!(fragments.iter().filter(|f| f.contains("<text")).count(), 1);
                assert_eq!(
                    fragments.iter().filter(|f| f.contains("<polygon")).count(),
                    spokes as usize
                );
                assert!(fragments[0].contains(&format!("{spokes} Spokes")));
            }
        }
    }

    #[test]
    fn radial_label_sits_inside_top_left() {
        let pattern = RadialPattern::new(4, 100.0, pt(100.0, 100.0)).unwrap();
        let label = &pattern.render()[0];
        assert_eq!((num(label, "x"), num(label, "y")), (0, 15));
        assert!(label.contains("font-size=\"12\""));
        assert_eq!(
            pattern.render_with(&RenderOptions::legacy())[0],
            "\n  <text x=\"0\" y=\"15\" font-size=\"12\">\n   4 Spokes\n  </text>\n"
        );
    }

    #[test]
    fn radial_rim_points_lie_on_the_circle() {
        let pattern = RadialPattern::new(4, 100.0, pt(100.0, 100.0)).unwrap();
        let first = &pattern.render()[1];
        let points = polygon_points(first);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], (100, 100));
        for &(x, y) in &points[1..] {
            let d = (((x - 100).pow(2) + (y - 100).pow(2)) as f64).sqrt();
            assert!((d - 100.0).abs() <= 1.5, "rim point ({x},{y}) at distance {d}");
        }
        // angle 0 mirrors to the left edge
        assert_eq!(points[1], (0, 100));
        assert_eq!(attr(first, "stroke-width"), "0");
    }

    #[test]
    fn radial_legacy_wedge_layout() {
        let pattern = RadialPattern::new(4, 100.0, pt(100.0, 100.0)).unwrap();
        assert_eq!(
            pattern.render_with(&RenderOptions::legacy())[1],
            "\n  <polygon points=\"100,100 0,100 29,170\" fill=\"#000\" stroke-width=\"0\" />\n"
        );
    }

    #[test]
    fn radial_wedges_are_exact_before_truncation() {
        let origin = pt(10.0, 20.0);
        let pattern = RadialPattern::new(6, 5.0, origin).unwrap();
        for [center, a, b] in pattern.wedges() {
            assert_eq!(center, origin);
            assert!((a.distance(origin) - 5.0).abs() < 1e-9);
            assert!((b.distance(origin) - 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn radial_validates_inputs() {
        assert_eq!(
            RadialPattern::new(0, 10.0, pt(0.0, 0.0)),
            Err(GeometryError::NoSpokes)
        );
        assert!(RadialPattern::new(3, 0.0, pt(0.0, 0.0)).is_err());
        assert!(RadialPattern::new(3, 1.0, pt(0.0, 0.0)).unwrap().with_label_size(-1.0).is_err());
    }

    #[test]
    fn radial_uses_its_color() {
        let pattern = RadialPattern::new(3, 10.0, pt(20.0, 20.0))
            .unwrap()
            .with_color(Color::RED);
        assert!(pattern.render()[1..].iter().all(|f| attr(f, "fill") == "#ff0000"));
    }

    #[test]
    fn three_bar_stacks_bars_one_pitch_apart() {
        let bars = ThreeBar::new(10.0, pt(20.0, 40.0)).unwrap();
        let fragments = bars.render();
        assert_eq!(fragments.len(), 3);

        let parsed: Vec<(i64, i64, i64, i64)> = fragments
            .iter()
            .map(|f| (num(f, "x"), num(f, "y"), num(f, "height"), num(f, "width")))
            .collect();
        assert_eq!(parsed, vec![(20, 40, 5, 25), (20, 50, 5, 25), (20, 60, 5, 25)]);
    }

    #[test]
    fn three_bar_legacy_layout_ends_with_blank_line() {
        let bars = ThreeBar::new(10.0, pt(20.0, 40.0)).unwrap();
        let fragments = bars.render_with(&RenderOptions::legacy());
        assert_eq!(fragments.len(), 3);
        assert_eq!(
            fragments[0],
            "  <rect x=\"20\" y=\"40\" height=\"5\" width=\"25\" style=\"fill:#000;\" stroke-width=\"0\" />\n"
        );
        assert!(fragments[2].ends_with("/>\n\n"));
    }

    #[test]
    fn three_bar_geometry_accessors() {
        let bars = ThreeBar::new(4.0, pt(0.0, 10.0)).unwrap();
        assert_eq!(bars.bar_height(), 2.0);
        assert_eq!(bars.bar_width(), 10.0);
        assert_eq!(bars.bottom(), 20.0);
        assert!(ThreeBar::new(0.0, pt(0.0, 0.0)).is_err());
    }

    #[test]
    fn drawable_dispatches_to_variant() {
        let items: Vec<Drawable> = vec![
            Line::new(pt(0.0, 0.0), pt(1.0, 1.0)).unwrap().into(),
            ThreeBar::new(2.0, pt(0.0, 0.0)).unwrap().into(),
        ];
        assert_eq!(items[0].kind(), "line");
        assert_eq!(items[1].kind(), "three-bar");
        assert_eq!(items[1].nodes(&RenderOptions::default()).len(), 3);
    }
}
