//! Spline curves: control points, style state, and sampled polylines.
//!
//! ## Modules
//!
//! - [`catmull`]: windowed uniform Catmull-Rom sampling.
//! - [`bezier`]: Bernstein-basis evaluation and stride-3 segmentation.

pub mod bezier;
pub mod catmull;

use painterkit_core::{Color, Point};
use serde::{Deserialize, Serialize};

pub use bezier::BezierSegment;

/// Rotating display palette for curves and Bézier segment groups.
pub const CURVE_PALETTE: [Color; 7] = [
    Color::rgb(0xE9, 0x1E, 0x63),
    Color::rgb(0x9C, 0x27, 0xB0),
    Color::rgb(0x21, 0x96, 0xF3),
    Color::rgb(0x00, 0x96, 0x88),
    Color::rgb(0xFF, 0x98, 0x00),
    Color::rgb(0x79, 0x55, 0x48),
    Color::rgb(0x60, 0x7D, 0x8B),
];

/// Fractions along each control segment where intermediate markers sit.
const INTERMEDIATE_FRACTIONS: [f64; 2] = [0.33, 0.67];

/// Which evaluator a curve renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveKind {
    /// Smooth interpolation through every control point.
    CatmullRom,
    /// Independent stride-3 cubic Bézier groups in rotating colors.
    BezierSegments,
}

/// A user-built curve: ordered control points plus display style.
///
/// The sampled polyline and the intermediate markers are derived caches,
/// regenerated on every control-point or tension change. They are never
/// authoritative; only the control points are.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineCurve {
    control_points: Vec<Point>,
    pub color: Color,
    pub show_control_lines: bool,
    pub show_points: bool,
    pub line_width: f64,
    kind: CurveKind,
    tension: f64,
    samples: Vec<Point>,
    intermediate: Vec<Point>,
}

impl SplineCurve {
    /// Lower clamp of the tension slider.
    pub const MIN_TENSION: f64 = 0.1;
    /// Upper clamp of the tension slider.
    pub const MAX_TENSION: f64 = 0.9;

    /// Creates an empty Catmull-Rom curve with the given display color.
    pub fn new(color: Color) -> Self {
        Self::with_kind(color, CurveKind::CatmullRom)
    }

    /// Creates an empty curve using the given evaluator.
    pub fn with_kind(color: Color, kind: CurveKind) -> Self {
        Self {
            control_points: Vec::new(),
            color,
            show_control_lines: true,
            show_points: true,
            line_width: 3.0,
            kind,
            tension: 0.5,
            samples: Vec::new(),
            intermediate: Vec::new(),
        }
    }

    /// The ordered control points.
    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    /// Current tension value.
    pub fn tension(&self) -> f64 {
        self.tension
    }

    /// Appends a control point and regenerates the derived caches.
    pub fn add_control_point(&mut self, point: Point) {
        self.control_points.push(point);
        self.regenerate();
    }

    /// Removes and returns the most recently added control point.
    pub fn remove_last_control_point(&mut self) -> Option<Point> {
        let removed = self.control_points.pop();
        if removed.is_some() {
            self.regenerate();
        }
        removed
    }

    /// Drops every control point (and with them the derived caches).
    pub fn clear_control_points(&mut self) {
        self.control_points.clear();
        self.regenerate();
    }

    /// Sets the tension, clamped to `[0.1, 0.9]`, and regenerates caches.
    pub fn set_tension(&mut self, value: f64) {
        self.tension = value.clamp(Self::MIN_TENSION, Self::MAX_TENSION);
        self.regenerate();
    }

    /// The sampled curve polyline.
    pub fn sampled_points(&self) -> &[Point] {
        &self.samples
    }

    /// The intermediate markers: two per control segment, at 0.33 and 0.67
    /// of the way from the segment start.
    pub fn intermediate_points(&self) -> &[Point] {
        &self.intermediate
    }

    /// Independently-colored Bézier groups for [`CurveKind::BezierSegments`]
    /// curves; a single group in the curve's own color otherwise.
    pub fn segments(&self) -> Vec<BezierSegment> {
        match self.kind {
            CurveKind::BezierSegments => bezier::segments(&self.control_points),
            CurveKind::CatmullRom => {
                if self.samples.len() < 2 {
                    Vec::new()
                } else {
                    vec![BezierSegment {
                        color: self.color,
                        points: self.samples.clone(),
                    }]
                }
            }
        }
    }

    fn regenerate(&mut self) {
        self.samples = match self.kind {
            CurveKind::CatmullRom => catmull::sample_polyline(&self.control_points),
            CurveKind::BezierSegments => bezier::segments(&self.control_points)
                .into_iter()
                .flat_map(|s| s.points)
                .collect(),
        };

        self.intermediate.clear();
        for pair in self.control_points.windows(2) {
            let (p1, p2) = (pair[0], pair[1]);
            let dx = p2.x - p1.x;
            let dy = p2.y - p1.y;
            for f in INTERMEDIATE_FRACTIONS {
                self.intermediate.push(Point::new(p1.x + dx * f, p1.y + dy * f));
            }
        }
    }
}
