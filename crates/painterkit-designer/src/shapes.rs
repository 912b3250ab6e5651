//! Geometric shapes for the painter scene.

use painterkit_core::{Color, Point};
use serde::{Deserialize, Serialize};

/// Types of shapes that can be placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Polygon,
    Frame,
}

/// An ordered vertex list with a display color.
///
/// The vertex sequence is implicitly closed when drawn: the host connects
/// the last vertex back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonShape {
    pub vertices: Vec<Point>,
    pub color: Color,
}

impl PolygonShape {
    /// Creates a polygon from an ordered vertex list.
    pub fn new(vertices: Vec<Point>, color: Color) -> Self {
        Self { vertices, color }
    }

    /// The hourglass figure: two triangles meeting tip-to-tip at `center`,
    /// each `size` wide at the base and `size` tall.
    pub fn double_triangle(center: Point, size: f64, color: Color) -> Self {
        let half = size / 2.0;
        Self::new(
            vec![
                Point::new(center.x - half, center.y - half),
                Point::new(center.x + half, center.y - half),
                Point::new(center.x, center.y),
                Point::new(center.x + half, center.y + half),
                Point::new(center.x - half, center.y + half),
                Point::new(center.x, center.y),
            ],
            color,
        )
    }

    /// Translates every vertex, then rotates about the pivot.
    ///
    /// The pivot is the polygon's first vertex as it was when the call
    /// started, so repeated calls re-anchor the rotation to the moving
    /// first vertex. The vertex list is replaced wholesale; a failed or
    /// partial update cannot be observed.
    pub fn transform(&mut self, dx: f64, dy: f64, angle_deg: f64) {
        let Some(&pivot) = self.vertices.first() else {
            return;
        };
        self.vertices = self
            .vertices
            .iter()
            .map(|v| v.transform(dx, dy, angle_deg, Some(pivot)))
            .collect();
    }

    /// Translates the polygon without rotation.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.transform(dx, dy, 0.0);
    }

    /// Axis-aligned bounding box as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for v in &self.vertices {
            min_x = min_x.min(v.x);
            min_y = min_y.min(v.y);
            max_x = max_x.max(v.x);
            max_y = max_y.max(v.y);
        }
        (min_x, min_y, max_x, max_y)
    }

    /// Even-odd ray-casting containment test.
    pub fn contains_point(&self, p: &Point) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = self.vertices.len() - 1;
        for i in 0..self.vertices.len() {
            let (vi, vj) = (self.vertices[i], self.vertices[j]);
            if ((vi.y > p.y) != (vj.y > p.y))
                && (p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x)
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

/// A square outline with an inscribed circle, drawn as contours only.
///
/// The circle diameter is a fixed fraction of the square side so the inset
/// stays visible at any size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameShape {
    pub center: Point,
    pub size: f64,
    pub border_width: f64,
    pub color: Color,
}

impl FrameShape {
    /// Inner circle diameter as a fraction of the square side.
    pub const INNER_CIRCLE_RATIO: f64 = 0.72;

    /// Creates a frame centered at `center` with outer side `size`.
    pub fn new(center: Point, size: f64, border_width: f64, color: Color) -> Self {
        Self {
            center,
            size,
            border_width,
            color,
        }
    }

    /// Radius of the inscribed circle.
    pub fn inner_radius(&self) -> f64 {
        self.size * Self::INNER_CIRCLE_RATIO / 2.0
    }

    /// The square region as `(min_x, min_y, max_x, max_y)`.
    pub fn region(&self) -> (f64, f64, f64, f64) {
        let half = self.size / 2.0;
        (
            self.center.x - half,
            self.center.y - half,
            self.center.x + half,
            self.center.y + half,
        )
    }

    /// Moves the frame by the given offset.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.center = Point::new(self.center.x + dx, self.center.y + dy);
    }
}

/// Enum wrapper for all placeable shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Polygon(PolygonShape),
    Frame(FrameShape),
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Polygon(_) => ShapeType::Polygon,
            Shape::Frame(_) => ShapeType::Frame,
        }
    }

    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            Shape::Polygon(s) => s.bounds(),
            Shape::Frame(s) => s.region(),
        }
    }

    pub fn contains_point(&self, point: &Point) -> bool {
        match self {
            Shape::Polygon(s) => s.contains_point(point),
            Shape::Frame(s) => {
                let (x1, y1, x2, y2) = s.region();
                point.x >= x1 && point.x <= x2 && point.y >= y1 && point.y <= y2
            }
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Polygon(s) => s.translate(dx, dy),
            Shape::Frame(s) => s.translate(dx, dy),
        }
    }
}
