//! 2D point type and the affine transform used by every drawable entity.

use serde::{Deserialize, Serialize};

/// Represents a 2D point with X and Y coordinates.
///
/// Points are plain values: every transform produces a new `Point` and the
/// original is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Applies a translation followed by an optional rotation about `pivot`.
    ///
    /// The translation always happens first. The rotation is applied only
    /// when `angle_deg` is nonzero AND a pivot is supplied; a missing pivot
    /// with a nonzero angle means no rotation. Angles are counter-clockwise
    /// positive in the mathematical sense; on a screen with Y growing
    /// downward the rotation appears clockwise.
    pub fn transform(&self, dx: f64, dy: f64, angle_deg: f64, pivot: Option<Point>) -> Point {
        let moved = Point::new(self.x + dx, self.y + dy);
        match pivot {
            Some(center) if angle_deg != 0.0 => rotate_point(moved, center, angle_deg),
            _ => moved,
        }
    }
}

/// Rotates `p` about `center` by `angle_deg` degrees.
pub fn rotate_point(p: Point, center: Point, angle_deg: f64) -> Point {
    let angle_rad = angle_deg.to_radians();
    let cos_a = angle_rad.cos();
    let sin_a = angle_rad.sin();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point {
        x: center.x + dx * cos_a - dy * sin_a,
        y: center.y + dx * sin_a + dy * cos_a,
    }
}
