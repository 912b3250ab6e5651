//! Canvas: the scene model holding shapes and the spline manager.

use painterkit_core::Point;
use tracing::debug;

use crate::curve::CurveKind;
use crate::shapes::{FrameShape, PolygonShape, Shape};
use crate::spline_manager::SplineManager;

/// A placed shape with its scene identity.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingObject {
    pub id: u64,
    pub shape: Shape,
}

impl DrawingObject {
    /// Creates a drawing object wrapping a shape.
    pub fn new(id: u64, shape: Shape) -> Self {
        Self { id, shape }
    }
}

/// Scene state: placed shapes plus the spline manager.
///
/// All mutation happens through discrete operations driven by single
/// UI events; there is no shared-state concurrency to guard against.
#[derive(Debug, Clone)]
pub struct Canvas {
    objects: Vec<DrawingObject>,
    next_id: u64,
    pub spline_manager: SplineManager,
    pub show_grid: bool,
    width: f64,
    height: f64,
}

impl Canvas {
    /// Creates a canvas with the default drawing area.
    pub fn new() -> Self {
        Self::with_size(600.0, 420.0)
    }

    /// Creates a canvas with the given drawing area.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            objects: Vec::new(),
            next_id: 1,
            spline_manager: SplineManager::new(CurveKind::CatmullRom),
            show_grid: false,
            width,
            height,
        }
    }

    /// Drawing area as `(width, height)`.
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Updates the drawing area (typically on window resize).
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Generates a new unique ID.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Adds a generic shape to the canvas.
    pub fn add_shape(&mut self, shape: Shape) -> u64 {
        let id = self.generate_id();
        self.objects.push(DrawingObject::new(id, shape));
        id
    }

    /// Adds a polygon to the canvas.
    pub fn add_polygon(&mut self, polygon: PolygonShape) -> u64 {
        self.add_shape(Shape::Polygon(polygon))
    }

    /// Adds a frame figure to the canvas.
    pub fn add_frame(&mut self, frame: FrameShape) -> u64 {
        self.add_shape(Shape::Frame(frame))
    }

    /// Gets a reference to a shape by ID.
    pub fn get_shape(&self, id: u64) -> Option<&DrawingObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Gets a mutable reference to a shape by ID.
    pub fn get_shape_mut(&mut self, id: u64) -> Option<&mut DrawingObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// Iterates the placed shapes in insertion order.
    pub fn shapes(&self) -> impl Iterator<Item = &DrawingObject> {
        self.objects.iter()
    }

    /// Returns the number of shapes on the canvas.
    pub fn shape_count(&self) -> usize {
        self.objects.len()
    }

    /// Applies translate-then-rotate to a polygon by ID.
    ///
    /// The rotation pivots on the polygon's first vertex as it stands when
    /// the call starts. Returns false when the ID is missing or names a
    /// shape without vertices to pivot on.
    pub fn transform_polygon(&mut self, id: u64, dx: f64, dy: f64, angle_deg: f64) -> bool {
        match self.get_shape_mut(id) {
            Some(DrawingObject {
                shape: Shape::Polygon(polygon),
                ..
            }) => {
                polygon.transform(dx, dy, angle_deg);
                true
            }
            _ => false,
        }
    }

    /// Removes a shape by ID.
    pub fn remove_shape(&mut self, id: u64) -> Option<DrawingObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(index))
    }

    /// Removes the most recently added shape.
    pub fn remove_last_shape(&mut self) -> Option<DrawingObject> {
        self.objects.pop()
    }

    /// Topmost shape containing the point, if any.
    pub fn shape_at(&self, point: &Point) -> Option<&DrawingObject> {
        self.objects.iter().rev().find(|o| o.shape.contains_point(point))
    }

    /// Removes every placed shape, leaving splines alone.
    pub fn clear_shapes(&mut self) {
        self.objects.clear();
    }

    /// Full reset: shapes and all curves.
    pub fn clear_all(&mut self) {
        debug!(
            shapes = self.objects.len(),
            curves = self.spline_manager.curve_count(),
            "clearing canvas"
        );
        self.objects.clear();
        self.spline_manager.clear_all();
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use painterkit_core::Color;

    #[test]
    fn test_ids_are_sequential_and_stable() {
        let mut canvas = Canvas::new();
        let a = canvas.add_polygon(PolygonShape::double_triangle(
            Point::new(0.0, 0.0),
            10.0,
            Color::RED,
        ));
        let b = canvas.add_frame(FrameShape::new(Point::new(50.0, 50.0), 20.0, 2.0, Color::BLUE));
        assert_ne!(a, b);
        canvas.remove_shape(a);
        let c = canvas.add_frame(FrameShape::new(Point::new(0.0, 0.0), 5.0, 1.0, Color::RED));
        assert_ne!(b, c);
        assert!(canvas.get_shape(a).is_none());
        assert!(canvas.get_shape(b).is_some());
    }

    #[test]
    fn test_transform_polygon_by_id() {
        let mut canvas = Canvas::new();
        let id = canvas.add_polygon(PolygonShape::new(
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)],
            Color::RED,
        ));
        assert!(canvas.transform_polygon(id, 5.0, 5.0, 0.0));
        let Shape::Polygon(poly) = &canvas.get_shape(id).unwrap().shape else {
            panic!("expected polygon");
        };
        assert_eq!(poly.vertices[0], Point::new(5.0, 5.0));
        // Frames have no vertex list to pivot on.
        let frame_id = canvas.add_frame(FrameShape::new(Point::new(0.0, 0.0), 4.0, 1.0, Color::RED));
        assert!(!canvas.transform_polygon(frame_id, 1.0, 1.0, 0.0));
        assert!(!canvas.transform_polygon(9999, 1.0, 1.0, 0.0));
    }

    #[test]
    fn test_shape_at_prefers_topmost() {
        let mut canvas = Canvas::new();
        let below = canvas.add_frame(FrameShape::new(Point::new(5.0, 5.0), 10.0, 1.0, Color::RED));
        let above = canvas.add_frame(FrameShape::new(Point::new(5.0, 5.0), 10.0, 1.0, Color::BLUE));
        assert_eq!(canvas.shape_at(&Point::new(5.0, 5.0)).unwrap().id, above);
        canvas.remove_shape(above);
        assert_eq!(canvas.shape_at(&Point::new(5.0, 5.0)).unwrap().id, below);
        assert!(canvas.shape_at(&Point::new(100.0, 100.0)).is_none());
    }

    #[test]
    fn test_clear_all_resets_shapes_and_splines() {
        let mut canvas = Canvas::new();
        canvas.add_frame(FrameShape::new(Point::new(0.0, 0.0), 4.0, 1.0, Color::RED));
        canvas.spline_manager.start_new();
        canvas
            .spline_manager
            .add_point(Point::new(1.0, 1.0))
            .unwrap();
        canvas.clear_all();
        assert_eq!(canvas.shape_count(), 0);
        assert_eq!(canvas.spline_manager.total_control_points(), 0);
        assert!(canvas.spline_manager.current().is_none());
    }
}
