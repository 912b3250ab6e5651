//! # PainterKit Designer
//!
//! Vector side of PainterKit: the shapes, curves, and scene model behind
//! the painter exercises, kept strictly toolkit-free. Every drawable
//! entity flattens to [`render::DrawCommand`]s that an external collaborator
//! renders with its own primitives.
//!
//! ## Core Components
//!
//! - **Shapes**: polygons (with the translate-then-rotate pivot transform)
//!   and the framed square-plus-circle figure
//! - **Curves**: Catmull-Rom interpolation and stride-3 Bézier segmentation
//!   with derived intermediate-point caches
//! - **SplineManager**: the Idle/Building editing state machine with its
//!   rotating color palette
//! - **Canvas**: the scene container tying shapes and curves together
//! - **Serialization**: versioned JSON design files
//!
//! ## Architecture
//!
//! ```text
//! Canvas (scene state)
//!   ├── DrawingObject (id + Shape)
//!   └── SplineManager
//!         ├── finished: Vec<SplineCurve>
//!         └── current: Option<SplineCurve>
//!
//! render::canvas_commands(&canvas) -> Vec<DrawCommand>   (host draws these)
//! ```

pub mod canvas;
pub mod curve;
pub mod render;
pub mod serialization;
pub mod shapes;
pub mod spline_manager;

pub use canvas::{Canvas, DrawingObject};
pub use curve::{BezierSegment, CurveKind, SplineCurve, CURVE_PALETTE};
pub use render::{canvas_commands, grid_commands, shape_commands, spline_commands, DrawCommand, Stroke};
pub use serialization::{load_design, save_design, DesignFile, DesignMetadata};
pub use shapes::{FrameShape, PolygonShape, Shape, ShapeType};
pub use spline_manager::{ManagerState, SplineManager};
