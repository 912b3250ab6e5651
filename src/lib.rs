//! # PainterKit
//!
//! The geometry and raster core of a 2D "Painter" application:
//! - Parametric curves (Catmull-Rom splines, Bézier segments)
//! - Polygon transforms (translate-then-rotate about a pivot)
//! - Image resampling (corner-aligned nearest-neighbor and bilinear)
//! - A decode-only BMP reader and a tiling pattern brush
//!
//! ## Architecture
//!
//! PainterKit is organized as a workspace with multiple crates:
//!
//! 1. **painterkit-core** - Points, colors, and the unified error model
//! 2. **painterkit-designer** - Shapes, curves, the spline manager, and the
//!    draw-command scene model
//! 3. **painterkit-raster** - Pixel grids, rescaling, BMP decode, pattern
//!    brush
//! 4. **painterkit** - This facade plus a headless smoke CLI
//!
//! The library never draws or owns windows. Vector entities flatten into
//! [`DrawCommand`] lists and raster operations produce pixel buffers; an
//! external collaborator renders both with its own primitives.

// Re-export member crates under short names
pub use painterkit_designer as designer;
pub use painterkit_raster as raster;

pub use painterkit_core::{
    rotate_point, Color, ColorParseError, CurveError, DecodeError, Error, Point, Result,
};

pub use painterkit_designer::{
    canvas_commands, grid_commands, shape_commands, spline_commands, Canvas, CurveKind,
    DrawCommand, DrawingObject, FrameShape, ManagerState, PolygonShape, Shape, ShapeType,
    SplineCurve, SplineManager, Stroke, CURVE_PALETTE,
};

pub use painterkit_raster::{
    decode, load_bmp, scale, BitmapResource, PatternFill, RasterImage, ScaleMode,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and RUST_LOG environment
/// variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
