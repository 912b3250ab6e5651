//! # PainterKit Core
//!
//! Core types and the unified error model for PainterKit.
//! Provides the fundamental abstractions shared by the vector (designer)
//! and raster sides of the library: points, colors, and typed errors.

pub mod error;
pub mod types;

pub use error::{ColorParseError, CurveError, DecodeError, Error, Result};
pub use types::{rotate_point, Color, Point};
