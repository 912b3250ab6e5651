//! # PainterKit Raster
//!
//! Raster side of PainterKit: an RGB pixel-grid value type, corner-aligned
//! nearest/bilinear rescaling, a decode-only BMP reader, and a pattern
//! brush that tiles a small bitmap across a polygon.
//!
//! All operations are synchronous, total functions: they consume their
//! inputs, produce a fresh buffer, and never mutate a source image. The
//! host blits the resulting buffers; no drawing happens here beyond pixel
//! arithmetic.

pub mod bmp;
pub mod image;
pub mod pattern;
pub mod resample;

pub use bmp::{decode, load_bmp};
pub use image::RasterImage;
pub use pattern::{BitmapResource, PatternFill};
pub use resample::{scale, ScaleMode};
