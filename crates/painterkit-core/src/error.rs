//! Error handling for PainterKit
//!
//! Provides error types for all layers of the library:
//! - Curve errors (spline construction/state machine)
//! - Decode errors (BMP binary format)
//! - Color errors (literal parsing)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Curve construction error type
///
/// Represents failures of the spline editing state machine, such as
/// finishing a curve below its minimum control-point count.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// Curve has fewer control points than its build rule requires
    #[error("need at least {required} control points, have {actual}")]
    InsufficientPoints {
        /// The minimum number of control points for the active build rule.
        required: usize,
        /// The number of control points currently placed.
        actual: usize,
    },

    /// Operation requires an in-progress curve but none is being built
    #[error("no curve is currently being built")]
    NoActiveCurve,
}

/// BMP decode error type
///
/// Represents failures while parsing BMP bytes. Unsupported pixel depths
/// are deliberately NOT an error: they decode to a neutral-gray fill.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Leading bytes are not the `BM` signature
    #[error("not a BMP file: missing BM signature")]
    NotABmp,

    /// DIB header is not the 40-byte BITMAPINFOHEADER layout
    #[error("unsupported DIB header size {size} (only BITMAPINFOHEADER is supported)")]
    UnsupportedHeader {
        /// The DIB header size found in the file.
        size: u32,
    },

    /// File ends before the declared pixel data
    #[error("truncated BMP data: need {needed} bytes, have {available}")]
    Truncated {
        /// The number of bytes the headers promise.
        needed: usize,
        /// The number of bytes actually present.
        available: usize,
    },

    /// Header declares a non-positive width or height
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions {
        /// Declared width in pixels.
        width: i32,
        /// Declared height in pixels.
        height: i32,
    },

    /// Reading the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Color literal parse error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color literal: {literal:?}")]
pub struct ColorParseError {
    /// The rejected literal.
    pub literal: String,
}

/// Main error type for PainterKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Curve construction error
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// BMP decode error
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Color parse error
    #[error(transparent)]
    Color(#[from] ColorParseError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a decode error
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// Check if this is a curve error
    pub fn is_curve_error(&self) -> bool {
        matches!(self, Error::Curve(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
