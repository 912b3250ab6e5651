//! RGB pixel grid and synthetic image generators.

use painterkit_core::Color;

/// A `width x height` grid of RGB pixels, row-major, origin at the top-left.
///
/// Images are values: once produced (by decoding, generation, or a rescale)
/// they are only read. A rescale yields a new image and leaves the source
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl RasterImage {
    /// Creates an image filled with a single color.
    pub fn filled(width: usize, height: usize, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// The zero-by-zero image, used as the degenerate result of scaling an
    /// empty input.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the image holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Reads the pixel at `(x, y)`.
    ///
    /// Panics when the coordinates are outside the grid; use [`get`] for a
    /// checked read.
    ///
    /// [`get`]: RasterImage::get
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        assert!(x < self.width && y < self.height, "pixel ({x},{y}) out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Checked pixel read.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Raw row-major pixel slice, for hosts that blit the whole buffer.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub(crate) fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        let w = self.width;
        self.pixels[y * w + x] = color;
    }

    /// Generates a two-color checkerboard with square cells of `cell` pixels.
    ///
    /// The stock fallback when a BMP fails to decode.
    pub fn checkerboard(width: usize, height: usize, cell: usize, a: Color, b: Color) -> Self {
        let cell = cell.max(1);
        let mut img = Self::filled(width, height, a);
        for y in 0..height {
            for x in 0..width {
                if ((x / cell) + (y / cell)) % 2 == 1 {
                    img.set_pixel(x, y, b);
                }
            }
        }
        img
    }

    /// Generates a left-to-right linear gradient between two colors.
    pub fn horizontal_gradient(width: usize, height: usize, from: Color, to: Color) -> Self {
        let mut img = Self::filled(width, height, from);
        if width == 0 || height == 0 {
            return img;
        }
        let span = (width - 1).max(1) as f64;
        for x in 0..width {
            let t = x as f64 / span;
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t) as u8;
            let c = Color::rgb(mix(from.r, to.r), mix(from.g, to.g), mix(from.b, to.b));
            for y in 0..height {
                img.set_pixel(x, y, c);
            }
        }
        img
    }
}
