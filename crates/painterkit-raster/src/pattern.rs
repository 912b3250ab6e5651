//! Pattern brush: tiles a small bitmap across a polygon's bounding region.

use painterkit_core::{Color, Error, Point, Result};

use crate::image::RasterImage;

/// A small create-once tile image used as a repeating fill pattern.
#[derive(Debug, Clone)]
pub struct BitmapResource {
    tile: RasterImage,
}

impl BitmapResource {
    /// Wraps a tile image. The tile must hold at least one pixel.
    pub fn new(tile: RasterImage) -> Result<Self> {
        if tile.is_empty() {
            return Err(Error::other("pattern tile must not be empty"));
        }
        Ok(Self { tile })
    }

    /// The underlying tile.
    pub fn tile(&self) -> &RasterImage {
        &self.tile
    }

    /// Fills the polygon's bounding region with the repeated tile, masking
    /// pixels whose centers fall outside the polygon.
    ///
    /// Pixels outside the polygon keep `background`; the returned mask marks
    /// covered pixels so the host can blit with transparency. Polygons with
    /// fewer than three vertices produce an empty fill.
    pub fn fill_polygon(&self, vertices: &[Point], background: Color) -> PatternFill {
        if vertices.len() < 3 {
            return PatternFill::empty();
        }

        let min_x = vertices.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = vertices.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_x = vertices.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = vertices.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

        let origin = (min_x.floor() as i64, min_y.floor() as i64);
        let width = (max_x.ceil() as i64 - origin.0).max(0) as usize;
        let height = (max_y.ceil() as i64 - origin.1).max(0) as usize;
        if width == 0 || height == 0 {
            return PatternFill::empty();
        }

        let tile_w = self.tile.width();
        let tile_h = self.tile.height();
        let mut image = RasterImage::filled(width, height, background);
        let mut mask = vec![false; width * height];

        for y in 0..height {
            for x in 0..width {
                // Test the pixel center.
                let probe = Point::new(
                    (origin.0 + x as i64) as f64 + 0.5,
                    (origin.1 + y as i64) as f64 + 0.5,
                );
                if point_in_polygon(probe, vertices) {
                    image.set_pixel(x, y, self.tile.pixel(x % tile_w, y % tile_h));
                    mask[y * width + x] = true;
                }
            }
        }

        PatternFill {
            origin,
            image,
            mask,
        }
    }
}

/// Result of a pattern fill: a pixel buffer positioned at `origin` in canvas
/// coordinates plus a row-major coverage mask.
#[derive(Debug, Clone)]
pub struct PatternFill {
    /// Top-left corner of the filled region, canvas coordinates.
    pub origin: (i64, i64),
    /// The filled buffer; uncovered pixels hold the background color.
    pub image: RasterImage,
    /// Row-major flags, `true` where the polygon covers the pixel.
    pub mask: Vec<bool>,
}

impl PatternFill {
    fn empty() -> Self {
        Self {
            origin: (0, 0),
            image: RasterImage::empty(),
            mask: Vec::new(),
        }
    }

    /// Number of covered pixels.
    pub fn coverage(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }
}

/// Even-odd ray-casting containment test.
fn point_in_polygon(p: Point, vertices: &[Point]) -> bool {
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (vi, vj) = (vertices[i], vertices[j]);
        if ((vi.y > p.y) != (vj.y > p.y))
            && (p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}
