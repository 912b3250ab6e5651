//! Nearest-neighbor and bilinear image rescaling.
//!
//! Sampling is corner-aligned: destination corners map exactly onto source
//! corners, so `dst = src * (dim-1)/(new_dim-1)`. This differs from the
//! center-aligned mapping most libraries use and is load-bearing for the
//! round-trip guarantees the tests rely on.

use painterkit_core::Color;

use crate::image::RasterImage;

/// Resampling algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    /// Copy the nearest source pixel.
    Nearest,
    /// Interpolate between the four surrounding source pixels.
    Bilinear,
}

/// Scales `image` by `factor`, returning a new image.
///
/// The output is `max(1, round(dim * factor))` in each dimension. An empty
/// input yields the empty image rather than an error. The source is never
/// mutated.
pub fn scale(image: &RasterImage, factor: f64, mode: ScaleMode) -> RasterImage {
    if image.is_empty() {
        return RasterImage::empty();
    }

    let width = image.width();
    let height = image.height();
    let new_width = ((width as f64 * factor).round() as usize).max(1);
    let new_height = ((height as f64 * factor).round() as usize).max(1);

    let mut out = RasterImage::filled(new_width, new_height, Color::BLACK);
    for y in 0..new_height {
        let src_y = source_coord(y, height, new_height);
        for x in 0..new_width {
            let src_x = source_coord(x, width, new_width);
            let pixel = match mode {
                ScaleMode::Nearest => nearest_sample(image, src_x, src_y),
                ScaleMode::Bilinear => bilinear_sample(image, src_x, src_y),
            };
            out.set_pixel(x, y, pixel);
        }
    }
    out
}

/// Corner-aligned source coordinate for destination index `dst`.
fn source_coord(dst: usize, dim: usize, new_dim: usize) -> f64 {
    if new_dim > 1 {
        dst as f64 * (dim - 1) as f64 / (new_dim - 1) as f64
    } else {
        0.0
    }
}

fn nearest_sample(image: &RasterImage, src_x: f64, src_y: f64) -> Color {
    let x = (src_x.round() as usize).min(image.width() - 1);
    let y = (src_y.round() as usize).min(image.height() - 1);
    image.pixel(x, y)
}

fn bilinear_sample(image: &RasterImage, src_x: f64, src_y: f64) -> Color {
    let x1 = src_x.floor() as usize;
    let y1 = src_y.floor() as usize;
    let x2 = (x1 + 1).min(image.width() - 1);
    let y2 = (y1 + 1).min(image.height() - 1);
    let dx = src_x - x1 as f64;
    let dy = src_y - y1 as f64;

    let p11 = image.pixel(x1, y1);
    let p21 = image.pixel(x2, y1);
    let p12 = image.pixel(x1, y2);
    let p22 = image.pixel(x2, y2);

    // Each interpolation step truncates to an integer channel value before
    // the next step; the truncation points are part of the contract.
    let channel = |c11: u8, c21: u8, c12: u8, c22: u8| -> u8 {
        let top = lerp_trunc(c11, c21, dx);
        let bottom = lerp_trunc(c12, c22, dx);
        lerp_trunc(top, bottom, dy)
    };

    Color::rgb(
        channel(p11.r, p21.r, p12.r, p22.r),
        channel(p11.g, p21.g, p12.g, p22.g),
        channel(p11.b, p21.b, p12.b, p22.b),
    )
}

fn lerp_trunc(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 * (1.0 - t) + b as f64 * t) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_image() -> RasterImage {
        let mut img = RasterImage::filled(2, 2, Color::BLACK);
        img.set_pixel(0, 0, Color::rgb(255, 0, 0));
        img.set_pixel(1, 0, Color::rgb(0, 255, 0));
        img.set_pixel(0, 1, Color::rgb(0, 0, 255));
        img.set_pixel(1, 1, Color::rgb(255, 255, 255));
        img
    }

    #[test]
    fn test_unit_factor_nearest_is_identity() {
        let img = RasterImage::checkerboard(7, 5, 2, Color::RED, Color::BLUE);
        let out = scale(&img, 1.0, ScaleMode::Nearest);
        assert_eq!(out, img);
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        let out = scale(&RasterImage::empty(), 2.0, ScaleMode::Bilinear);
        assert!(out.is_empty());
    }

    #[test]
    fn test_output_never_collapses_below_one_pixel() {
        let img = RasterImage::filled(4, 4, Color::GREEN);
        let out = scale(&img, 0.01, ScaleMode::Nearest);
        assert_eq!(out.width(), 1);
        assert_eq!(out.height(), 1);
        assert_eq!(out.pixel(0, 0), Color::GREEN);
    }

    #[test]
    fn test_corners_map_to_corners() {
        let img = sample_image();
        for mode in [ScaleMode::Nearest, ScaleMode::Bilinear] {
            let out = scale(&img, 3.0, mode);
            let (w, h) = (out.width(), out.height());
            assert_eq!(out.pixel(0, 0), img.pixel(0, 0));
            assert_eq!(out.pixel(w - 1, 0), img.pixel(1, 0));
            assert_eq!(out.pixel(0, h - 1), img.pixel(0, 1));
            assert_eq!(out.pixel(w - 1, h - 1), img.pixel(1, 1));
        }
    }

    #[test]
    fn test_bilinear_midpoint_truncates() {
        let mut img = RasterImage::filled(2, 1, Color::BLACK);
        img.set_pixel(0, 0, Color::rgb(0, 0, 0));
        img.set_pixel(1, 0, Color::rgb(255, 255, 255));
        // Upscaling 2 -> 3 puts the middle destination pixel exactly halfway:
        // 0 * 0.5 + 255 * 0.5 = 127.5, truncated to 127.
        let out = scale(&img, 1.5, ScaleMode::Bilinear);
        assert_eq!(out.width(), 3);
        assert_eq!(out.pixel(1, 0), Color::rgb(127, 127, 127));
    }

    #[test]
    fn test_downscale_halves_dimensions() {
        let img = RasterImage::filled(8, 6, Color::RED);
        let out = scale(&img, 0.5, ScaleMode::Nearest);
        assert_eq!((out.width(), out.height()), (4, 3));
    }

    proptest! {
        #[test]
        fn bilinear_output_stays_within_contributing_pixels(
            pixels in proptest::collection::vec(0u8..=255, 48),
            factor in 0.2..4.0f64,
        ) {
            let mut img = RasterImage::filled(4, 4, Color::BLACK);
            for y in 0..4 {
                for x in 0..4 {
                    let i = (y * 4 + x) * 3;
                    img.set_pixel(x, y, Color::rgb(pixels[i], pixels[i + 1], pixels[i + 2]));
                }
            }
            let out = scale(&img, factor, ScaleMode::Bilinear);
            for y in 0..out.height() {
                let src_y = source_coord(y, 4, out.height());
                for x in 0..out.width() {
                    let src_x = source_coord(x, 4, out.width());
                    let x1 = src_x.floor() as usize;
                    let y1 = src_y.floor() as usize;
                    let x2 = (x1 + 1).min(3);
                    let y2 = (y1 + 1).min(3);
                    let inputs = [
                        img.pixel(x1, y1),
                        img.pixel(x2, y1),
                        img.pixel(x1, y2),
                        img.pixel(x2, y2),
                    ];
                    let channels = |c: Color| [c.r, c.g, c.b];
                    let got = channels(out.pixel(x, y));
                    for ch in 0..3 {
                        let lo = inputs.iter().map(|&c| channels(c)[ch]).min().unwrap();
                        let hi = inputs.iter().map(|&c| channels(c)[ch]).max().unwrap();
                        prop_assert!(got[ch] >= lo && got[ch] <= hi);
                    }
                }
            }
        }
    }
}
