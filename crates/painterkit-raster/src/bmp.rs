//! Decode-only reader for uncompressed Windows BMP files.
//!
//! Supports the 14-byte BITMAPFILEHEADER followed by the 40-byte
//! BITMAPINFOHEADER. Pixel data is read for 24-bpp (B,G,R order) and 8-bpp
//! (grayscale) images; any other depth decodes to a neutral-gray fill
//! instead of failing. Rows are stored bottom-to-top in the file and are
//! flipped so row 0 of the result is the visual top row.

use std::path::Path;

use painterkit_core::{Color, DecodeError};
use tracing::debug;

use crate::image::RasterImage;

/// Byte length of the BITMAPFILEHEADER.
const FILE_HEADER_LEN: usize = 14;
/// Byte length of the BITMAPINFOHEADER.
const INFO_HEADER_LEN: usize = 40;
/// Fill used for bit depths the reader does not interpret.
const UNSUPPORTED_DEPTH_FILL: Color = Color::rgb(128, 128, 128);

/// Decodes BMP bytes into a [`RasterImage`].
pub fn decode(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    if bytes.len() < 2 || &bytes[0..2] != b"BM" {
        return Err(DecodeError::NotABmp);
    }
    if bytes.len() < FILE_HEADER_LEN + 4 {
        return Err(DecodeError::Truncated {
            needed: FILE_HEADER_LEN + INFO_HEADER_LEN,
            available: bytes.len(),
        });
    }

    let dib_size = read_u32(bytes, 14);
    if dib_size != INFO_HEADER_LEN as u32 {
        return Err(DecodeError::UnsupportedHeader { size: dib_size });
    }
    if bytes.len() < FILE_HEADER_LEN + INFO_HEADER_LEN {
        return Err(DecodeError::Truncated {
            needed: FILE_HEADER_LEN + INFO_HEADER_LEN,
            available: bytes.len(),
        });
    }

    let data_offset = read_u32(bytes, 10) as usize;
    let width = read_i32(bytes, 18);
    let height = read_i32(bytes, 22);
    let bpp = read_u16(bytes, 28);
    // Bytes 30..34 hold the compression tag; only uncompressed data is
    // expected, so the tag is read past and ignored.

    if width <= 0 || height <= 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }
    let width = width as usize;
    let height = height as usize;

    let image = match bpp {
        24 | 8 => read_pixel_rows(bytes, data_offset, width, height, bpp)?,
        other => {
            debug!(bpp = other, "unsupported bit depth, filling with neutral gray");
            RasterImage::filled(width, height, UNSUPPORTED_DEPTH_FILL)
        }
    };

    debug!(width, height, bpp, "decoded BMP");
    Ok(image)
}

/// Reads a BMP file from disk. I/O failures surface as decode failures.
pub fn load_bmp(path: impl AsRef<Path>) -> Result<RasterImage, DecodeError> {
    let bytes = std::fs::read(path.as_ref())?;
    decode(&bytes)
}

fn read_pixel_rows(
    bytes: &[u8],
    data_offset: usize,
    width: usize,
    height: usize,
    bpp: u16,
) -> Result<RasterImage, DecodeError> {
    // Rows are padded to the next multiple of 4 bytes. Saturating math keeps
    // absurd header values in the Truncated path instead of overflowing.
    let row_size = (width * bpp as usize + 31) / 32 * 4;
    let needed = row_size
        .saturating_mul(height)
        .saturating_add(data_offset);
    if bytes.len() < needed {
        return Err(DecodeError::Truncated {
            needed,
            available: bytes.len(),
        });
    }

    let mut image = RasterImage::filled(width, height, Color::BLACK);
    for dst_y in 0..height {
        // The file stores the bottom row first.
        let src_row = height - 1 - dst_y;
        let row = &bytes[data_offset + src_row * row_size..][..row_size];
        for x in 0..width {
            let color = match bpp {
                24 => {
                    let i = x * 3;
                    // Stored B,G,R; reorder to R,G,B.
                    Color::rgb(row[i + 2], row[i + 1], row[i])
                }
                _ => {
                    let v = row[x];
                    Color::rgb(v, v, v)
                }
            };
            image.set_pixel(x, dst_y, color);
        }
    }
    Ok(image)
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn read_i32(bytes: &[u8], offset: usize) -> i32 {
    read_u32(bytes, offset) as i32
}
