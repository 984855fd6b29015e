//! PNG encoding for RGBA image data (colour type 6, 8 bits per channel).

use std::io::Write;
use std::path::Path;

use crate::error::{RenderError, Result};

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Create a PNG image from RGBA pixel data.
///
/// # Arguments
/// - `pixels`: RGBA pixel data (4 bytes per pixel)
/// - `width`: Image width in pixels
/// - `height`: Image height in pixels
pub fn create_png(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>> {
    let expected = width * height * 4;
    if pixels.len() != expected {
        return Err(RenderError::BufferSize {
            width,
            height,
            expected,
            found: pixels.len(),
        });
    }
    if width == 0 || height == 0 {
        return Err(RenderError::Encode(format!(
            "cannot encode an empty {}x{} image",
            width, height
        )));
    }

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    // IHDR chunk
    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr_data.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr_data.push(8); // bit depth
    ihdr_data.push(6); // color type (RGBA)
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    let idat_data = deflate_idat_rgba(pixels, width, height)
        .map_err(|e| RenderError::Encode(format!("IDAT compression failed: {}", e)))?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Encode `pixels` and write them to `path`.
pub fn write_png(path: impl AsRef<Path>, pixels: &[u8], width: usize, height: usize) -> Result<()> {
    let png = create_png(pixels, width, height)?;
    std::fs::write(path, png)?;
    Ok(())
}

/// Write a PNG chunk
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Deflate RGBA image data for IDAT chunk.
fn deflate_idat_rgba(pixels: &[u8], width: usize, height: usize) -> std::io::Result<Vec<u8>> {
    // Filter byte 0 (none) before each scanline
    let stride = width * 4;
    let mut uncompressed = Vec::with_capacity(height * (1 + stride));
    for row in pixels.chunks_exact(stride).take(height) {
        uncompressed.push(0);
        uncompressed.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(&uncompressed)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_buffer() {
        let err = create_png(&[0u8; 12], 2, 2).unwrap_err();
        assert!(matches!(err, RenderError::BufferSize { expected: 16, .. }));
    }

    #[test]
    fn test_rejects_empty_image() {
        assert!(create_png(&[], 0, 5).is_err());
    }

    #[test]
    fn test_chunk_layout() {
        let mut out = Vec::new();
        write_chunk(&mut out, b"IEND", &[]);
        assert_eq!(&out[0..4], &[0, 0, 0, 0]);
        assert_eq!(&out[4..8], b"IEND");
        // Well-known CRC of an empty IEND chunk
        assert_eq!(&out[8..12], &[0xAE, 0x42, 0x60, 0x82]);
    }
}
