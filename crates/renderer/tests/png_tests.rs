//! Tests for PNG encoding.

use std::io::Read;

use renderer::png::{create_png, write_png};
use test_utils::create_test_rgba_pixels;

// ============================================================================
// Helper functions
// ============================================================================

/// Collect the concatenated IDAT payload of an encoded PNG.
fn idat_payload(png: &[u8]) -> Vec<u8> {
    let mut payload = Vec::new();
    let mut pos = 8;
    while pos + 8 <= png.len() {
        let len = u32::from_be_bytes([png[pos], png[pos + 1], png[pos + 2], png[pos + 3]]) as usize;
        let kind = &png[pos + 4..pos + 8];
        if kind == b"IDAT" {
            payload.extend_from_slice(&png[pos + 8..pos + 8 + len]);
        }
        pos += 12 + len;
    }
    payload
}

// ============================================================================
// Encoding tests
// ============================================================================

#[test]
fn test_png_signature_and_header() {
    let pixels = create_test_rgba_pixels(7, 3);
    let png = create_png(&pixels, 7, 3).unwrap();
    assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    assert_eq!(&png[12..16], b"IHDR");
    assert_eq!(u32::from_be_bytes([png[16], png[17], png[18], png[19]]), 7);
    assert_eq!(u32::from_be_bytes([png[20], png[21], png[22], png[23]]), 3);
    assert_eq!(png[24], 8);
    assert_eq!(png[25], 6);
    assert_eq!(&png[png.len() - 8..png.len() - 4], b"IEND");
}

#[test]
fn test_png_pixels_survive_compression() {
    let (width, height) = (5, 4);
    let pixels = create_test_rgba_pixels(width, height);
    let png = create_png(&pixels, width, height).unwrap();

    let idat = idat_payload(&png);
    let mut decoder = flate2::read::ZlibDecoder::new(&idat[..]);
    let mut raw = Vec::new();
    decoder.read_to_end(&mut raw).unwrap();

    assert_eq!(raw.len(), height * (1 + width * 4));
    for row in 0..height {
        let start = row * (1 + width * 4);
        assert_eq!(raw[start], 0, "filter byte");
        assert_eq!(
            &raw[start + 1..start + 1 + width * 4],
            &pixels[row * width * 4..(row + 1) * width * 4]
        );
    }
}

#[test]
fn test_write_png_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("relief.png");
    let pixels = create_test_rgba_pixels(16, 16);
    write_png(&path, &pixels, 16, 16).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes, create_png(&pixels, 16, 16).unwrap());
}
