//! Operations on RGBA pixel buffers.

use crate::style::Color;

/// Alpha-blend `overlay` onto `base` in place (Porter-Duff "over").
///
/// Both buffers must hold the same number of RGBA pixels.
pub fn composite_over(base: &mut [u8], overlay: &[u8]) {
    for (dst, src) in base.chunks_exact_mut(4).zip(overlay.chunks_exact(4)) {
        let src_a = src[3] as f32 / 255.0;
        if src_a <= 0.0 {
            continue;
        }
        let dst_a = dst[3] as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        for c in 0..3 {
            let blended =
                (src[c] as f32 * src_a + dst[c] as f32 * dst_a * (1.0 - src_a)) / out_a;
            dst[c] = blended.round().clamp(0.0, 255.0) as u8;
        }
        dst[3] = (out_a * 255.0).round() as u8;
    }
}

/// Paint a filled disc of `radius` pixels centered at `(x, y)`.
///
/// Parts of the disc outside the image are skipped.
pub fn draw_marker(
    pixels: &mut [u8],
    width: usize,
    height: usize,
    x: i64,
    y: i64,
    radius: i64,
    color: Color,
) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > r2 {
                continue;
            }
            let px = x + dx;
            let py = y + dy;
            if px < 0 || py < 0 || px >= width as i64 || py >= height as i64 {
                continue;
            }
            let idx = (py as usize * width + px as usize) * 4;
            pixels[idx..idx + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }
}

/// Reverse the row order of an RGBA image in place.
pub fn flip_vertical(pixels: &mut [u8], width: usize, height: usize) {
    let stride = width * 4;
    for row in 0..height / 2 {
        let (top, bottom) = pixels.split_at_mut((height - 1 - row) * stride);
        top[row * stride..(row + 1) * stride].swap_with_slice(&mut bottom[..stride]);
    }
}
