//! Interpolation methods for grid resampling.
//!
//! Sample positions are corner-aligned: the first and last source cells
//! map exactly onto the first and last destination cells.

use terrain_common::Grid;

use crate::error::{GridProcessorError, Result};
use crate::types::InterpolationMethod;

/// Nearest neighbor interpolation.
///
/// Returns the value of the nearest grid point.
pub fn nearest_interpolate(data: &[f32], width: usize, height: usize, x: f64, y: f64) -> f32 {
    let col = x.round() as usize;
    let row = y.round() as usize;

    if col >= width || row >= height {
        return f32::NAN;
    }

    data[row * width + col]
}

/// Bilinear interpolation.
///
/// Smoothly interpolates between the four nearest grid points.
pub fn bilinear_interpolate(data: &[f32], width: usize, height: usize, x: f64, y: f64) -> f32 {
    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;

    if x0 >= width || y0 >= height {
        return f32::NAN;
    }

    let x1 = (x0 + 1).min(width - 1);
    let y1 = (y0 + 1).min(height - 1);

    let xf = (x - x0 as f64) as f32;
    let yf = (y - y0 as f64) as f32;

    let v00 = data[y0 * width + x0];
    let v10 = data[y0 * width + x1];
    let v01 = data[y1 * width + x0];
    let v11 = data[y1 * width + x1];

    if v00.is_nan() || v10.is_nan() || v01.is_nan() || v11.is_nan() {
        return f32::NAN;
    }

    let top = v00 * (1.0 - xf) + v10 * xf;
    let bottom = v01 * (1.0 - xf) + v11 * xf;
    top * (1.0 - yf) + bottom * yf
}

/// Bicubic interpolation over the 4x4 neighborhood.
///
/// Edge cells are replicated outward. Falls back to bilinear when the
/// neighborhood contains NaN.
pub fn cubic_interpolate(data: &[f32], width: usize, height: usize, x: f64, y: f64) -> f32 {
    let xi = x.floor() as i64;
    let yi = y.floor() as i64;

    let xf = (x - xi as f64) as f32;
    let yf = (y - yi as f64) as f32;

    let mut values = [[0.0f32; 4]; 4];
    for (j, row) in values.iter_mut().enumerate() {
        let py = (yi + j as i64 - 1).clamp(0, height as i64 - 1) as usize;
        for (i, value) in row.iter_mut().enumerate() {
            let px = (xi + i as i64 - 1).clamp(0, width as i64 - 1) as usize;
            *value = data[py * width + px];
            if value.is_nan() {
                return bilinear_interpolate(data, width, height, x, y);
            }
        }
    }

    let mut row_values = [0.0f32; 4];
    for (out, row) in row_values.iter_mut().zip(values.iter()) {
        *out = cubic_1d(row[0], row[1], row[2], row[3], xf);
    }

    cubic_1d(row_values[0], row_values[1], row_values[2], row_values[3], yf)
}

/// 1D cubic interpolation using Catmull-Rom spline.
fn cubic_1d(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;

    let a = -0.5 * p0 + 1.5 * p1 - 1.5 * p2 + 0.5 * p3;
    let b = p0 - 2.5 * p1 + 2.0 * p2 - 0.5 * p3;
    let c = -0.5 * p0 + 0.5 * p2;
    let d = p1;

    a * t3 + b * t2 + c * t + d
}

/// Resample raw row-major data to a new size.
///
/// Always returns exactly `dst_width * dst_height` values. An empty
/// source yields an all-NaN result.
pub fn resample_grid(
    data: &[f32],
    src_width: usize,
    src_height: usize,
    dst_width: usize,
    dst_height: usize,
    method: InterpolationMethod,
) -> Vec<f32> {
    let mut output = vec![f32::NAN; dst_width * dst_height];
    if src_width == 0 || src_height == 0 || output.is_empty() {
        return output;
    }

    let scale_x = (src_width - 1) as f64 / (dst_width - 1).max(1) as f64;
    let scale_y = (src_height - 1) as f64 / (dst_height - 1).max(1) as f64;

    for dy in 0..dst_height {
        for dx in 0..dst_width {
            let sx = dx as f64 * scale_x;
            let sy = dy as f64 * scale_y;

            let value = match method {
                InterpolationMethod::Nearest => {
                    nearest_interpolate(data, src_width, src_height, sx, sy)
                }
                InterpolationMethod::Bilinear => {
                    bilinear_interpolate(data, src_width, src_height, sx, sy)
                }
                InterpolationMethod::Cubic => {
                    cubic_interpolate(data, src_width, src_height, sx, sy)
                }
            };

            output[dy * dst_width + dx] = value;
        }
    }

    output
}

/// Resample a [`Grid`] to `width` x `height`.
pub fn resample(
    grid: &Grid,
    width: usize,
    height: usize,
    method: InterpolationMethod,
) -> Result<Grid> {
    let data = resample_grid(
        grid.data(),
        grid.width(),
        grid.height(),
        width,
        height,
        method,
    );
    Grid::new(data, width, height)
        .map_err(|e| GridProcessorError::InterpolationError(e.to_string()))
}
