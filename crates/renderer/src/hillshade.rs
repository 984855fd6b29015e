//! Shaded relief from an elevation grid.
//!
//! Illumination follows the classic slope/aspect formulation:
//!
//! ```text
//! slope  = pi/2 - atan(sqrt(gx^2 + gy^2))
//! aspect = atan2(-gx, gy)
//! shaded = sin(alt) sin(slope) + cos(alt) cos(slope) cos(az - aspect)
//! ```
//!
//! where `gx` is the gradient along rows and `gy` along columns. The result
//! is rescaled from `[-1, 1]` to `[0, 255]`.

use rayon::prelude::*;
use terrain_common::Grid;

/// Gradient of `values` at `i` along a 1-D axis with unit spacing.
///
/// Central differences inside, one-sided first differences at both ends,
/// zero for an axis of length 1.
#[inline]
fn axis_gradient(len: usize, i: usize, at: impl Fn(usize) -> f64) -> f64 {
    if len < 2 {
        0.0
    } else if i == 0 {
        at(1) - at(0)
    } else if i == len - 1 {
        at(len - 1) - at(len - 2)
    } else {
        (at(i + 1) - at(i - 1)) / 2.0
    }
}

/// Compute a hillshade image from `elevation`.
///
/// Angles are in degrees. Output values lie in `[0, 255]` for finite
/// input; cells whose neighborhood contains NaN stay NaN.
pub fn hillshade(elevation: &Grid, azimuth_deg: f64, altitude_deg: f64) -> Grid {
    let width = elevation.width();
    let height = elevation.height();
    if elevation.is_empty() {
        return Grid::filled(width, height, 0.0);
    }

    let azimuth = azimuth_deg.to_radians();
    let altitude = altitude_deg.to_radians();
    let (sin_alt, cos_alt) = altitude.sin_cos();
    let data = elevation.data();

    let mut out = Grid::zeros(width, height);
    out.data_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(row, out_row)| {
            for (col, cell) in out_row.iter_mut().enumerate() {
                let gx = axis_gradient(height, row, |r| data[r * width + col] as f64);
                let gy = axis_gradient(width, col, |c| data[row * width + c] as f64);

                let slope = std::f64::consts::FRAC_PI_2 - (gx * gx + gy * gy).sqrt().atan();
                let aspect = (-gx).atan2(gy);
                let shaded =
                    sin_alt * slope.sin() + cos_alt * slope.cos() * (azimuth - aspect).cos();

                let value = 255.0 * (shaded + 1.0) / 2.0;
                *cell = if value.is_nan() {
                    f32::NAN
                } else {
                    value.clamp(0.0, 255.0) as f32
                };
            }
        });

    out
}
