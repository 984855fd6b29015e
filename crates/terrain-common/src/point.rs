//! Points in geographic and pixel space.

use serde::{Deserialize, Serialize};

/// A (longitude, latitude) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Offset this point by a displacement in degrees.
    pub fn offset(&self, d_lon: f64, d_lat: f64) -> Self {
        Self::new(self.lon + d_lon, self.lat + d_lat)
    }
}

/// A fractional position on a raster.
///
/// `x` runs along columns and `y` along rows. Values stay fractional
/// until they are used to index a matrix through [`PixelPoint::to_row_col`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Matrix index `(row, col)` for this point.
    ///
    /// Matrices are stored row-major over (row = y, col = x), so the
    /// axes swap here. Fractions are truncated toward zero; negative
    /// coordinates have no index.
    pub fn to_row_col(&self) -> Option<(usize, usize)> {
        if !(self.x.is_finite() && self.y.is_finite()) || self.x < 0.0 || self.y < 0.0 {
            return None;
        }
        Some((self.y as usize, self.x as usize))
    }

    /// Express this point relative to a new origin.
    pub fn rebase(&self, origin_x: usize, origin_y: usize) -> Self {
        Self::new(self.x - origin_x as f64, self.y - origin_y as f64)
    }
}

/// A physical width/height request in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtentKm {
    pub width: f64,
    pub height: f64,
}

impl ExtentKm {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_row_col_swaps_axes() {
        let p = PixelPoint::new(3.7, 9.2);
        assert_eq!(p.to_row_col(), Some((9, 3)));
    }

    #[test]
    fn test_to_row_col_rejects_negative() {
        assert_eq!(PixelPoint::new(-0.5, 1.0).to_row_col(), None);
        assert_eq!(PixelPoint::new(f64::NAN, 1.0).to_row_col(), None);
    }

    #[test]
    fn test_rebase() {
        let p = PixelPoint::new(50.5, 40.0).rebase(10, 20);
        assert_eq!(p, PixelPoint::new(40.5, 20.0));
    }
}
