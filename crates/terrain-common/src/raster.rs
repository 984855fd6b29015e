//! Elevation raster metadata.

use serde::{Deserialize, Serialize};

use crate::error::{TerrainError, TerrainResult};

/// Affine geotransform plus pixel dimensions of a raster.
///
/// `geo_transform` follows the GDAL ordering:
/// `[origin_x, pixel_width, row_rotation, origin_y, col_rotation, pixel_height]`.
/// Scale factors may be negative; north-up rasters have `pixel_height < 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterMetadata {
    pub geo_transform: [f64; 6],
    pub width: usize,
    pub height: usize,
    /// No-data value declared by the source band, if any.
    pub nodata: Option<f64>,
}

impl RasterMetadata {
    pub fn new(geo_transform: [f64; 6], width: usize, height: usize) -> Self {
        Self {
            geo_transform,
            width,
            height,
            nodata: None,
        }
    }

    pub fn with_nodata(mut self, nodata: Option<f64>) -> Self {
        self.nodata = nodata;
        self
    }

    /// North-up raster with no rotation terms.
    pub fn north_up(
        origin_x: f64,
        origin_y: f64,
        pixel_width: f64,
        pixel_height: f64,
        width: usize,
        height: usize,
    ) -> Self {
        Self::new(
            [origin_x, pixel_width, 0.0, origin_y, 0.0, pixel_height],
            width,
            height,
        )
    }

    pub fn origin(&self) -> (f64, f64) {
        (self.geo_transform[0], self.geo_transform[3])
    }

    pub fn pixel_size(&self) -> (f64, f64) {
        (self.geo_transform[1], self.geo_transform[5])
    }

    /// Reject rasters with no pixels or non-finite transform terms.
    pub fn validate(&self) -> TerrainResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(TerrainError::InvalidRasterMetadata(format!(
                "raster has zero size: {}x{}",
                self.width, self.height
            )));
        }
        if self.geo_transform.iter().any(|v| !v.is_finite()) {
            return Err(TerrainError::InvalidRasterMetadata(format!(
                "geotransform has non-finite terms: {:?}",
                self.geo_transform
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_zero_size() {
        let meta = RasterMetadata::north_up(0.0, 0.0, 1.0, -1.0, 0, 10);
        assert!(matches!(
            meta.validate(),
            Err(TerrainError::InvalidRasterMetadata(_))
        ));
    }

    #[test]
    fn test_accessors() {
        let meta = RasterMetadata::north_up(6.5, 46.0, 0.001, -0.001, 200, 100);
        assert_eq!(meta.origin(), (6.5, 46.0));
        assert_eq!(meta.pixel_size(), (0.001, -0.001));
        assert!(meta.validate().is_ok());
    }
}
