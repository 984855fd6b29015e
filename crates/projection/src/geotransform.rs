//! Affine geotransform and the pixel/geographic mapping derived from it.
//!
//! A GDAL-style geotransform maps a pixel position (col, row) to
//! geographic coordinates:
//!
//! ```text
//! x = origin_x + col * pixel_width + row * row_rotation
//! y = origin_y + col * col_rotation + row * pixel_height
//! ```
//!
//! [`GeoTransformContext`] reduces this to an axis-aligned bounding box
//! and a per-axis step size, which is all the windowing code needs.

use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use tracing::debug;

use terrain_common::{
    BoundingBox, GeoPoint, PixelPoint, RasterMetadata, TerrainError, TerrainResult,
};

use crate::transform;

/// The 6-term affine transform of a raster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoTransform {
    origin: Vector2<f64>,
    linear: Matrix2<f64>,
}

impl GeoTransform {
    /// Build from GDAL ordering
    /// `[origin_x, pixel_width, row_rotation, origin_y, col_rotation, pixel_height]`.
    pub fn from_gdal(gt: [f64; 6]) -> Self {
        Self {
            origin: Vector2::new(gt[0], gt[3]),
            linear: Matrix2::new(gt[1], gt[2], gt[4], gt[5]),
        }
    }

    /// Geographic position of a (possibly fractional) pixel corner.
    pub fn apply(&self, col: f64, row: f64) -> (f64, f64) {
        let geo = self.origin + self.linear * Vector2::new(col, row);
        (geo.x, geo.y)
    }

    /// The four raster corners in geographic space.
    pub fn corners(&self, width: usize, height: usize) -> [(f64, f64); 4] {
        let w = width as f64;
        let h = height as f64;
        [
            self.apply(0.0, 0.0),
            self.apply(w, 0.0),
            self.apply(0.0, h),
            self.apply(w, h),
        ]
    }
}

/// Bounding box and step sizes of a raster, computed once per render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoTransformContext {
    pub bbox: BoundingBox,
    /// Geographic distance per pixel along x.
    pub step_x: f64,
    /// Geographic distance per pixel along y.
    pub step_y: f64,
    pub width: usize,
    pub height: usize,
}

impl GeoTransformContext {
    /// Derive the context from raster metadata.
    ///
    /// The bounding box is the min/max over all four transformed corners,
    /// so flipped axes (negative pixel height on north-up rasters) need
    /// no special handling.
    pub fn from_metadata(metadata: &RasterMetadata) -> TerrainResult<Self> {
        metadata.validate()?;

        let transform = GeoTransform::from_gdal(metadata.geo_transform);
        let bbox = BoundingBox::enclosing(&transform.corners(metadata.width, metadata.height));

        if !bbox.is_valid() || bbox.width() <= 0.0 || bbox.height() <= 0.0 {
            return Err(TerrainError::InvalidRasterMetadata(format!(
                "geotransform {:?} yields an empty extent ({})",
                metadata.geo_transform, bbox
            )));
        }

        let step_x = bbox.width().abs() / metadata.width as f64;
        let step_y = bbox.height().abs() / metadata.height as f64;

        debug!(
            min_x = bbox.min_x,
            max_x = bbox.max_x,
            min_y = bbox.min_y,
            max_y = bbox.max_y,
            step_x,
            step_y,
            "Derived raster geo context"
        );

        Ok(Self {
            bbox,
            step_x,
            step_y,
            width: metadata.width,
            height: metadata.height,
        })
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.bbox.contains(point)
    }

    pub fn centroid(&self) -> GeoPoint {
        self.bbox.centroid()
    }

    /// Full raster extent in degrees as `(lon, lat)`.
    pub fn extent_degrees(&self) -> (f64, f64) {
        (self.bbox.width().abs(), self.bbox.height().abs())
    }

    /// Accept a center point, or report it as out of bounds with the
    /// raster's extrema so the caller can fall back to the centroid.
    pub fn locate_center(&self, point: GeoPoint) -> TerrainResult<GeoPoint> {
        if self.contains(&point) {
            return Ok(point);
        }
        Err(TerrainError::OutOfBoundsCenter {
            lon: point.lon,
            lat: point.lat,
            min_x: self.bbox.min_x,
            max_x: self.bbox.max_x,
            min_y: self.bbox.min_y,
            max_y: self.bbox.max_y,
        })
    }

    pub fn geo_to_pixel(&self, point: &GeoPoint) -> PixelPoint {
        transform::geo_to_pixel(point, self)
    }

    pub fn pixel_to_geo(&self, pixel: &PixelPoint) -> GeoPoint {
        transform::pixel_to_geo(pixel, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_north_up_bbox() {
        let meta = RasterMetadata::north_up(0.0, 0.0, 1.0, -1.0, 100, 100);
        let ctx = GeoTransformContext::from_metadata(&meta).unwrap();
        assert_eq!(ctx.bbox.min_x, 0.0);
        assert_eq!(ctx.bbox.max_x, 100.0);
        assert_eq!(ctx.bbox.min_y, -100.0);
        assert_eq!(ctx.bbox.max_y, 0.0);
        assert_eq!(ctx.step_x, 1.0);
        assert_eq!(ctx.step_y, 1.0);
    }

    #[test]
    fn test_south_up_bbox_matches_north_up_extent() {
        let meta = RasterMetadata::north_up(0.0, -100.0, 1.0, 1.0, 100, 100);
        let ctx = GeoTransformContext::from_metadata(&meta).unwrap();
        assert_eq!(ctx.bbox.min_y, -100.0);
        assert_eq!(ctx.bbox.max_y, 0.0);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let meta = RasterMetadata::north_up(0.0, 0.0, 1.0, -1.0, 100, 0);
        assert!(matches!(
            GeoTransformContext::from_metadata(&meta),
            Err(TerrainError::InvalidRasterMetadata(_))
        ));
    }

    #[test]
    fn test_zero_pixel_size_is_rejected() {
        let meta = RasterMetadata::north_up(0.0, 0.0, 0.0, -1.0, 10, 10);
        assert!(GeoTransformContext::from_metadata(&meta).is_err());
    }

    #[test]
    fn test_locate_center_outside() {
        let meta = RasterMetadata::north_up(0.0, 5.0, 0.05, -0.05, 100, 100);
        let ctx = GeoTransformContext::from_metadata(&meta).unwrap();
        let err = ctx.locate_center(GeoPoint::new(10.0, 10.0)).unwrap_err();
        assert!(err.is_recoverable());
        assert!(ctx.locate_center(GeoPoint::new(2.0, 3.0)).is_ok());
    }
}
