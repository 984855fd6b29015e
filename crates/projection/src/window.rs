//! Cropping an elevation grid around a geographic center.

use tracing::{debug, warn};

use terrain_common::{ExtentKm, GeoPoint, Grid, PixelPoint, PixelWindow};

use crate::geotransform::GeoTransformContext;
use crate::transform::km_to_degrees;

/// A cropped elevation grid and the center point in its coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedWindow {
    pub window: PixelWindow,
    pub elevation: Grid,
    /// Center pixel, re-based to the window's top-left corner.
    pub center: PixelPoint,
}

impl ExtractedWindow {
    pub fn is_degenerate(&self) -> bool {
        self.window.is_degenerate()
    }
}

/// Requested extent in degrees, capped to the raster's full extent.
pub fn capped_extent_degrees(extent: &ExtentKm, ctx: &GeoTransformContext) -> (f64, f64) {
    let (deg_lon, deg_lat) = km_to_degrees(extent.width, extent.height);
    let (full_lon, full_lat) = ctx.extent_degrees();
    (deg_lon.min(full_lon), deg_lat.min(full_lat))
}

/// Pixel window covering `extent_degrees` around `center`.
///
/// Never fails: corners outside the raster are clamped, and a window that
/// collapses to zero width or height is returned as-is.
pub fn window_for_extent(
    ctx: &GeoTransformContext,
    center: &GeoPoint,
    extent_degrees: (f64, f64),
) -> PixelWindow {
    let half_lon = extent_degrees.0 / 2.0;
    let half_lat = extent_degrees.1 / 2.0;

    let upper_left = ctx.geo_to_pixel(&center.offset(-half_lon, half_lat));
    let lower_right = ctx.geo_to_pixel(&center.offset(half_lon, -half_lat));

    PixelWindow::from_corners(upper_left, lower_right, ctx.width, ctx.height)
}

/// Crop `elevation` to `extent` kilometers around `center`.
pub fn extract_window(
    elevation: &Grid,
    ctx: &GeoTransformContext,
    center: &GeoPoint,
    extent: &ExtentKm,
) -> ExtractedWindow {
    let extent_degrees = capped_extent_degrees(extent, ctx);
    let window = window_for_extent(ctx, center, extent_degrees);

    debug!(
        x0 = window.x0,
        y0 = window.y0,
        x1 = window.x1,
        y1 = window.y1,
        deg_lon = extent_degrees.0,
        deg_lat = extent_degrees.1,
        "Computed pixel window"
    );

    if window.is_degenerate() {
        warn!(
            width = window.width(),
            height = window.height(),
            "Requested extent produced an empty pixel window"
        );
    }

    let center = ctx.geo_to_pixel(center).rebase(window.x0, window.y0);

    ExtractedWindow {
        window,
        elevation: elevation.slice(&window),
        center,
    }
}
