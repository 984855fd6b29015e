//! Conversions between geographic points, pixel points and distances.
//!
//! The kilometer/degree conversions are spherical small-angle
//! approximations. They are accurate near the reference latitude only and
//! are not a map projection.

use terrain_common::{GeoPoint, PixelPoint};

use crate::geotransform::GeoTransformContext;

/// Kilometers per degree of latitude for width/height requests.
pub const KM_PER_DEGREE_LAT: f64 = 110.574;

/// Kilometers per degree of longitude at the equator.
pub const KM_PER_DEGREE_LON_EQUATOR: f64 = 111.320;

/// Kilometers per degree of latitude used when placing the simulation grid.
///
/// Differs from [`KM_PER_DEGREE_LAT`] by exactly one kilometer; both
/// values are kept until a domain expert confirms which one is intended.
pub const OVERLAY_KM_PER_DEGREE_LAT: f64 = 111.574;

/// Convert a geographic point to a fractional pixel position.
///
/// `x` is measured from the western edge and `y` from the northern edge,
/// since raster rows increase downward while latitude increases upward.
/// No clamping happens here.
pub fn geo_to_pixel(point: &GeoPoint, ctx: &GeoTransformContext) -> PixelPoint {
    let x = (point.lon - ctx.bbox.min_x).abs() / ctx.step_x;
    let y = (point.lat - ctx.bbox.max_y).abs() / ctx.step_y;
    PixelPoint::new(x, y)
}

/// Inverse of [`geo_to_pixel`] for pixels inside the raster.
pub fn pixel_to_geo(pixel: &PixelPoint, ctx: &GeoTransformContext) -> GeoPoint {
    GeoPoint::new(
        ctx.bbox.min_x + pixel.x * ctx.step_x,
        ctx.bbox.max_y - pixel.y * ctx.step_y,
    )
}

/// Convert a physical width/height in kilometers to `(deg_lon, deg_lat)`.
///
/// The longitude divisor is evaluated at the latitude span itself,
/// `cos(deg_lat)`, so narrow requests behave as if taken near the equator.
pub fn km_to_degrees(width_km: f64, height_km: f64) -> (f64, f64) {
    let deg_lat = height_km / KM_PER_DEGREE_LAT;
    let deg_lon = width_km / (KM_PER_DEGREE_LON_EQUATOR * deg_lat.to_radians().cos());
    (deg_lon, deg_lat)
}

/// Convert the simulation grid's origin offset to `(deg_lon, deg_lat)`.
///
/// Uses [`OVERLAY_KM_PER_DEGREE_LAT`], and evaluates the longitude divisor
/// at the x offset expressed in overlay degrees.
pub fn overlay_offset_to_degrees(offset_x: f64, offset_y: f64) -> (f64, f64) {
    let deg_lat = offset_y / OVERLAY_KM_PER_DEGREE_LAT;
    let lon_reference = (offset_x / OVERLAY_KM_PER_DEGREE_LAT).to_radians();
    let deg_lon = offset_x / (KM_PER_DEGREE_LON_EQUATOR * lon_reference.cos());
    (deg_lon, deg_lat)
}

/// Convert the simulation grid's footprint to `(deg_lon, deg_lat)`.
///
/// `cols` and `rows` are cell counts taken as kilometers. Rows use
/// [`OVERLAY_KM_PER_DEGREE_LAT`]; the longitude divisor is evaluated at the
/// resulting latitude span.
pub fn overlay_footprint_to_degrees(cols: f64, rows: f64) -> (f64, f64) {
    let deg_lat = rows / OVERLAY_KM_PER_DEGREE_LAT;
    let deg_lon = cols / (KM_PER_DEGREE_LON_EQUATOR * deg_lat.to_radians().cos());
    (deg_lon, deg_lat)
}
