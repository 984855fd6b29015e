//! Mapping between raster pixels, geographic coordinates and kilometers.
//!
//! Only the affine geotransform carried by the raster is supported; there
//! is no reprojection between coordinate reference systems.

pub mod context;
pub mod geotransform;
pub mod transform;
pub mod window;

pub use context::{CenterResolution, RenderContext};
pub use geotransform::{GeoTransform, GeoTransformContext};
pub use transform::{
    geo_to_pixel, km_to_degrees, overlay_footprint_to_degrees, overlay_offset_to_degrees, pixel_to_geo,
    KM_PER_DEGREE_LAT, KM_PER_DEGREE_LON_EQUATOR, OVERLAY_KM_PER_DEGREE_LAT,
};
pub use window::{capped_extent_degrees, extract_window, window_for_extent, ExtractedWindow};
