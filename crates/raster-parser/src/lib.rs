//! Elevation raster reader.
//!
//! Opens any GDAL-readable raster and returns band 1 as a [`Grid`] together
//! with its [`RasterMetadata`].
//!
//! [`Grid`]: terrain_common::Grid
//! [`RasterMetadata`]: terrain_common::RasterMetadata

pub mod error;
pub mod loader;

pub use error::{RasterError, RasterResult};
pub use loader::{from_dataset, load_elevation, ElevationRaster, DEFAULT_GEO_TRANSFORM};
