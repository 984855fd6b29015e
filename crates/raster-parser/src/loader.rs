//! Reading band 1 of an elevation raster.

use std::path::Path;

use gdal::Dataset;
use tracing::{debug, info, warn};

use terrain_common::{Grid, RasterMetadata};

use crate::error::{RasterError, RasterResult};

/// Geotransform GDAL reports for rasters without georeferencing.
pub const DEFAULT_GEO_TRANSFORM: [f64; 6] = [0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

/// Elevation values and the metadata needed to georeference them.
#[derive(Debug, Clone)]
pub struct ElevationRaster {
    pub grid: Grid,
    pub metadata: RasterMetadata,
}

/// Open `path` with GDAL and read band 1.
pub fn load_elevation(path: impl AsRef<Path>) -> RasterResult<ElevationRaster> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(RasterError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("elevation raster not found: {}", path.display()),
        )));
    }

    let dataset = Dataset::open(path)?;
    let raster = from_dataset(&dataset)?;

    info!(
        path = %path.display(),
        width = raster.metadata.width,
        height = raster.metadata.height,
        nodata = ?raster.metadata.nodata,
        "Loaded elevation raster"
    );
    Ok(raster)
}

/// Read band 1 of an already-open dataset.
///
/// Values are read as f64 and stored as f32. No-data cells are kept
/// unchanged; the band's no-data value is recorded in the metadata.
pub fn from_dataset(dataset: &Dataset) -> RasterResult<ElevationRaster> {
    let (width, height) = dataset.raster_size();
    if width == 0 || height == 0 {
        return Err(RasterError::Invalid(format!(
            "raster has zero size: {}x{}",
            width, height
        )));
    }
    if dataset.raster_count() == 0 {
        return Err(RasterError::NoBands(format!("{}x{} dataset", width, height)));
    }

    let geo_transform = match dataset.geo_transform() {
        Ok(gt) => gt,
        Err(e) => {
            warn!(
                error = %e,
                fallback = ?DEFAULT_GEO_TRANSFORM,
                "Raster has no geotransform, using pixel coordinates"
            );
            DEFAULT_GEO_TRANSFORM
        }
    };

    let band = dataset.rasterband(1)?;
    let nodata = band.no_data_value();
    let buffer = band.read_as::<f64>((0, 0), (width, height), (width, height), None)?;
    let data: Vec<f32> = buffer.data().iter().map(|&v| v as f32).collect();

    debug!(width, height, geo_transform = ?geo_transform, "Read band 1");

    let metadata = RasterMetadata::new(geo_transform, width, height).with_nodata(nodata);
    metadata
        .validate()
        .map_err(|e| RasterError::Invalid(e.to_string()))?;

    let grid = Grid::new(data, width, height).map_err(|e| RasterError::Invalid(e.to_string()))?;

    Ok(ElevationRaster { grid, metadata })
}
