//! Error types for elevation raster loading.

use terrain_common::TerrainError;
use thiserror::Error;

/// Result type for raster loading.
pub type RasterResult<T> = Result<T, RasterError>;

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GDAL error: {0}")]
    Gdal(#[from] gdal::errors::GdalError),

    #[error("Raster has no bands: {0}")]
    NoBands(String),

    #[error("Invalid raster: {0}")]
    Invalid(String),
}

impl From<RasterError> for TerrainError {
    fn from(err: RasterError) -> Self {
        match err {
            RasterError::Io(e) => TerrainError::Io(e),
            RasterError::Invalid(msg) => TerrainError::InvalidRasterMetadata(msg),
            other => TerrainError::DatasetRead(other.to_string()),
        }
    }
}
