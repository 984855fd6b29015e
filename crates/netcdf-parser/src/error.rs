//! Error types for NetCDF parsing operations.

use terrain_common::TerrainError;
use thiserror::Error;

/// Result type for NetCDF parser operations.
pub type NetCdfResult<T> = Result<T, NetCdfError>;

/// Error types for NetCDF parsing.
#[derive(Error, Debug)]
pub enum NetCdfError {
    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Missing required variable or attribute
    #[error("Missing required data: {0}")]
    MissingData(String),

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    /// Error reported by libnetcdf
    #[error("NetCDF library error: {0}")]
    Library(#[from] netcdf::Error),
}

impl From<NetCdfError> for TerrainError {
    fn from(err: NetCdfError) -> Self {
        match err {
            NetCdfError::IoError(e) => TerrainError::Io(e),
            other => TerrainError::DatasetRead(other.to_string()),
        }
    }
}
