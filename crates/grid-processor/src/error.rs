//! Error types for grid processing.

use terrain_common::TerrainError;
use thiserror::Error;

/// Errors that can occur while preparing or fusing a simulation grid.
#[derive(Error, Debug)]
pub enum GridProcessorError {
    /// The dataset has no layers, or its layers have no cells.
    #[error("empty simulation grid: {0}")]
    EmptyGrid(String),

    /// A layer's shape differs from the first layer's.
    #[error("layer '{layer}' has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        layer: String,
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// The simulation cell size is zero, negative or not finite.
    #[error("invalid simulation cell size: {0}")]
    InvalidCellSize(f64),

    /// Invalid georeferencing attributes on the simulation grid.
    #[error("invalid grid metadata: {0}")]
    InvalidMetadata(String),

    /// Interpolation error.
    #[error("interpolation error: {0}")]
    InterpolationError(String),
}

impl GridProcessorError {
    /// Create an EmptyGrid error.
    pub fn empty(msg: impl Into<String>) -> Self {
        Self::EmptyGrid(msg.into())
    }

    /// Create an InvalidMetadata error.
    pub fn invalid_metadata(msg: impl Into<String>) -> Self {
        Self::InvalidMetadata(msg.into())
    }
}

impl From<GridProcessorError> for TerrainError {
    fn from(err: GridProcessorError) -> Self {
        match err {
            GridProcessorError::EmptyGrid(msg) => TerrainError::EmptySimulationGrid(msg),
            GridProcessorError::ShapeMismatch {
                layer,
                expected,
                found,
            } => TerrainError::LayerShapeMismatch {
                layer,
                expected,
                found,
            },
            GridProcessorError::InvalidCellSize(dx) => TerrainError::InvalidCellSize(dx),
            GridProcessorError::InvalidMetadata(msg) => TerrainError::DatasetRead(msg),
            GridProcessorError::InterpolationError(msg) => TerrainError::Render(msg),
        }
    }
}

/// Result type for grid processor operations.
pub type Result<T> = std::result::Result<T, GridProcessorError>;
