//! Error types for the relief viewer.

use thiserror::Error;

/// Result type alias using TerrainError.
pub type TerrainResult<T> = Result<T, TerrainError>;

/// Primary error type for relief rendering.
#[derive(Debug, Error)]
pub enum TerrainError {
    // === Geometry Errors ===
    #[error("Invalid raster metadata: {0}")]
    InvalidRasterMetadata(String),

    #[error(
        "Center ({lon}, {lat}) is outside the raster extent \
         [min x = {min_x}, max x = {max_x}, min y = {min_y}, max y = {max_y}]"
    )]
    OutOfBoundsCenter {
        lon: f64,
        lat: f64,
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    },

    #[error("Pixel window has no area: {width}x{height}")]
    DegenerateWindow { width: usize, height: usize },

    // === Simulation Errors ===
    #[error("Simulation dataset has no layers: {0}")]
    EmptySimulationGrid(String),

    #[error("Layer '{layer}' has shape {found:?}, expected {expected:?}")]
    LayerShapeMismatch {
        layer: String,
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Invalid simulation cell size: {0}")]
    InvalidCellSize(f64),

    // === Configuration Errors ===
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // === I/O and Encoding Errors ===
    #[error("Failed to read dataset: {0}")]
    DatasetRead(String),

    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TerrainError {
    /// Whether the pipeline may continue after this error.
    ///
    /// Out-of-bounds centers are replaced by the raster centroid and
    /// degenerate windows render as empty output.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TerrainError::OutOfBoundsCenter { .. } | TerrainError::DegenerateWindow { .. }
        )
    }

    /// Shorthand for an InvalidConfig error.
    pub fn config(msg: impl Into<String>) -> Self {
        TerrainError::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        let oob = TerrainError::OutOfBoundsCenter {
            lon: 10.0,
            lat: 10.0,
            min_x: 0.0,
            max_x: 5.0,
            min_y: 0.0,
            max_y: 5.0,
        };
        assert!(oob.is_recoverable());
        assert!(TerrainError::DegenerateWindow { width: 0, height: 3 }.is_recoverable());
        assert!(!TerrainError::EmptySimulationGrid("ash.h5".into()).is_recoverable());
        assert!(!TerrainError::InvalidRasterMetadata("zero width".into()).is_recoverable());
    }

    #[test]
    fn test_out_of_bounds_message_lists_extrema() {
        let err = TerrainError::OutOfBoundsCenter {
            lon: 10.0,
            lat: 10.0,
            min_x: 0.0,
            max_x: 5.0,
            min_y: -1.0,
            max_y: 5.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("min x = 0"));
        assert!(msg.contains("max x = 5"));
        assert!(msg.contains("min y = -1"));
    }
}
