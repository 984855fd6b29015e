//! Core types for simulation grid processing.

use serde::{Deserialize, Serialize};
use terrain_common::{Grid, PixelPoint};

/// A simulation dataset reduced to one summed layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationGrid {
    /// Element-wise sum of all layers, in storage order.
    pub data: Grid,
    /// Grid origin relative to the scene center, in grid cells.
    pub origin_offset: [f64; 2],
    /// Physical length of one cell.
    pub cell_size: f64,
}

/// Result of aligning a simulation grid onto an elevation raster.
#[derive(Debug, Clone, PartialEq)]
pub struct FusionOutput {
    /// Hillshaded elevation under the simulation footprint, rows flipped.
    pub relief: Grid,
    /// Deposit field resampled to the relief's shape; zero cells are NaN.
    pub overlay: Grid,
    /// Grid origin in overlay pixel coordinates.
    pub marker: PixelPoint,
}

impl FusionOutput {
    pub fn is_degenerate(&self) -> bool {
        self.relief.is_empty()
    }
}

/// Interpolation method for resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMethod {
    /// Nearest neighbor (preserves exact values).
    Nearest,
    /// Bilinear interpolation (smooth, slight value changes).
    Bilinear,
    /// Bicubic interpolation (smoothest, more compute).
    #[default]
    Cubic,
}
