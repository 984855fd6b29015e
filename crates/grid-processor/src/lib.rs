//! Simulation grid processing: layer summation, resampling and fusion
//! with an elevation raster.
//!
//! # Pipeline
//!
//! ```text
//! SimulationDataset
//!      │
//!      ▼
//! sum_layers() ──► SimulationGrid (summed, origin offset in cells)
//!      │
//!      ▼
//! fuse(elevation, geo, center)
//!      │
//!      ├─► footprint_window(): origin + extent in raster pixels
//!      │
//!      ├─► hillshade the covered elevation, flip rows
//!      │
//!      └─► resample the grid to the relief shape, mask zeros
//!               │
//!               ▼
//!          FusionOutput { relief, overlay, marker }
//! ```

pub mod error;
pub mod fusion;
pub mod interpolation;
pub mod summation;
pub mod types;

pub use error::{GridProcessorError, Result};
pub use fusion::{footprint_window, fuse, FusionParams};
pub use interpolation::{
    bilinear_interpolate, cubic_interpolate, nearest_interpolate, resample, resample_grid,
};
pub use summation::sum_layers;
pub use types::{FusionOutput, InterpolationMethod, SimulationGrid};
