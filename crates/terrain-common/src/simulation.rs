//! Raw simulation dataset as read from disk.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// One named 2-D layer of a simulation output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationLayer {
    pub name: String,
    pub grid: Grid,
}

impl SimulationLayer {
    pub fn new(name: impl Into<String>, grid: Grid) -> Self {
        Self {
            name: name.into(),
            grid,
        }
    }
}

/// Deposit simulation output: layers plus grid-local georeferencing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationDataset {
    /// Where the dataset came from, for diagnostics.
    pub source: String,
    pub layers: Vec<SimulationLayer>,
    /// Origin of the grid relative to the scene center, in the same
    /// linear unit as `cell_size`.
    pub terrain_position: [f64; 2],
    /// Physical length of one grid cell (`simulation_dx`).
    pub cell_size: f64,
}
