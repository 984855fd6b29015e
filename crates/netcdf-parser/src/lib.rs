//! Simulation output reader.
//!
//! Reads ash-deposit simulation files (NetCDF or HDF5) into
//! [`terrain_common::SimulationDataset`] values. Every two-dimensional
//! variable in the root group is one deposit layer; the grid's placement
//! comes from the `terrain_position` and `simulation_dx` root attributes.

pub mod error;
pub mod native;
pub mod simulation;

pub use error::{NetCdfError, NetCdfResult};
pub use native::silence_hdf5_errors;
pub use simulation::{
    load_simulation, CELL_SIZE_ATTR, TERRAIN_POSITION_ATTR,
};
