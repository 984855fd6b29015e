//! Common types shared across the relief viewer crates.

pub mod bbox;
pub mod error;
pub mod grid;
pub mod point;
pub mod raster;
pub mod request;
pub mod simulation;

pub use bbox::BoundingBox;
pub use error::{TerrainError, TerrainResult};
pub use grid::{Grid, PixelWindow};
pub use point::{ExtentKm, GeoPoint, PixelPoint};
pub use raster::RasterMetadata;
pub use request::RenderRequest;
pub use simulation::{SimulationDataset, SimulationLayer};
