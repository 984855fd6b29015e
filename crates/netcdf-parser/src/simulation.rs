//! Loading ash-deposit simulation output.

use std::path::Path;

use tracing::{debug, info, warn};

use terrain_common::{Grid, SimulationDataset, SimulationLayer};

use crate::error::{NetCdfError, NetCdfResult};
use crate::native::{get_f32_attr, get_global_f64_values, silence_hdf5_errors};

/// Root attribute holding the scene center's offset from the grid origin, in metres.
pub const TERRAIN_POSITION_ATTR: &str = "terrain_position";

/// Root attribute holding the grid cell size, in metres.
pub const CELL_SIZE_ATTR: &str = "simulation_dx";

/// Load every 2-D variable in the root group as a deposit layer.
///
/// Layers are returned sorted by variable name. Cells equal to a layer's
/// `_FillValue` are read as zero deposit. Variables of any other rank
/// (coordinate axes, scalars) are skipped.
pub fn load_simulation(path: impl AsRef<Path>) -> NetCdfResult<SimulationDataset> {
    let path = path.as_ref();
    silence_hdf5_errors();

    if !path.exists() {
        return Err(NetCdfError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("simulation file not found: {}", path.display()),
        )));
    }

    let file = netcdf::open(path)?;

    let terrain_position = read_terrain_position(&file)?;
    let cell_size = read_cell_size(&file)?;

    let mut layers = Vec::new();
    for var in file.variables() {
        let name = var.name();
        let dims = var.dimensions();
        if dims.len() != 2 {
            debug!(variable = %name, rank = dims.len(), "Skipping non-grid variable");
            continue;
        }
        let rows = dims[0].len();
        let cols = dims[1].len();

        let mut values: Vec<f32> = var.get_values(..).map_err(|e| {
            NetCdfError::InvalidFormat(format!("Failed to read {}: {}", name, e))
        })?;

        if let Some(fill) = get_f32_attr(&var, "_FillValue") {
            for v in values.iter_mut().filter(|v| **v == fill) {
                *v = 0.0;
            }
        }

        let grid = Grid::new(values, cols, rows)
            .map_err(|e| NetCdfError::InvalidFormat(format!("{}: {}", name, e)))?;
        debug!(variable = %name, rows, cols, "Read simulation layer");
        layers.push(SimulationLayer::new(name, grid));
    }

    if layers.is_empty() {
        warn!(path = %path.display(), "Simulation file contains no 2-D variables");
    }
    layers.sort_by(|a, b| a.name.cmp(&b.name));

    info!(
        path = %path.display(),
        layers = layers.len(),
        terrain_x = terrain_position[0],
        terrain_y = terrain_position[1],
        cell_size,
        "Loaded simulation dataset"
    );

    Ok(SimulationDataset {
        source: path.display().to_string(),
        layers,
        terrain_position,
        cell_size,
    })
}

fn read_terrain_position(file: &netcdf::File) -> NetCdfResult<[f64; 2]> {
    let values = get_global_f64_values(file, TERRAIN_POSITION_ATTR)
        .ok_or_else(|| NetCdfError::MissingData(format!("{} attribute", TERRAIN_POSITION_ATTR)))?;
    match values.as_slice() {
        [x, y, ..] => Ok([*x, *y]),
        _ => Err(NetCdfError::InvalidFormat(format!(
            "{} needs two components, found {}",
            TERRAIN_POSITION_ATTR,
            values.len()
        ))),
    }
}

fn read_cell_size(file: &netcdf::File) -> NetCdfResult<f64> {
    let values = get_global_f64_values(file, CELL_SIZE_ATTR)
        .ok_or_else(|| NetCdfError::MissingData(format!("{} attribute", CELL_SIZE_ATTR)))?;
    values
        .first()
        .copied()
        .ok_or_else(|| NetCdfError::InvalidFormat(format!("{} is empty", CELL_SIZE_ATTR)))
}
