//! Reducing a multi-layer simulation dataset to one grid.

use tracing::debug;

use terrain_common::{Grid, SimulationDataset};

use crate::error::{GridProcessorError, Result};
use crate::types::SimulationGrid;

/// Sum all layers element-wise and derive the grid's origin offset.
///
/// The origin offset is `|terrain_position / cell_size|`, i.e. the
/// distance from the scene center to the grid origin in cells.
pub fn sum_layers(dataset: &SimulationDataset) -> Result<SimulationGrid> {
    let cell_size = dataset.cell_size;
    if !cell_size.is_finite() || cell_size <= 0.0 {
        return Err(GridProcessorError::InvalidCellSize(cell_size));
    }
    if dataset.terrain_position.iter().any(|v| !v.is_finite()) {
        return Err(GridProcessorError::invalid_metadata(format!(
            "terrain_position {:?} is not finite",
            dataset.terrain_position
        )));
    }

    let first = dataset.layers.first().ok_or_else(|| {
        GridProcessorError::empty(format!("{} contains no 2-D layers", dataset.source))
    })?;
    if first.grid.is_empty() {
        return Err(GridProcessorError::empty(format!(
            "layer '{}' in {} has no cells",
            first.name, dataset.source
        )));
    }

    let expected = first.grid.shape();
    let mut total = Grid::zeros(first.grid.width(), first.grid.height());
    for layer in &dataset.layers {
        let found = layer.grid.shape();
        if found != expected {
            return Err(GridProcessorError::ShapeMismatch {
                layer: layer.name.clone(),
                expected,
                found,
            });
        }
        total
            .add_assign(&layer.grid)
            .map_err(|e| GridProcessorError::invalid_metadata(e.to_string()))?;
    }

    let origin_offset = [
        (dataset.terrain_position[0] / cell_size).abs(),
        (dataset.terrain_position[1] / cell_size).abs(),
    ];

    debug!(
        layers = dataset.layers.len(),
        rows = expected.0,
        cols = expected.1,
        offset_x = origin_offset[0],
        offset_y = origin_offset[1],
        "Summed simulation layers"
    );

    Ok(SimulationGrid {
        data: total,
        origin_offset,
        cell_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrain_common::SimulationLayer;

    fn dataset(layers: Vec<SimulationLayer>, dx: f64) -> SimulationDataset {
        SimulationDataset {
            source: "test".to_string(),
            layers,
            terrain_position: [-2000.0, 1000.0],
            cell_size: dx,
        }
    }

    #[test]
    fn test_sum_two_layers() {
        let a = SimulationLayer::new("a", Grid::filled(3, 2, 1.0));
        let b = SimulationLayer::new("b", Grid::filled(3, 2, 2.5));
        let grid = sum_layers(&dataset(vec![a, b], 100.0)).unwrap();
        assert!(grid.data.data().iter().all(|&v| v == 3.5));
        assert_eq!(grid.origin_offset, [20.0, 10.0]);
    }

    #[test]
    fn test_no_layers() {
        assert!(matches!(
            sum_layers(&dataset(vec![], 100.0)),
            Err(GridProcessorError::EmptyGrid(_))
        ));
    }

    #[test]
    fn test_shape_mismatch_names_layer() {
        let a = SimulationLayer::new("a", Grid::zeros(3, 2));
        let b = SimulationLayer::new("b", Grid::zeros(2, 3));
        match sum_layers(&dataset(vec![a, b], 100.0)) {
            Err(GridProcessorError::ShapeMismatch { layer, .. }) => assert_eq!(layer, "b"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_bad_cell_size() {
        let a = SimulationLayer::new("a", Grid::zeros(3, 2));
        assert!(matches!(
            sum_layers(&dataset(vec![a.clone()], 0.0)),
            Err(GridProcessorError::InvalidCellSize(_))
        ));
        assert!(matches!(
            sum_layers(&dataset(vec![a], f64::NAN)),
            Err(GridProcessorError::InvalidCellSize(_))
        ));
    }
}
