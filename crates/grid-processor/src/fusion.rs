//! Aligning a simulation grid onto an elevation raster.
//!
//! The simulation grid is georeferenced only by its origin offset from the
//! scene center and its cell count. Both are converted to degrees with the
//! overlay conversions in [`projection::transform`], then to raster pixels
//! through the raster's step size.

use tracing::{debug, info, warn};

use projection::{overlay_footprint_to_degrees, overlay_offset_to_degrees, GeoTransformContext};
use renderer::hillshade;
use terrain_common::{GeoPoint, Grid, PixelPoint, PixelWindow};

use crate::error::Result;
use crate::interpolation::resample;
use crate::types::{FusionOutput, InterpolationMethod, SimulationGrid};

/// Lighting and resampling parameters for one fusion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusionParams {
    pub azimuth_deg: f64,
    pub altitude_deg: f64,
    pub method: InterpolationMethod,
}

impl Default for FusionParams {
    fn default() -> Self {
        Self {
            azimuth_deg: 0.0,
            altitude_deg: 150.0,
            method: InterpolationMethod::Cubic,
        }
    }
}

/// Pixel window of the raster covered by the simulation grid.
///
/// `grid_cols` and `grid_rows` are the dimensions of the simulation grid
/// after transposition. The window's bottom-left corner sits at the grid
/// origin; it extends east by the grid width and north by the grid height.
pub fn footprint_window(
    geo: &GeoTransformContext,
    center: &GeoPoint,
    origin_offset: [f64; 2],
    grid_cols: usize,
    grid_rows: usize,
) -> PixelWindow {
    let (offset_lon, offset_lat) = overlay_offset_to_degrees(origin_offset[0], origin_offset[1]);
    let origin = center.offset(-offset_lon, -offset_lat);
    let origin_px = geo.geo_to_pixel(&origin);

    let (deg_lon, deg_lat) = overlay_footprint_to_degrees(grid_cols as f64, grid_rows as f64);
    let nx = deg_lon / geo.step_x;
    let ny = deg_lat / geo.step_y;

    debug!(
        origin_lon = origin.lon,
        origin_lat = origin.lat,
        origin_x = origin_px.x,
        origin_y = origin_px.y,
        nx,
        ny,
        "Simulation footprint"
    );

    PixelWindow::from_corners(
        PixelPoint::new(origin_px.x, origin_px.y - ny),
        PixelPoint::new(origin_px.x + nx, origin_px.y),
        geo.width,
        geo.height,
    )
}

/// Fuse `simulation` onto `elevation` around `center`.
///
/// Returns the hillshaded relief under the simulation footprint (rows
/// flipped so row 0 is the southern edge), the deposit field resampled to
/// the same shape with zero cells masked as NaN, and the grid origin in
/// overlay pixel coordinates. A footprint entirely outside the raster
/// yields empty grids.
pub fn fuse(
    elevation: &Grid,
    geo: &GeoTransformContext,
    center: &GeoPoint,
    simulation: &SimulationGrid,
    params: &FusionParams,
) -> Result<FusionOutput> {
    let transposed = simulation.data.transpose();
    let src_cols = transposed.width();
    let src_rows = transposed.height();

    let window = footprint_window(geo, center, simulation.origin_offset, src_cols, src_rows);
    if window.is_degenerate() {
        warn!(
            width = window.width(),
            height = window.height(),
            "Simulation footprint does not overlap the raster"
        );
    }

    let relief = hillshade(
        &elevation.slice(&window),
        params.azimuth_deg,
        params.altitude_deg,
    )
    .flip_rows();

    let (out_rows, out_cols) = relief.shape();
    let mut overlay = resample(&transposed, out_cols, out_rows, params.method)?
        .map(|v| if v < 0.0 { 0.0 } else { v });
    let masked = overlay.mask_value(0.0);

    let marker = PixelPoint::new(
        (simulation.origin_offset[0] * out_cols as f64 / src_cols as f64).floor(),
        (simulation.origin_offset[1] * out_rows as f64 / src_rows as f64).floor(),
    );

    info!(
        rows = out_rows,
        cols = out_cols,
        masked,
        marker_x = marker.x,
        marker_y = marker.y,
        "Fused simulation grid"
    );

    Ok(FusionOutput {
        relief,
        overlay,
        marker,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrain_common::RasterMetadata;

    fn geo() -> GeoTransformContext {
        // 1/128 degree pixels over a 10x10 degree box
        let meta = RasterMetadata::north_up(0.0, 10.0, 0.0078125, -0.0078125, 1280, 1280);
        GeoTransformContext::from_metadata(&meta).unwrap()
    }

    #[test]
    fn test_footprint_sits_north_east_of_origin() {
        let geo = geo();
        let center = GeoPoint::new(5.0, 5.0);
        let window = footprint_window(&geo, &center, [0.0, 0.0], 111, 111);
        // Origin at the center pixel (640, 640); the grid extends east and north.
        assert_eq!(window.x0, 640);
        assert_eq!(window.y1, 640);
        assert!(window.y0 < 640);
        assert!(window.x1 > 640);
    }

    #[test]
    fn test_fuse_output_shapes_match() {
        let geo = geo();
        let elevation = Grid::from_fn(1280, 1280, |row, col| (row + col) as f32);
        let simulation = SimulationGrid {
            data: Grid::from_fn(40, 30, |row, col| (row * col) as f32),
            origin_offset: [10.0, 5.0],
            cell_size: 100.0,
        };
        let out = fuse(
            &elevation,
            &geo,
            &GeoPoint::new(5.0, 5.0),
            &simulation,
            &FusionParams::default(),
        )
        .unwrap();
        assert!(!out.is_degenerate());
        assert_eq!(out.overlay.shape(), out.relief.shape());
    }
}
