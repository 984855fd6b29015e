//! Render pipelines.
//!
//! [`render_relief`] and [`render_overlay`] work on data already in memory
//! and return an RGBA image, or `None` when the requested window has no
//! pixels. [`run`] loads the inputs named by a [`ViewerConfig`], picks the
//! pipeline and writes the PNG.

use std::path::PathBuf;

use tracing::{info, warn};

use grid_processor::{fuse, sum_layers, FusionParams};
use netcdf_parser::load_simulation;
use projection::RenderContext;
use raster_parser::{load_elevation, ElevationRaster};
use renderer::{
    colorize, composite_over, draw_marker, flip_vertical, hillshade, write_png, Color, Palette,
    StyleConfig, OVERLAY_STYLE,
};
use terrain_common::{PixelPoint, RenderRequest, SimulationDataset, TerrainError, TerrainResult};

use crate::config::ViewerConfig;

/// Radius in pixels of the center / origin dot.
pub const MARKER_RADIUS: i64 = 3;

/// An RGBA image ready for encoding.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub pixels: Vec<u8>,
    pub width: usize,
    pub height: usize,
    /// Marker position in data coordinates, before any flip.
    pub marker: Option<PixelPoint>,
}

/// What [`run`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    Written {
        path: PathBuf,
        width: usize,
        height: usize,
    },
    /// The window had no pixels; nothing was written.
    Empty,
}

/// Shaded relief of the raster, cropped when both center and extent are set.
pub fn render_relief(
    raster: &ElevationRaster,
    request: &RenderRequest,
    palettes: Option<&StyleConfig>,
) -> TerrainResult<Option<RenderedImage>> {
    let palette = Palette::resolve(&request.style, palettes)?;
    let mut ctx = RenderContext::new(raster.metadata.clone(), request.clone())?;
    ctx.resolve_center();

    let cropped = ctx.crop(&raster.grid);
    let (elevation, marker) = match cropped {
        Some(extracted) => {
            if extracted.is_degenerate() {
                let err = TerrainError::DegenerateWindow {
                    width: extracted.window.width(),
                    height: extracted.window.height(),
                };
                warn!(error = %err, "Nothing to render");
                return Ok(None);
            }
            (extracted.elevation, Some(extracted.center))
        }
        None => (raster.grid.clone(), ctx.center_pixel),
    };

    let shaded = hillshade(&elevation, request.light_azimuth, request.light_altitude);
    let (width, height) = (shaded.width(), shaded.height());
    let mut pixels = colorize(shaded.data(), &palette, request.opacity as f32);

    if let Some(point) = marker {
        draw_marker(
            &mut pixels,
            width,
            height,
            point.x.floor() as i64,
            point.y.floor() as i64,
            MARKER_RADIUS,
            Color::RED,
        );
    }

    info!(width, height, style = %palette.name, "Rendered relief");
    Ok(Some(RenderedImage {
        pixels,
        width,
        height,
        marker,
    }))
}

/// Relief under the simulation footprint with the summed deposit on top.
///
/// The image is flipped so the grid's southern edge is at the bottom.
pub fn render_overlay(
    raster: &ElevationRaster,
    request: &RenderRequest,
    simulation: &SimulationDataset,
    palettes: Option<&StyleConfig>,
) -> TerrainResult<Option<RenderedImage>> {
    let relief_palette = Palette::resolve(&request.style, palettes)?;
    let overlay_palette = Palette::resolve(OVERLAY_STYLE, palettes)?;

    let mut ctx = RenderContext::new(raster.metadata.clone(), request.clone())?;
    let center = ctx
        .resolve_center()
        .map(|resolution| resolution.point())
        .ok_or_else(|| TerrainError::config("ash overlay must be used with posx and posy"))?;

    let summed = sum_layers(simulation)?;
    let params = FusionParams {
        azimuth_deg: request.light_azimuth,
        altitude_deg: request.light_altitude,
        ..FusionParams::default()
    };
    let fused = fuse(&raster.grid, &ctx.geo, &center, &summed, &params)?;
    if fused.is_degenerate() {
        let err = TerrainError::DegenerateWindow {
            width: fused.relief.width(),
            height: fused.relief.height(),
        };
        warn!(error = %err, "Simulation footprint is empty, nothing to render");
        return Ok(None);
    }

    let (width, height) = (fused.relief.width(), fused.relief.height());
    let mut pixels = colorize(fused.relief.data(), &relief_palette, 1.0);
    let overlay = colorize(fused.overlay.data(), &overlay_palette, request.opacity as f32);
    composite_over(&mut pixels, &overlay);

    draw_marker(
        &mut pixels,
        width,
        height,
        fused.marker.x as i64,
        fused.marker.y as i64,
        MARKER_RADIUS,
        Color::RED,
    );
    flip_vertical(&mut pixels, width, height);

    info!(
        width,
        height,
        layers = simulation.layers.len(),
        "Rendered ash overlay"
    );
    Ok(Some(RenderedImage {
        pixels,
        width,
        height,
        marker: Some(fused.marker),
    }))
}

/// Load inputs, render and write the PNG.
pub fn run(config: &ViewerConfig) -> TerrainResult<RenderOutcome> {
    let request = config.to_request()?;
    let image_path = config.image_path()?;
    let palettes = config
        .palettes
        .as_ref()
        .map(StyleConfig::from_file)
        .transpose()?;

    let raster = load_elevation(image_path)?;

    let image = match &request.overlay_path {
        Some(path) => {
            let simulation = load_simulation(path)?;
            render_overlay(&raster, &request, &simulation, palettes.as_ref())?
        }
        None => render_relief(&raster, &request, palettes.as_ref())?,
    };

    let Some(image) = image else {
        return Ok(RenderOutcome::Empty);
    };

    let output = config.output_path();
    write_png(&output, &image.pixels, image.width, image.height)?;
    info!(path = %output.display(), width = image.width, height = image.height, "Wrote PNG");

    Ok(RenderOutcome::Written {
        path: output,
        width: image.width,
        height: image.height,
    })
}
