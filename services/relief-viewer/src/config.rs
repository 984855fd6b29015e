//! Viewer configuration and its layering.
//!
//! Values come from four places, highest priority first: command-line
//! flags, environment variables, a YAML file, built-in defaults. clap
//! already folds the first two together, so a [`ViewerConfig`] built from
//! the command line is laid over one read from YAML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use terrain_common::{RenderRequest, TerrainError, TerrainResult};

/// Output path when none is configured.
pub const DEFAULT_OUTPUT: &str = "relief.png";

/// Every user-settable field, each optional so layers can be merged.
///
/// Field names match the command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Elevation raster.
    pub img: Option<PathBuf>,
    /// Center longitude.
    pub posx: Option<f64>,
    /// Center latitude.
    pub posy: Option<f64>,
    /// Window width in km.
    pub width: Option<f64>,
    /// Window height in km.
    pub height: Option<f64>,
    /// Palette name.
    pub render: Option<String>,
    /// Light altitude in degrees.
    pub angle: Option<f64>,
    /// Light azimuth in degrees.
    pub azimuth: Option<f64>,
    /// Simulation file to overlay.
    pub ash: Option<PathBuf>,
    /// Opacity in `[0, 1]`.
    pub alpha: Option<f64>,
    pub output: Option<PathBuf>,
    /// JSON file of custom palettes.
    pub palettes: Option<PathBuf>,
}

impl ViewerConfig {
    /// Parse a YAML configuration file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> TerrainResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)
            .map_err(|e| TerrainError::config(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "Loaded YAML configuration");
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Lay `higher` over `self`; fields set in `higher` win.
    pub fn merged_with(self, higher: ViewerConfig) -> ViewerConfig {
        ViewerConfig {
            img: higher.img.or(self.img),
            posx: higher.posx.or(self.posx),
            posy: higher.posy.or(self.posy),
            width: higher.width.or(self.width),
            height: higher.height.or(self.height),
            render: higher.render.or(self.render),
            angle: higher.angle.or(self.angle),
            azimuth: higher.azimuth.or(self.azimuth),
            ash: higher.ash.or(self.ash),
            alpha: higher.alpha.or(self.alpha),
            output: higher.output.or(self.output),
            palettes: higher.palettes.or(self.palettes),
        }
    }

    /// The elevation raster path, which has no default.
    pub fn image_path(&self) -> TerrainResult<&Path> {
        self.img
            .as_deref()
            .ok_or_else(|| TerrainError::config("an elevation image (--img) is required"))
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Build and validate the render request, filling defaults.
    pub fn to_request(&self) -> TerrainResult<RenderRequest> {
        let defaults = RenderRequest::default();
        let request = RenderRequest {
            style: self.render.clone().unwrap_or(defaults.style),
            light_altitude: self.angle.unwrap_or(defaults.light_altitude),
            light_azimuth: self.azimuth.unwrap_or(defaults.light_azimuth),
            opacity: self.alpha.unwrap_or(defaults.opacity),
            overlay_path: self.ash.clone(),
            ..RenderRequest::default()
        }
        .with_center(self.posx, self.posy)?
        .with_extent(self.width, self.height)?;

        request.validate()?;
        Ok(request)
    }
}
