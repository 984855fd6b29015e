//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::config::ViewerConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "relief-viewer")]
#[command(about = "Render shaded terrain relief with an optional ash-deposit overlay")]
pub struct Args {
    /// Elevation raster (any GDAL-readable format)
    #[arg(long, env = "RELIEF_IMG")]
    pub img: Option<PathBuf>,

    /// Center longitude
    #[arg(long, env = "RELIEF_POSX", allow_hyphen_values = true)]
    pub posx: Option<f64>,

    /// Center latitude
    #[arg(long, env = "RELIEF_POSY", allow_hyphen_values = true)]
    pub posy: Option<f64>,

    /// Window width in km (requires --height)
    #[arg(long, env = "RELIEF_WIDTH")]
    pub width: Option<f64>,

    /// Window height in km (requires --width)
    #[arg(long, env = "RELIEF_HEIGHT")]
    pub height: Option<f64>,

    /// Palette for the relief [default: gist_earth]
    #[arg(long, env = "RELIEF_RENDER")]
    pub render: Option<String>,

    /// Light altitude in degrees [default: 150]
    #[arg(long, env = "RELIEF_ANGLE", allow_hyphen_values = true)]
    pub angle: Option<f64>,

    /// Light azimuth in degrees [default: 0]
    #[arg(long, env = "RELIEF_AZIMUTH", allow_hyphen_values = true)]
    pub azimuth: Option<f64>,

    /// Ash-deposit simulation file (HDF5 / NetCDF-4); requires --posx and --posy
    #[arg(long, env = "RELIEF_ASH")]
    pub ash: Option<PathBuf>,

    /// Opacity in [0, 1] [default: 1]
    #[arg(long, env = "RELIEF_ALPHA")]
    pub alpha: Option<f64>,

    /// Output PNG [default: relief.png]
    #[arg(short, long, env = "RELIEF_OUTPUT")]
    pub output: Option<PathBuf>,

    /// JSON file with custom palettes
    #[arg(long, env = "RELIEF_PALETTES")]
    pub palettes: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, env = "RELIEF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info", env = "RELIEF_LOG_LEVEL")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "RELIEF_LOG_JSON")]
    pub log_json: bool,
}

impl Args {
    /// The flag/environment layer of the configuration.
    pub fn to_config(&self) -> ViewerConfig {
        ViewerConfig {
            img: self.img.clone(),
            posx: self.posx,
            posy: self.posy,
            width: self.width,
            height: self.height,
            render: self.render.clone(),
            angle: self.angle,
            azimuth: self.azimuth,
            ash: self.ash.clone(),
            alpha: self.alpha,
            output: self.output.clone(),
            palettes: self.palettes.clone(),
        }
    }

    /// Parsed `--log-level`, INFO when unrecognized.
    pub fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}
