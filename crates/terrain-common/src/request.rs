//! Validated user request for one render.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{TerrainError, TerrainResult};
use crate::point::{ExtentKm, GeoPoint};

/// Palette used for the shaded relief when none is given.
pub const DEFAULT_STYLE: &str = "gist_earth";

/// Light altitude in degrees when none is given.
pub const DEFAULT_LIGHT_ALTITUDE: f64 = 150.0;

/// Light azimuth in degrees when none is given.
pub const DEFAULT_LIGHT_AZIMUTH: f64 = 0.0;

/// Overlay opacity when none is given.
pub const DEFAULT_OPACITY: f64 = 1.0;

/// Everything the user asked for, independent of the raster itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub center: Option<GeoPoint>,
    pub extent: Option<ExtentKm>,
    pub style: String,
    /// Light altitude in degrees.
    pub light_altitude: f64,
    /// Light azimuth in degrees.
    pub light_azimuth: f64,
    /// Opacity in `[0, 1]`. Applies to the relief without an overlay,
    /// and to the overlay when one is present.
    pub opacity: f64,
    pub overlay_path: Option<PathBuf>,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            center: None,
            extent: None,
            style: DEFAULT_STYLE.to_string(),
            light_altitude: DEFAULT_LIGHT_ALTITUDE,
            light_azimuth: DEFAULT_LIGHT_AZIMUTH,
            opacity: DEFAULT_OPACITY,
            overlay_path: None,
        }
    }
}

/// Combine two optional inputs that must be given together.
pub fn paired(
    first_name: &str,
    first: Option<f64>,
    second_name: &str,
    second: Option<f64>,
) -> TerrainResult<Option<(f64, f64)>> {
    match (first, second) {
        (Some(a), Some(b)) => Ok(Some((a, b))),
        (None, None) => Ok(None),
        (Some(_), None) => Err(TerrainError::config(format!(
            "{} must be used with {}",
            first_name, second_name
        ))),
        (None, Some(_)) => Err(TerrainError::config(format!(
            "{} must be used with {}",
            second_name, first_name
        ))),
    }
}

impl RenderRequest {
    /// Set the center from a lon/lat pair given both-or-neither.
    pub fn with_center(mut self, lon: Option<f64>, lat: Option<f64>) -> TerrainResult<Self> {
        self.center = paired("posx", lon, "posy", lat)?.map(|(lon, lat)| GeoPoint::new(lon, lat));
        Ok(self)
    }

    /// Set the physical extent from a width/height pair given both-or-neither.
    pub fn with_extent(mut self, width: Option<f64>, height: Option<f64>) -> TerrainResult<Self> {
        self.extent = paired("width", width, "height", height)?.map(|(w, h)| ExtentKm::new(w, h));
        Ok(self)
    }

    /// Check ranges and cross-field rules.
    pub fn validate(&self) -> TerrainResult<()> {
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(TerrainError::config(format!(
                "alpha must be within [0, 1], got {}",
                self.opacity
            )));
        }
        if !self.light_altitude.is_finite() || !self.light_azimuth.is_finite() {
            return Err(TerrainError::config("light angles must be finite"));
        }
        if let Some(center) = &self.center {
            if !center.lon.is_finite() || !center.lat.is_finite() {
                return Err(TerrainError::config("center coordinates must be finite"));
            }
        }
        if let Some(extent) = &self.extent {
            // Zero or negative extents are valid and resolve to a clamped window.
            if !extent.width.is_finite() || !extent.height.is_finite() {
                return Err(TerrainError::config(format!(
                    "width and height must be finite, got {}x{}",
                    extent.width, extent.height
                )));
            }
        }
        if self.overlay_path.is_some() && self.center.is_none() {
            return Err(TerrainError::config(
                "ash overlay must be used with posx and posy",
            ));
        }
        if self.style.trim().is_empty() {
            return Err(TerrainError::config("render style must not be empty"));
        }
        Ok(())
    }
}
