//! Colour palettes for relief and deposit rendering.
//!
//! A palette is a list of colour stops over a normalized `[0, 1]` range.
//! Built-in palettes cover the usual terrain colour maps; custom ones are
//! loaded from JSON in the same stop format:
//!
//! ```json
//! {
//!   "version": "1",
//!   "styles": {
//!     "sepia": {
//!       "name": "sepia",
//!       "type": "gradient",
//!       "stops": [
//!         { "value": 0.0, "color": "#2b1d0e" },
//!         { "value": 1.0, "color": "#f3e3c3" }
//!       ]
//!     }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{RenderError, Result};

/// Palette used for the deposit overlay.
pub const OVERLAY_STYLE: &str = "spectral";

/// Names of the built-in palettes.
pub const BUILTIN_STYLES: [&str; 4] = ["gist_earth", "terrain", "gray", "spectral"];

/// Style configuration loaded from JSON
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StyleConfig {
    pub version: String,
    pub styles: HashMap<String, StyleDefinition>,
}

/// A single style definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StyleDefinition {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub style_type: String,
    pub stops: Vec<ColorStop>,
}

/// Color stop for gradient
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ColorStop {
    pub value: f32,
    pub color: String,
    pub label: Option<String>,
}

impl StyleConfig {
    /// Load style configuration from JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Load style configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Get a specific style definition
    pub fn get_style(&self, name: &str) -> Option<&StyleDefinition> {
        self.styles.get(name)
    }
}

/// Parse hex color string to RGB
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Color = Color::new(255, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    fn from_hex(hex: &str) -> Option<Self> {
        hex_to_rgb(hex).map(|(r, g, b)| Self::new(r, g, b, 255))
    }
}

/// Linear color interpolation
fn interpolate_color(color1: Color, color2: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let t_inv = 1.0 - t;

    Color::new(
        ((color1.r as f32 * t_inv) + (color2.r as f32 * t)).round() as u8,
        ((color1.g as f32 * t_inv) + (color2.g as f32 * t)).round() as u8,
        ((color1.b as f32 * t_inv) + (color2.b as f32 * t)).round() as u8,
        ((color1.a as f32 * t_inv) + (color2.a as f32 * t)).round() as u8,
    )
}

/// A resolved palette: colour stops sorted by position in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub name: String,
    stops: Vec<(f32, Color)>,
}

impl Palette {
    /// Build a palette from stops at arbitrary values.
    ///
    /// Stop values are rescaled onto `[0, 1]`.
    pub fn from_style(style: &StyleDefinition) -> Result<Self> {
        if style.stops.is_empty() {
            return Err(RenderError::InvalidStyle(format!(
                "style '{}' has no colour stops",
                style.name
            )));
        }

        let mut stops = Vec::with_capacity(style.stops.len());
        for stop in &style.stops {
            let color = Color::from_hex(&stop.color).ok_or_else(|| {
                RenderError::InvalidStyle(format!(
                    "style '{}' has invalid colour '{}'",
                    style.name, stop.color
                ))
            })?;
            stops.push((stop.value, color));
        }
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));

        let lo = stops[0].0;
        let hi = stops[stops.len() - 1].0;
        let span = if (hi - lo).abs() < f32::EPSILON { 1.0 } else { hi - lo };
        for stop in stops.iter_mut() {
            stop.0 = (stop.0 - lo) / span;
        }

        Ok(Self {
            name: style.name.clone(),
            stops,
        })
    }

    /// Look up a built-in palette by name.
    pub fn builtin(name: &str) -> Option<Self> {
        let stops: &[(f32, &str)] = match name {
            "gist_earth" => &[
                (0.00, "#000000"),
                (0.15, "#21387a"),
                (0.30, "#2e7a7d"),
                (0.45, "#4a9957"),
                (0.60, "#8ca65c"),
                (0.75, "#b8ad7a"),
                (0.90, "#dbc9b8"),
                (1.00, "#fdfdfd"),
            ],
            "terrain" => &[
                (0.00, "#333399"),
                (0.15, "#0099ff"),
                (0.25, "#00cc66"),
                (0.50, "#ffff99"),
                (0.75, "#805c54"),
                (1.00, "#ffffff"),
            ],
            "gray" | "grey" => &[(0.0, "#000000"), (1.0, "#ffffff")],
            "spectral" => &[
                (0.00, "#000000"),
                (0.10, "#880099"),
                (0.20, "#0000dd"),
                (0.30, "#0099dd"),
                (0.40, "#00aa88"),
                (0.50, "#00bb00"),
                (0.60, "#00ff00"),
                (0.70, "#eeee00"),
                (0.80, "#ff9900"),
                (0.90, "#dd0000"),
                (1.00, "#cccccc"),
            ],
            _ => return None,
        };

        let stops = stops
            .iter()
            .filter_map(|&(value, hex)| Color::from_hex(hex).map(|c| (value, c)))
            .collect();
        Some(Self {
            name: name.to_string(),
            stops,
        })
    }

    /// Resolve a palette by name, checking custom styles before built-ins.
    pub fn resolve(name: &str, custom: Option<&StyleConfig>) -> Result<Self> {
        if let Some(style) = custom.and_then(|config| config.get_style(name)) {
            return Self::from_style(style);
        }
        Self::builtin(name).ok_or_else(|| RenderError::UnknownStyle(name.to_string()))
    }

    /// Colour at normalized position `t`.
    pub fn sample(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let last = self.stops.len() - 1;
        if t <= self.stops[0].0 {
            return self.stops[0].1;
        }
        for window in self.stops.windows(2) {
            let (v0, c0) = window[0];
            let (v1, c1) = window[1];
            if t <= v1 {
                let span = v1 - v0;
                let local = if span.abs() < f32::EPSILON { 0.0 } else { (t - v0) / span };
                return interpolate_color(c0, c1, local);
            }
        }
        self.stops[last].1
    }
}

/// Map a grid onto a palette, scaled to the grid's own value range.
///
/// NaN cells become fully transparent. Every other cell gets alpha
/// `opacity * 255`.
pub fn colorize(data: &[f32], palette: &Palette, opacity: f32) -> Vec<u8> {
    let mut pixels = vec![0u8; data.len() * 4];
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;

    let (min_val, max_val) = data
        .iter()
        .filter(|v| !v.is_nan())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &val| {
            (min.min(val), max.max(val))
        });
    let range = max_val - min_val;

    for (value, pixel) in data.iter().zip(pixels.chunks_exact_mut(4)) {
        if value.is_nan() {
            pixel.copy_from_slice(&[0, 0, 0, 0]);
            continue;
        }

        let normalized = if range.abs() < 0.001 {
            0.5
        } else {
            ((value - min_val) / range).clamp(0.0, 1.0)
        };

        let color = palette.sample(normalized);
        pixel.copy_from_slice(&[color.r, color.g, color.b, alpha]);
    }

    pixels
}
