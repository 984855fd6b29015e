//! Image rendering for shaded relief and deposit overlays.
//!
//! - Hillshade computation from elevation grids
//! - Colour palettes and grid colourization
//! - RGBA compositing and markers
//! - PNG encoding

pub mod composite;
pub mod error;
pub mod hillshade;
pub mod png;
pub mod style;

pub use composite::{composite_over, draw_marker, flip_vertical};
pub use error::{RenderError, Result};
pub use hillshade::hillshade;
pub use png::{create_png, write_png};
pub use style::{colorize, Color, Palette, StyleConfig, StyleDefinition, OVERLAY_STYLE};
