//! Relief viewer service library.
//!
//! Configuration layering and the two render pipelines (plain relief and
//! relief with an ash-deposit overlay). The binary in `main.rs` wires these
//! to the command line.

pub mod cli;
pub mod config;
pub mod pipeline;

pub use cli::Args;
pub use config::{ViewerConfig, DEFAULT_OUTPUT};
pub use pipeline::{
    render_overlay, render_relief, run, RenderOutcome, RenderedImage, MARKER_RADIUS,
};

/// Merge the YAML file named by `--config` (if any) under the flag/env layer.
pub fn resolve_config(args: &Args) -> terrain_common::TerrainResult<ViewerConfig> {
    let base = match &args.config {
        Some(path) => ViewerConfig::from_yaml_file(path)?,
        None => ViewerConfig::default(),
    };
    Ok(base.merged_with(args.to_config()))
}
