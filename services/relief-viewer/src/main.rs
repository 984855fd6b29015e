//! Relief viewer.
//!
//! Renders shaded terrain from an elevation raster to a PNG, optionally
//! overlaying a simulated ash-deposit field.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use relief_viewer::{resolve_config, run, Args, RenderOutcome};

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args)?;

    netcdf_parser::silence_hdf5_errors();

    let config = resolve_config(&args).context("Failed to load configuration")?;
    info!(
        img = ?config.img,
        ash = ?config.ash,
        render = ?config.render,
        "Starting relief viewer"
    );

    match run(&config).context("Render failed")? {
        RenderOutcome::Written {
            path,
            width,
            height,
        } => info!(path = %path.display(), width, height, "Done"),
        RenderOutcome::Empty => warn!("Requested window is empty, no image written"),
    }

    Ok(())
}

fn init_tracing(args: &Args) -> Result<()> {
    let builder = FmtSubscriber::builder()
        .with_max_level(args.level())
        .with_target(true);

    if args.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}
