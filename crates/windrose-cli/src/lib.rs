//! CLI logic for the Windrose compass rose generator.
//!
//! This module loads configuration, applies command-line overrides, and runs
//! the rose through the library pipeline into an SVG file.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{debug, info};

use windrose::{RoseBuilder, RoseError, config::AppConfig};

/// Run the Windrose CLI application
///
/// Builds the rose described by the configuration and command-line overrides
/// and writes the resulting SVG to the output file.
///
/// # Errors
///
/// Returns `RoseError` for:
/// - Configuration loading errors
/// - Invalid geometry parameters
/// - Rendering errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), RoseError> {
    info!(output_path = args.output; "Generating compass rose");

    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = apply_overrides(app_config, args);

    let builder = RoseBuilder::new(app_config);
    let scene = builder.build_scene()?;
    let svg = builder.render_svg(&scene)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Replaces configured geometry values with those given on the command line.
fn apply_overrides(config: AppConfig, args: &Args) -> AppConfig {
    let mut rose = *config.rose();

    if let Some(base_radius) = args.base_radius {
        debug!(base_radius; "Overriding base radius");
        rose = rose.with_base_radius(base_radius);
    }
    if let Some(divisions) = args.divisions {
        debug!(divisions; "Overriding primary divisions");
        rose = rose.with_num_primary_divisions(divisions);
    }
    if let Some(triangle_ratio) = args.triangle_ratio {
        debug!(triangle_ratio; "Overriding triangle ratio");
        rose = rose.with_triangle_ratio(triangle_ratio);
    }

    config.with_rose(rose)
}
