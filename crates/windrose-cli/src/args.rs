//! Command-line argument definitions for the Windrose CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the output path, configuration file
//! selection, geometry overrides, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Windrose compass rose generator
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output SVG file
    #[arg(short, long, default_value = "compass_rose.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Outer radius of the rose, overriding the configuration file
    #[arg(long, allow_negative_numbers = true)]
    pub base_radius: Option<f32>,

    /// Number of primary divisions (the rose has four times as many points)
    #[arg(short, long, allow_negative_numbers = true)]
    pub divisions: Option<i32>,

    /// Height-to-base ratio of the marker triangles, in (0, 1]
    #[arg(long)]
    pub triangle_ratio: Option<f32>,
}
