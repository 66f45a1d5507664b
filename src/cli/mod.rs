//! Command-line parsing for the CO2 emissions forecaster.
//!
//! The tool does exactly one thing per invocation, so there are no
//! subcommands; the flags only steer presentation and exports. Modeling
//! parameters (degree, decay rate, forecast horizon) are deliberately not
//! configurable.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "co2f",
    version,
    about = "EU CO2 emissions forecast to 2050 (cubic trend + policy decay)"
)]
pub struct Cli {
    /// Output path for the chart PNG (overwritten each run).
    #[arg(long, default_value = "emission_forecast.png")]
    pub out: PathBuf,

    /// Chart width in pixels.
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Chart height in pixels.
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Open the rendered chart in the platform image viewer (best effort).
    #[arg(long)]
    pub show: bool,

    /// Skip chart rendering (console report only).
    #[arg(long)]
    pub no_plot: bool,

    /// Export the forecast grid to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the forecast (model + grid) to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,
}
