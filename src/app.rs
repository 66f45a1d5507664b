//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the fit + forecast pipeline
//! - renders the chart PNG
//! - prints the run summary and forecast report
//! - writes optional exports

use clap::Parser;

use crate::domain::ForecastConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `co2f` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    let config = forecast_config_from_args(&cli);

    if config.plot && (config.plot_width < 320 || config.plot_height < 200) {
        return Err(AppError::new(2, "Chart size too small; use at least 320x200."));
    }

    let run = pipeline::run_forecast()?;

    print!(
        "{}",
        crate::report::format_run_summary(run.observations, &run.fit)
    );

    if config.plot {
        let series = crate::plot::build_series(run.observations, &run.forecast);
        crate::plot::render_png(&config.out_path, &series, config.plot_width, config.plot_height)?;
        println!("Chart written to {}", config.out_path.display());
        if config.show {
            crate::plot::open_in_viewer(&config.out_path);
        }
    }

    print!("{}", crate::report::format_forecast_report(&run.forecast));

    // Optional exports.
    if let Some(path) = &config.export_csv {
        crate::io::export::write_forecast_csv(path, &run.forecast)?;
    }
    if let Some(path) = &config.export_json {
        crate::io::grid::write_forecast_json(path, &run.fit, &run.forecast)?;
    }

    Ok(())
}

pub fn forecast_config_from_args(cli: &crate::cli::Cli) -> ForecastConfig {
    ForecastConfig {
        out_path: cli.out.clone(),
        plot: !cli.no_plot,
        plot_width: cli.width,
        plot_height: cli.height,
        show: cli.show,
        export_csv: cli.export.clone(),
        export_json: cli.export_json.clone(),
    }
}
