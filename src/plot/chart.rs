//! Plotters-powered forecast chart (PNG).
//!
//! The chart overlays the 34 historical observations (solid line with circular
//! markers) and the 61-point forecast (dashed line) on one set of axes, with
//! x ticks every 5 years from 1990 to 2050.
//!
//! The chart is intentionally data-driven: all series and bounds are computed
//! in [`build_series`], outside the render call. This keeps `render_png`
//! focused on drawing and makes the data prep testable without a bitmap
//! backend (or fonts) available.

use std::path::Path;
use std::process::Command;

use plotters::prelude::*;

use crate::domain::{ForecastPoint, Observation};
use crate::error::AppError;

const TITLE: &str = "EU CO2 Emissions Forecast to 2050 with EU ETS and 20-20-20 Policy Impact";

/// A render-only chart description.
#[derive(Debug, Clone)]
pub struct ChartSeries {
    /// Historical observations as (year, MtCO2e).
    pub historical: Vec<(f64, f64)>,
    /// Adjusted forecast as (year, MtCO2e).
    pub forecast: Vec<(f64, f64)>,
    /// X bounds (years).
    pub x_bounds: [f64; 2],
    /// Y bounds (MtCO2e), padded so neither series touches the frame.
    pub y_bounds: [f64; 2],
}

/// Prepare both series and axis bounds from the pipeline outputs.
pub fn build_series(observations: &[Observation], forecast: &[ForecastPoint]) -> ChartSeries {
    let historical: Vec<(f64, f64)> = observations
        .iter()
        .map(|o| (f64::from(o.year), o.emissions))
        .collect();
    let forecast_xy: Vec<(f64, f64)> = forecast
        .iter()
        .map(|p| (f64::from(p.year), p.emissions))
        .collect();

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(x, y) in historical.iter().chain(&forecast_xy) {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    // 5% vertical padding; keeps markers off the frame.
    let pad = ((y_max - y_min) * 0.05).max(1.0);

    ChartSeries {
        historical,
        forecast: forecast_xy,
        x_bounds: [x_min, x_max],
        y_bounds: [y_min - pad, y_max + pad],
    }
}

/// Render the chart to a PNG file, overwriting any previous output.
pub fn render_png(
    path: &Path,
    series: &ChartSeries,
    width: u32,
    height: u32,
) -> Result<(), AppError> {
    let [x0, x1] = series.x_bounds;
    let [y0, y1] = series.y_bounds;
    if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
        return Err(AppError::new(4, "Chart bounds are degenerate; nothing to plot."));
    }

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(chart_err)?;

    // 13 x labels over 1990..2050 lands on 5-year ticks.
    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("CO2 Emissions (MtCO2e)")
        .x_labels(13)
        .y_labels(10)
        .x_label_formatter(&|v| format!("{v:.0}"))
        .y_label_formatter(&|v| format!("{v:.0}"))
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(series.historical.iter().copied(), &BLUE))
        .map_err(chart_err)?
        .label("Historical CO2 Emissions")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart
        .draw_series(
            series
                .historical
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
        )
        .map_err(chart_err)?;

    chart
        .draw_series(DashedLineSeries::new(
            series.forecast.iter().copied(),
            6,
            4,
            RED.stroke_width(2),
        ))
        .map_err(chart_err)?
        .label("Forecasted Emissions (with Policy Impact)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

/// Hand the rendered PNG to the platform image viewer, best effort.
///
/// A missing viewer must not fail the run; the PNG on disk is the product.
pub fn open_in_viewer(path: &Path) {
    let mut cmd = if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(path);
        c
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c.arg(path);
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };

    if let Err(e) = cmd.spawn() {
        eprintln!("warning: could not open image viewer for {}: {e}", path.display());
    }
}

fn chart_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::new(2, format!("Failed to render chart: {e}"))
}
