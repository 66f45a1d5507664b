//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting and forecasting
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Degree of the fitted polynomial trend.
///
/// Fixed at 3: smooth enough to capture the post-2005 policy-driven downturn
/// without oscillating over a 34-point annual series. There is no degree
/// search and no regularization.
pub const TREND_DEGREE: usize = 3;

/// First year of the forecast grid (matches the first historical year).
pub const FORECAST_START_YEAR: i32 = 1990;

/// Last year of the forecast grid, inclusive.
pub const FORECAST_END_YEAR: i32 = 2050;

/// A single historical data point: annual EU CO2 emissions for one year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub year: i32,
    /// Annual emissions in MtCO2e.
    pub emissions: f64,
}

/// Fitted cubic trend. Immutable once fit; there is no retraining.
///
/// The design matrix is built on the offset `t = year - base_year` rather than
/// the raw calendar year. Raw year powers put columns spanning ~10 orders of
/// magnitude into the same matrix; the offset keeps the SVD well-conditioned.
/// The offset basis spans the identical cubic function space, so predictions
/// are unchanged from a raw-powers fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendModel {
    /// Year subtracted before evaluating the polynomial.
    pub base_year: i32,
    /// Coefficients `[b0, b1, b2, b3]` on `[1, t, t^2, t^3]`.
    pub coeffs: Vec<f64>,
}

impl TrendModel {
    /// Evaluate the raw (unadjusted) trend at `year`.
    pub fn predict(&self, year: i32) -> f64 {
        let t = f64::from(year - self.base_year);
        crate::math::horner(&self.coeffs, t)
    }
}

/// Fit quality over the historical window.
///
/// Summary output only; with a single fixed model there is no selection step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitDiagnostics {
    pub sse: f64,
    pub rmse: f64,
    pub n: usize,
}

/// Fit output: model plus diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitResult {
    pub model: TrendModel,
    pub quality: FitDiagnostics,
}

/// One year of the forecast grid.
///
/// `raw_fit` and `decay_factor` are carried alongside the final value so that
/// exports and diagnostics can show the unadjusted trend and the policy
/// multiplier separately.
#[derive(Debug, Clone, Copy)]
pub struct ForecastPoint {
    pub year: i32,
    /// Unadjusted cubic evaluation at `year`.
    pub raw_fit: f64,
    /// Policy decay multiplier (exactly 1.0 through 2020).
    pub decay_factor: f64,
    /// Final forecast: `raw_fit * decay_factor`, in MtCO2e.
    pub emissions: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct ForecastConfig {
    /// Where to write the chart PNG (overwritten each run).
    pub out_path: PathBuf,
    /// Render the chart at all (`--no-plot` disables it).
    pub plot: bool,
    pub plot_width: u32,
    pub plot_height: u32,
    /// Hand the rendered PNG to the platform image viewer.
    pub show: bool,

    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

/// A saved forecast file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastFile {
    pub tool: String,
    /// Decay applies to years strictly greater than this.
    pub decay_base_year: i32,
    /// Fraction of emissions retained per post-2020 year (0.98 = 2% decay).
    pub annual_retention: f64,
    pub model: TrendModel,
    pub fit_quality: FitDiagnostics,
    pub grid: ForecastGrid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastGrid {
    pub years: Vec<i32>,
    pub emissions: Vec<f64>,
}
