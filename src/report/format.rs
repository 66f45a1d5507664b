//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{FitResult, ForecastPoint, Observation};
use crate::policy;

/// First year of the console forecast report.
pub const REPORT_START_YEAR: i32 = 2025;

/// Spacing between reported years.
pub const REPORT_STEP_YEARS: i32 = 5;

/// Select the reported forecast points: 2025, 2030, ..., 2050.
pub fn report_points(forecast: &[ForecastPoint]) -> Vec<ForecastPoint> {
    forecast
        .iter()
        .filter(|p| p.year >= REPORT_START_YEAR && (p.year - REPORT_START_YEAR) % REPORT_STEP_YEARS == 0)
        .copied()
        .collect()
}

/// Format the six forecast lines, one per five-year interval.
///
/// Values are the decay-adjusted forecasts, printed to two decimals.
pub fn format_forecast_report(forecast: &[ForecastPoint]) -> String {
    let mut out = String::new();
    for p in report_points(forecast) {
        out.push_str(&format!(
            "Forecasted CO2 Emissions for {}: {:.2} MtCO2e\n",
            p.year, p.emissions
        ));
    }
    out
}

/// Format the run summary (dataset stats + fitted trend + diagnostics).
pub fn format_run_summary(observations: &[Observation], fit: &FitResult) -> String {
    let mut out = String::new();

    out.push_str("=== co2f - EU CO2 Emissions Forecast ===\n");
    if let (Some(first), Some(last)) = (observations.first(), observations.last()) {
        out.push_str(&format!(
            "History: n={} | years=[{}, {}] | emissions=[{:.2}, {:.2}] MtCO2e\n",
            observations.len(),
            first.year,
            last.year,
            observations
                .iter()
                .map(|o| o.emissions)
                .fold(f64::INFINITY, f64::min),
            observations
                .iter()
                .map(|o| o.emissions)
                .fold(f64::NEG_INFINITY, f64::max),
        ));
    }
    out.push_str(&format!(
        "Policy: {:.0}%/yr decay after {}\n",
        (1.0 - policy::ANNUAL_RETENTION) * 100.0,
        policy::DECAY_BASE_YEAR,
    ));

    out.push_str("\nFitted trend (cubic, t = year - base):\n");
    out.push_str(&format!("- base year: {}\n", fit.model.base_year));
    out.push_str(&format!("- coeffs: {}\n", fmt_vec(&fit.model.coeffs)));
    out.push_str(&format!(
        "- RMSE: {:.3} MtCO2e (SSE={:.3}, n={})\n",
        fit.quality.rmse, fit.quality.sse, fit.quality.n
    ));
    out.push('\n');

    out
}

fn fmt_vec(v: &[f64]) -> String {
    let parts: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", parts.join(", "))
}
