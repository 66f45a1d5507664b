//! Shared forecast pipeline.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! embedded history -> trend fit -> policy adjustment -> forecast grid
//!
//! The CLI front-end can then focus on presentation (chart, console, exports).

use crate::domain::{
    FORECAST_END_YEAR, FORECAST_START_YEAR, FitResult, ForecastPoint, Observation, TrendModel,
};
use crate::error::AppError;
use crate::policy;

/// All computed outputs of a single forecast run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub observations: &'static [Observation],
    pub fit: FitResult,
    pub forecast: Vec<ForecastPoint>,
}

/// Execute the full pipeline and return the computed outputs.
pub fn run_forecast() -> Result<RunOutput, AppError> {
    let observations = crate::data::observations();
    let fit = crate::fit::fit_trend(observations)?;
    let forecast = build_forecast(&fit.model);

    Ok(RunOutput {
        observations,
        fit,
        forecast,
    })
}

/// Build the forecast grid: one point per integer year 1990-2050 inclusive.
///
/// Years through 2020 carry the raw fit unchanged; later years are scaled by
/// the compounding policy decay.
pub fn build_forecast(model: &TrendModel) -> Vec<ForecastPoint> {
    (FORECAST_START_YEAR..=FORECAST_END_YEAR)
        .map(|year| {
            let raw_fit = model.predict(year);
            let decay_factor = policy::decay_factor(year);
            ForecastPoint {
                year,
                raw_fit,
                decay_factor,
                emissions: raw_fit * decay_factor,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_grid_is_61_ascending_years() {
        let run = run_forecast().unwrap();
        assert_eq!(run.forecast.len(), 61);
        assert_eq!(run.forecast[0].year, 1990);
        assert_eq!(run.forecast[60].year, 2050);
        for pair in run.forecast.windows(2) {
            assert_eq!(pair[1].year, pair[0].year + 1);
        }
    }

    #[test]
    fn pre_2021_years_carry_the_raw_fit_exactly() {
        let run = run_forecast().unwrap();
        for p in run.forecast.iter().filter(|p| p.year <= 2020) {
            assert_eq!(p.decay_factor, 1.0, "year {}", p.year);
            assert_eq!(p.emissions, p.raw_fit, "year {}", p.year);
            let direct = run.fit.model.predict(p.year);
            assert!((p.emissions - direct).abs() < 1e-9, "year {}", p.year);
        }
    }

    #[test]
    fn post_2020_years_are_decay_adjusted() {
        let run = run_forecast().unwrap();
        for p in run.forecast.iter().filter(|p| p.year > 2020) {
            let factor = 0.98f64.powi(p.year - 2020);
            assert!((p.decay_factor - factor).abs() < 1e-15, "year {}", p.year);
            let expected = p.raw_fit * factor;
            let tol = 1e-9 * expected.abs().max(1.0);
            assert!((p.emissions - expected).abs() < tol, "year {}", p.year);
        }
    }

    #[test]
    fn runs_are_identical() {
        let a = run_forecast().unwrap();
        let b = run_forecast().unwrap();
        for (pa, pb) in a.forecast.iter().zip(&b.forecast) {
            assert_eq!(pa.year, pb.year);
            assert_eq!(pa.emissions, pb.emissions);
        }
    }
}
