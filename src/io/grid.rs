//! Read/write forecast JSON files.
//!
//! Forecast JSON is the "portable" representation of one run:
//! - the fitted trend (base year + coefficients) and its diagnostics
//! - the decay parameters in force
//! - the full adjusted grid as parallel year/value arrays
//!
//! The schema is defined by `domain::ForecastFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{FitResult, ForecastFile, ForecastGrid, ForecastPoint};
use crate::error::AppError;
use crate::policy;

/// Write a forecast JSON file.
pub fn write_forecast_json(
    path: &Path,
    fit: &FitResult,
    forecast: &[ForecastPoint],
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create forecast JSON '{}': {e}", path.display()))
    })?;

    let out = ForecastFile {
        tool: "co2f".to_string(),
        decay_base_year: policy::DECAY_BASE_YEAR,
        annual_retention: policy::ANNUAL_RETENTION,
        model: fit.model.clone(),
        fit_quality: fit.quality.clone(),
        grid: ForecastGrid {
            years: forecast.iter().map(|p| p.year).collect(),
            emissions: forecast.iter().map(|p| p.emissions).collect(),
        },
    };

    serde_json::to_writer_pretty(file, &out)
        .map_err(|e| AppError::new(2, format!("Failed to write forecast JSON: {e}")))?;

    Ok(())
}

/// Read a forecast JSON file.
pub fn read_forecast_json(path: &Path) -> Result<ForecastFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open forecast JSON '{}': {e}", path.display()))
    })?;
    let out: ForecastFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid forecast JSON: {e}")))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_forecast;

    #[test]
    fn forecast_json_round_trips() {
        let run = run_forecast().unwrap();
        let path = std::env::temp_dir().join(format!("co2f-grid-test-{}.json", std::process::id()));

        write_forecast_json(&path, &run.fit, &run.forecast).unwrap();
        let loaded = read_forecast_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.tool, "co2f");
        assert_eq!(loaded.decay_base_year, 2020);
        assert_eq!(loaded.model.base_year, run.fit.model.base_year);
        assert_eq!(loaded.model.coeffs, run.fit.model.coeffs);
        assert_eq!(loaded.grid.years.len(), 61);
        assert_eq!(loaded.grid.emissions.len(), 61);
        assert_eq!(loaded.grid.years[0], 1990);
        assert_eq!(loaded.grid.years[60], 2050);
    }
}
