//! Export the forecast grid to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts: one row per forecast year, with the raw trend and the policy
//! multiplier broken out next to the final value.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::ForecastPoint;
use crate::error::AppError;

/// Write the forecast grid to a CSV file.
pub fn write_forecast_csv(path: &Path, forecast: &[ForecastPoint]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;

    writeln!(file, "year,raw_fit,decay_factor,forecast_mtco2e")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for p in forecast {
        writeln!(
            file,
            "{},{:.4},{:.6},{:.4}",
            p.year, p.raw_fit, p.decay_factor, p.emissions
        )
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_forecast;

    #[test]
    fn csv_has_header_and_one_row_per_year() {
        let run = run_forecast().unwrap();
        let path = std::env::temp_dir().join(format!("co2f-export-test-{}.csv", std::process::id()));

        write_forecast_csv(&path, &run.forecast).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 62);
        assert_eq!(lines[0], "year,raw_fit,decay_factor,forecast_mtco2e");
        assert!(lines[1].starts_with("1990,"));
        assert!(lines[61].starts_with("2050,"));
        // Pre-decay rows carry a unit multiplier.
        assert!(lines[1].contains(",1.000000,"));
    }
}
