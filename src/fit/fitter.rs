//! Cubic trend fit over the historical observations.
//!
//! Given the 34 (year, emissions) pairs we solve one unweighted OLS problem
//! on the design matrix of `[1, t, t^2, t^3]` rows, where `t` is the year
//! offset from the first observation. The degree is fixed; there is no
//! regularization, cross-validation, or model selection.

use nalgebra::{DMatrix, DVector};

use crate::domain::{FitDiagnostics, FitResult, Observation, TREND_DEGREE, TrendModel};
use crate::error::AppError;
use crate::math::{fill_design_row, solve_least_squares};

/// Fit the cubic trend to the historical series.
///
/// The solve is deterministic: the same observations always produce the same
/// coefficients.
pub fn fit_trend(observations: &[Observation]) -> Result<FitResult, AppError> {
    let n = observations.len();
    let p = TREND_DEGREE + 1;
    if n < p {
        return Err(AppError::new(
            3,
            format!("Need at least {p} observations for a degree-{TREND_DEGREE} fit, got {n}."),
        ));
    }

    let base_year = observations[0].year;

    let mut x = DMatrix::zeros(n, p);
    let mut y = DVector::zeros(n);
    let mut row = vec![0.0; p];
    for (i, obs) in observations.iter().enumerate() {
        if !obs.emissions.is_finite() {
            return Err(AppError::new(
                3,
                format!("Non-finite emissions value for year {}.", obs.year),
            ));
        }
        fill_design_row(f64::from(obs.year - base_year), &mut row);
        for (j, &v) in row.iter().enumerate() {
            x[(i, j)] = v;
        }
        y[i] = obs.emissions;
    }

    let beta = solve_least_squares(&x, &y).ok_or_else(|| {
        AppError::new(4, "Least-squares trend fit failed: design matrix is too ill-conditioned.")
    })?;

    let model = TrendModel {
        base_year,
        coeffs: beta.iter().copied().collect(),
    };

    // In-sample diagnostics for the run summary.
    let mut sse = 0.0;
    for obs in observations {
        let residual = obs.emissions - model.predict(obs.year);
        sse += residual * residual;
    }
    let rmse = (sse / n as f64).sqrt();

    Ok(FitResult {
        model,
        quality: FitDiagnostics { sse, rmse, n },
    })
}
