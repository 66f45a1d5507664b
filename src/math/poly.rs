//! Polynomial design rows and evaluation.
//!
//! The trend model is linear in its coefficients once each year is expanded
//! into powers `[1, t, t^2, t^3]`, so the fit reduces to one OLS solve over
//! the expanded design matrix.
//!
//! Numerical note: callers pass the *offset* year `t = year - base_year`, not
//! the raw calendar year. With raw years the cubic column reaches ~8e9 while
//! the intercept column stays at 1, which needlessly degrades the SVD.

/// Fill a design row with powers of `t`: `out[j] = t^j`.
///
/// The row includes the constant term first (intercept). The length of `out`
/// determines the polynomial degree (`out.len() - 1`).
pub fn fill_design_row(t: f64, out: &mut [f64]) {
    let mut p = 1.0;
    for slot in out.iter_mut() {
        *slot = p;
        p *= t;
    }
}

/// Evaluate `coeffs[0] + coeffs[1]*t + ... + coeffs[d]*t^d` in Horner form.
pub fn horner(coeffs: &[f64], t: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn design_row_is_powers_of_t() {
        let mut row = [0.0; 4];
        fill_design_row(3.0, &mut row);
        assert_eq!(row, [1.0, 3.0, 9.0, 27.0]);
    }

    #[test]
    fn horner_matches_naive_evaluation() {
        let coeffs = [2.0, -1.0, 0.5, 0.25];
        for &t in &[-2.0_f64, 0.0, 1.0, 3.5, 60.0] {
            let naive: f64 = coeffs
                .iter()
                .enumerate()
                .map(|(j, &c)| c * t.powi(j as i32))
                .sum();
            assert!((horner(&coeffs, t) - naive).abs() < 1e-9 * naive.abs().max(1.0));
        }
    }
}
