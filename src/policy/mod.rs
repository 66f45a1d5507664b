//! Post-2020 policy decay adjustment.
//!
//! The raw cubic trend is multiplied by a compounding 2%-per-year reduction
//! for years strictly after 2020, reflecting tightened EU ETS caps and
//! net-zero commitments. This is a pure elementwise transform, not a second
//! fitted model.
//!
//! The decay compounds from the base year 2020 while the filter boundary is
//! strict (`year > 2020`): 2020 itself is never adjusted and 2021 gets a
//! single factor of 0.98. That pairing is intentional and must not be
//! "fixed" to start the exponent at 1 for 2021's distance from itself.

/// Decay applies to years strictly greater than this.
pub const DECAY_BASE_YEAR: i32 = 2020;

/// Fraction of emissions retained per post-2020 year (0.98 = 2% annual decay).
pub const ANNUAL_RETENTION: f64 = 0.98;

/// Policy multiplier for `year`: `0.98^(year - 2020)` after 2020, else 1.
pub fn decay_factor(year: i32) -> f64 {
    if year > DECAY_BASE_YEAR {
        ANNUAL_RETENTION.powi(year - DECAY_BASE_YEAR)
    } else {
        1.0
    }
}

/// Apply the policy adjustment to a raw trend value.
pub fn adjust(year: i32, raw_fit: f64) -> f64 {
    raw_fit * decay_factor(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_year_is_not_adjusted() {
        // Strict "> 2020": 2020 passes through with factor exactly 1.
        assert_eq!(decay_factor(2020), 1.0);
        assert!((decay_factor(2021) - 0.98).abs() < 1e-15);
    }

    #[test]
    fn historical_years_pass_through() {
        for year in 1990..=2020 {
            assert_eq!(decay_factor(year), 1.0, "year {year}");
            assert_eq!(adjust(year, 3000.0), 3000.0);
        }
    }

    #[test]
    fn decay_compounds_annually() {
        // 0.98^10 at 2030.
        assert!((decay_factor(2030) - 0.98f64.powi(10)).abs() < 1e-15);
        assert!((decay_factor(2030) - 0.8170728068875468).abs() < 1e-12);
        // 0.98^30 at 2050.
        assert!((decay_factor(2050) - 0.98f64.powi(30)).abs() < 1e-15);

        // Consecutive years differ by exactly one retention factor.
        for year in 2021..2050 {
            let ratio = decay_factor(year + 1) / decay_factor(year);
            assert!((ratio - ANNUAL_RETENTION).abs() < 1e-12);
        }
    }

    #[test]
    fn adjust_scales_raw_fit() {
        let raw = 2500.0;
        let adjusted = adjust(2035, raw);
        assert!((adjusted - raw * 0.98f64.powi(15)).abs() < 1e-9);
    }
}
