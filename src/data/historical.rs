//! Historical EU CO2 emissions, 1990-2023 (MtCO2e).
//!
//! One observation per calendar year, strictly increasing, 34 entries.
//! The series is embedded as literals and loaded once per run; there is no
//! external input of any kind.

use crate::domain::Observation;

/// Annual EU CO2 emissions in MtCO2e, 1990-2023.
pub const HISTORY: [Observation; 34] = [
    Observation { year: 1990, emissions: 3881.03 },
    Observation { year: 1991, emissions: 3815.65 },
    Observation { year: 1992, emissions: 3689.01 },
    Observation { year: 1993, emissions: 3619.73 },
    Observation { year: 1994, emissions: 3601.17 },
    Observation { year: 1995, emissions: 3647.68 },
    Observation { year: 1996, emissions: 3732.57 },
    Observation { year: 1997, emissions: 3666.44 },
    Observation { year: 1998, emissions: 3656.89 },
    Observation { year: 1999, emissions: 3601.49 },
    Observation { year: 2000, emissions: 3612.87 },
    Observation { year: 2001, emissions: 3669.73 },
    Observation { year: 2002, emissions: 3670.06 },
    Observation { year: 2003, emissions: 3749.10 },
    Observation { year: 2004, emissions: 3756.56 },
    Observation { year: 2005, emissions: 3748.43 },
    Observation { year: 2006, emissions: 3765.69 },
    Observation { year: 2007, emissions: 3715.68 },
    Observation { year: 2008, emissions: 3639.80 },
    Observation { year: 2009, emissions: 3344.39 },
    Observation { year: 2010, emissions: 3438.29 },
    Observation { year: 2011, emissions: 3340.99 },
    Observation { year: 2012, emissions: 3272.26 },
    Observation { year: 2013, emissions: 3189.76 },
    Observation { year: 2014, emissions: 3051.99 },
    Observation { year: 2015, emissions: 3108.18 },
    Observation { year: 2016, emissions: 3107.87 },
    Observation { year: 2017, emissions: 3131.70 },
    Observation { year: 2018, emissions: 3062.56 },
    Observation { year: 2019, emissions: 2918.21 },
    Observation { year: 2020, emissions: 2639.37 },
    Observation { year: 2021, emissions: 2814.00 },
    Observation { year: 2022, emissions: 2747.25 },
    Observation { year: 2023, emissions: 2492.88 },
];

/// The embedded historical series.
pub fn observations() -> &'static [Observation] {
    &HISTORY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_covers_1990_to_2023_consecutively() {
        let obs = observations();
        assert_eq!(obs.len(), 34);
        assert_eq!(obs[0].year, 1990);
        assert_eq!(obs[obs.len() - 1].year, 2023);
        for pair in obs.windows(2) {
            assert_eq!(pair[1].year, pair[0].year + 1);
        }
    }

    #[test]
    fn history_values_are_plausible() {
        for o in observations() {
            assert!(o.emissions.is_finite());
            assert!(o.emissions > 2000.0 && o.emissions < 4000.0, "year {}", o.year);
        }
    }
}
