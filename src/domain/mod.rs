//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the historical observation type (`Observation`)
//! - fit outputs (`TrendModel`, `FitResult`, `FitDiagnostics`)
//! - the forecast grid entry (`ForecastPoint`)
//! - run configuration derived from CLI flags (`ForecastConfig`)

pub mod types;

pub use types::*;
