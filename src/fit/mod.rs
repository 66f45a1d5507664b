//! Trend fitting.
//!
//! Responsibilities:
//!
//! - expand years into the cubic design matrix
//! - solve the OLS problem for the trend coefficients
//! - compute fit diagnostics over the historical window

pub mod fitter;

pub use fitter::*;
