//! Reporting: run summary and the forecast console report.

pub mod format;

pub use format::*;
