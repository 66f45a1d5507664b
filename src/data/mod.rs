//! Embedded historical data.
//!
//! The tool has no ingestion pipeline: the full EU CO2 emissions history is
//! compiled in as literals.

pub mod historical;

pub use historical::*;
