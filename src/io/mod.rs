//! Export of forecast outputs (CSV and JSON).

pub mod export;
pub mod grid;
