//! Report assembly for the presentation layer.
//!
//! This crate is the seam between the pure domain computations and
//! whatever renders them: it fixes display conventions (the
//! `forecast_next_<days>` column label) and bundles one run's outputs into
//! a single immutable report.

pub mod dashboard;

pub use dashboard::{DashboardReport, ForecastRow, forecast_column_label};
