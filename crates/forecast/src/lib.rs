//! `stocklens-forecast`
//!
//! **Responsibility:** the demand forecasting boundary.
//!
//! This crate turns per-pair demand history into horizon totals:
//! - It does not load data, render output, or talk to anything external.
//! - Model state is fit fresh per pair; nothing is shared across pairs or runs.
//! - Per-pair failures are recovered locally; a run always yields a
//!   (possibly partial) table.

pub mod aggregate;
pub mod holt;
pub mod result;

pub use aggregate::{MIN_HISTORY_DAYS, forecast_all, forecast_all_with_cancel, forecast_series};
pub use holt::{FitError, HoltLinear};
pub use result::{ForecastResult, ForecastTable, SkipReason};
