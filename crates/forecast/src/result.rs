//! Forecast outputs and the per-pair skip taxonomy.

use serde::{Deserialize, Serialize};

use stocklens_core::Horizon;

use crate::holt::FitError;

/// Projected demand for one pair over the run's horizon. Immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub item_id: String,
    pub location: String,
    pub horizon: Horizon,
    /// Whole-unit total over the horizon. Rounded half-to-even, never
    /// negative.
    pub total_units: f64,
}

/// Why a pair produced no row.
///
/// These are normal exclusion outcomes, not run failures; the aggregator
/// recovers them locally and carries on.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Fewer distinct days of history than the eligibility threshold.
    InsufficientHistory { days: usize },
    /// The smoothing fit rejected the series.
    FitFailed(FitError),
}

impl core::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SkipReason::InsufficientHistory { days } => {
                write!(f, "insufficient history ({days} days)")
            }
            SkipReason::FitFailed(e) => write!(f, "fit failed: {e}"),
        }
    }
}

/// One run's eligible forecasts, in deterministic pair order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastTable {
    rows: Vec<ForecastResult>,
}

impl ForecastTable {
    pub fn rows(&self) -> &[ForecastResult] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<ForecastResult> {
        self.rows
    }

    pub(crate) fn push(&mut self, row: ForecastResult) {
        self.rows.push(row);
    }
}
