//! Drives the series builder and the smoothing model across every pair.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};

use stocklens_core::Horizon;
use stocklens_sales::{DemandSeries, PairKey, SalesObservation, build_series};

use crate::holt::HoltLinear;
use crate::result::{ForecastResult, ForecastTable, SkipReason};

/// Minimum days of history before a pair is forecast.
///
/// Fixed policy, not operator-configurable: the trend fit is unreliable on
/// shorter histories. The boundary is inclusive, so a 30-day series is
/// eligible.
pub const MIN_HISTORY_DAYS: usize = 30;

/// Forecast one pair's series, or explain why it is skipped.
///
/// The returned total is the sum of the per-day projections over the
/// horizon, clamped at zero and rounded half-to-even to whole units.
pub fn forecast_series(series: &DemandSeries, horizon: Horizon) -> Result<f64, SkipReason> {
    if series.len() < MIN_HISTORY_DAYS {
        return Err(SkipReason::InsufficientHistory { days: series.len() });
    }

    let values: Vec<f64> = series.values().collect();
    let model = HoltLinear::fit_auto(&values).map_err(SkipReason::FitFailed)?;
    let total: f64 = model.forecast(horizon.days()).iter().sum();

    Ok(round_half_even(total.max(0.0)))
}

/// Forecast every pair present in the observations.
///
/// Enumerates the distinct items and distinct locations (sorted, so output
/// order is deterministic) and forecasts each combination that actually has
/// history. Pairs with no observations, too little history, or a failed fit
/// are excluded, never represented as zero or error rows.
pub fn forecast_all(observations: &[SalesObservation], horizon: Horizon) -> ForecastTable {
    let cancel = AtomicBool::new(false);
    forecast_all_with_cancel(observations, horizon, &cancel)
}

/// Like [`forecast_all`], checking `cancel` between pairs so an enclosing
/// process can abort a long batch cleanly. A cancelled run returns the rows
/// completed so far.
pub fn forecast_all_with_cancel(
    observations: &[SalesObservation],
    horizon: Horizon,
    cancel: &AtomicBool,
) -> ForecastTable {
    let items: BTreeSet<&str> = observations.iter().map(|o| o.item_id.as_str()).collect();
    let locations: BTreeSet<&str> = observations.iter().map(|o| o.location.as_str()).collect();

    let mut table = ForecastTable::default();
    for item in &items {
        for location in &locations {
            if cancel.load(Ordering::Relaxed) {
                tracing::info!(rows = table.len(), "forecast run cancelled");
                return table;
            }

            let pair = PairKey::new(*item, *location);
            let series = build_series(observations, &pair);
            if series.is_empty() {
                continue;
            }

            match forecast_series(&series, horizon) {
                Ok(total_units) => table.push(ForecastResult {
                    item_id: (*item).to_string(),
                    location: (*location).to_string(),
                    horizon,
                    total_units,
                }),
                Err(reason) => tracing::debug!(pair = %pair, %reason, "pair skipped"),
            }
        }
    }

    table
}

/// Round to the nearest whole unit, ties to the even neighbour.
///
/// Callers pass non-negative totals (clamped upstream).
fn round_half_even(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor == 0.5 {
        if (floor as i64) % 2 == 0 { floor } else { floor + 1.0 }
    } else {
        x.round()
    }
}
