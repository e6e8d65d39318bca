//! Per-pair daily demand series and the builder that produces it.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::observation::{PairKey, SalesObservation};

/// Daily demand history for one pair.
///
/// Invariant: dates are strictly increasing and contiguous, one entry per
/// calendar day from the pair's earliest to latest observed date. Days with
/// no sales carry zero demand. The invariant is upheld by [`build_series`],
/// the only producer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DemandSeries {
    points: Vec<(NaiveDate, f64)>,
}

impl DemandSeries {
    /// Number of daily entries (distinct calendar days covered).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[(NaiveDate, f64)] {
        &self.points
    }

    /// Daily demand values in date order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, units)| *units)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|(date, _)| *date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|(date, _)| *date)
    }
}

/// Build the daily demand series for one pair.
///
/// Filters the observations to the pair, sums units sold within each
/// calendar day (duplicate dates are legal input), then resamples onto the
/// complete daily calendar between the pair's first and last observed date
/// inclusive, filling unobserved days with zero.
///
/// A pair with no observations yields an empty series, which downstream
/// treats as ineligible. Pure function of its inputs.
pub fn build_series(observations: &[SalesObservation], pair: &PairKey) -> DemandSeries {
    let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for obs in observations.iter().filter(|o| pair.matches(o)) {
        *by_day.entry(obs.date).or_insert(0.0) += obs.units_sold;
    }

    let (Some(first), Some(last)) = (
        by_day.keys().next().copied(),
        by_day.keys().next_back().copied(),
    ) else {
        return DemandSeries::default();
    };

    let mut points = Vec::new();
    let mut day = first;
    while day <= last {
        points.push((day, by_day.get(&day).copied().unwrap_or(0.0)));
        let Some(next) = day.succ_opt() else { break };
        day = next;
    }

    DemandSeries { points }
}
