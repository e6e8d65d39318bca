//! The trend-popularity contract and an offline implementation.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One popularity sample for a keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// Relative interest on the provider's scale (0 to 100 for the usual
    /// search-trends providers).
    pub interest: f64,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrendError {
    #[error("trend provider rate limited the request")]
    RateLimited,

    #[error("trend provider unavailable: {0}")]
    Unavailable(String),
}

/// External popularity lookup.
///
/// An unknown keyword yields an empty sample list, not an error; errors are
/// reserved for the provider itself misbehaving.
pub trait TrendSource {
    fn interest_over_time(&self, keyword: &str) -> Result<Vec<TrendPoint>, TrendError>;
}

/// Fixed in-memory samples, for tests and offline runs.
#[derive(Debug, Clone, Default)]
pub struct StaticTrendSource {
    series: HashMap<String, Vec<TrendPoint>>,
}

impl StaticTrendSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, keyword: impl Into<String>, points: Vec<TrendPoint>) -> Self {
        self.series.insert(keyword.into(), points);
        self
    }
}

impl TrendSource for StaticTrendSource {
    fn interest_over_time(&self, keyword: &str) -> Result<Vec<TrendPoint>, TrendError> {
        Ok(self.series.get(keyword).cloned().unwrap_or_default())
    }
}
