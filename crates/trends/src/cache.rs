//! Time-to-live memoization for trend lookups.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::source::{TrendError, TrendPoint, TrendSource};

struct CacheEntry {
    fetched_at: Instant,
    points: Vec<TrendPoint>,
}

/// Memoizes a [`TrendSource`] per keyword with an explicit time-to-live.
///
/// Staleness is a collaborator-side concern: the forecasting core takes
/// explicit inputs and returns explicit outputs, so any caching has to sit
/// out here with a visible expiry.
pub struct CachedTrendSource<S> {
    inner: S,
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl<S: TrendSource> CachedTrendSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl<S: TrendSource> TrendSource for CachedTrendSource<S> {
    fn interest_over_time(&self, keyword: &str) -> Result<Vec<TrendPoint>, TrendError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(entry) = entries.get(keyword) {
            if entry.fetched_at.elapsed() < self.ttl {
                return Ok(entry.points.clone());
            }
            tracing::debug!(keyword, "trend cache entry expired");
        }

        let points = self.inner.interest_over_time(keyword)?;
        entries.insert(
            keyword.to_string(),
            CacheEntry {
                fetched_at: Instant::now(),
                points: points.clone(),
            },
        );
        Ok(points)
    }
}
