use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stocklens_core::ValueObject;

/// One recorded sale: an item moved some units at a location on a date.
///
/// Observations are immutable once loaded. The loader guarantees the date
/// parsed and `units_sold` is a finite non-negative number; this layer does
/// not re-validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesObservation {
    pub item_id: String,
    pub location: String,
    pub date: NaiveDate,
    pub units_sold: f64,
}

/// The (item, location) combination demand is tracked against.
///
/// Each pair's history is independent of every other pair's.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairKey {
    pub item_id: String,
    pub location: String,
}

impl PairKey {
    pub fn new(item_id: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            location: location.into(),
        }
    }

    pub fn matches(&self, obs: &SalesObservation) -> bool {
        obs.item_id == self.item_id && obs.location == self.location
    }
}

impl ValueObject for PairKey {}

impl core::fmt::Display for PairKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} @ {}", self.item_id, self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(item: &str, location: &str) -> SalesObservation {
        SalesObservation {
            item_id: item.to_string(),
            location: location.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            units_sold: 4.0,
        }
    }

    #[test]
    fn pair_matches_both_fields() {
        let pair = PairKey::new("Booster Pack", "Main");
        assert!(pair.matches(&obs("Booster Pack", "Main")));
        assert!(!pair.matches(&obs("Booster Pack", "Online")));
        assert!(!pair.matches(&obs("Dice Set", "Main")));
    }
}
