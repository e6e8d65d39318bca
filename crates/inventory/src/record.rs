use serde::{Deserialize, Serialize};

/// One stocked item at one location, as supplied by the operator's
/// inventory table. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub item_name: String,
    pub price: f64,
    pub cost_price: f64,
    pub units_left: f64,
    pub units_sold: f64,
    pub reorder_point: f64,
    pub category: String,
    pub supplier: String,
    pub location: String,
}

impl InventoryRecord {
    /// Gross margin as a percentage of the sale price, rounded to two
    /// decimals. Undefined (`None`) when the price is not positive.
    pub fn margin_pct(&self) -> Option<f64> {
        if self.price <= 0.0 {
            return None;
        }
        Some(round2(
            (self.price - self.cost_price) / self.price * 100.0,
        ))
    }

    /// Capital tied up in remaining stock, valued at cost.
    pub fn stock_value(&self) -> f64 {
        round2(self.cost_price * self.units_left)
    }

    /// Share of handled units that have sold through, in `[0, 1)`.
    ///
    /// The small epsilon keeps the ratio defined for items with no movement
    /// at all.
    pub fn turnover(&self) -> f64 {
        round2(self.units_sold / (self.units_sold + self.units_left + 1e-9))
    }

    /// Remaining stock has fallen below the configured reorder point.
    pub fn below_reorder_point(&self) -> bool {
        self.units_left < self.reorder_point
    }
}

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> InventoryRecord {
        InventoryRecord {
            item_name: "Booster Pack".to_string(),
            price: 6.0,
            cost_price: 4.5,
            units_left: 40.0,
            units_sold: 60.0,
            reorder_point: 25.0,
            category: "TCG".to_string(),
            supplier: "Wholesale North".to_string(),
            location: "Main Warehouse".to_string(),
        }
    }

    #[test]
    fn margin_is_a_percentage_of_price() {
        assert_eq!(record().margin_pct(), Some(25.0));
    }

    #[test]
    fn margin_is_undefined_for_free_items() {
        let mut r = record();
        r.price = 0.0;
        assert_eq!(r.margin_pct(), None);
    }

    #[test]
    fn stock_value_uses_cost_not_price() {
        assert_eq!(record().stock_value(), 180.0);
    }

    #[test]
    fn turnover_is_sold_share_of_handled_units() {
        assert_eq!(record().turnover(), 0.6);
    }

    #[test]
    fn turnover_is_zero_for_dead_stock() {
        let mut r = record();
        r.units_sold = 0.0;
        assert_eq!(r.turnover(), 0.0);
    }

    #[test]
    fn reorder_flag_is_strictly_below_threshold() {
        let mut r = record();
        r.units_left = 25.0;
        assert!(!r.below_reorder_point());
        r.units_left = 24.9;
        assert!(r.below_reorder_point());
    }
}
