//! Roll-up metrics and reorder alerts over an inventory snapshot.

use serde::{Deserialize, Serialize};

use crate::record::{InventoryRecord, round2};

/// Headline metrics over a (possibly filtered) set of inventory records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Sum of per-record stock value.
    pub total_stock_value: f64,
    /// Mean margin over records with a defined margin.
    pub avg_margin_pct: f64,
    /// Mean turnover ratio over all records.
    pub avg_turnover: f64,
}

impl KpiSummary {
    pub fn summarize(records: &[InventoryRecord]) -> Self {
        let total_stock_value = round2(records.iter().map(InventoryRecord::stock_value).sum());

        let margins: Vec<f64> = records.iter().filter_map(InventoryRecord::margin_pct).collect();
        let avg_margin_pct = if margins.is_empty() {
            0.0
        } else {
            round2(margins.iter().sum::<f64>() / margins.len() as f64)
        };

        let avg_turnover = if records.is_empty() {
            0.0
        } else {
            round2(
                records.iter().map(InventoryRecord::turnover).sum::<f64>()
                    / records.len() as f64,
            )
        };

        Self {
            total_stock_value,
            avg_margin_pct,
            avg_turnover,
        }
    }
}

/// A record whose remaining stock has fallen below its reorder point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderAlert {
    pub item_name: String,
    pub location: String,
    pub units_left: f64,
    pub reorder_point: f64,
}

impl ReorderAlert {
    /// Scan a record set for reorder risk, preserving input order.
    pub fn scan(records: &[InventoryRecord]) -> Vec<ReorderAlert> {
        records
            .iter()
            .filter(|r| r.below_reorder_point())
            .map(|r| ReorderAlert {
                item_name: r.item_name.clone(),
                location: r.location.clone(),
                units_left: r.units_left,
                reorder_point: r.reorder_point,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, price: f64, cost: f64, left: f64, sold: f64, reorder: f64) -> InventoryRecord {
        InventoryRecord {
            item_name: name.to_string(),
            price,
            cost_price: cost,
            units_left: left,
            units_sold: sold,
            reorder_point: reorder,
            category: "TCG".to_string(),
            supplier: "Wholesale North".to_string(),
            location: "Main Warehouse".to_string(),
        }
    }

    #[test]
    fn summary_over_empty_snapshot_is_all_zero() {
        let summary = KpiSummary::summarize(&[]);
        assert_eq!(summary.total_stock_value, 0.0);
        assert_eq!(summary.avg_margin_pct, 0.0);
        assert_eq!(summary.avg_turnover, 0.0);
    }

    #[test]
    fn summary_aggregates_per_record_metrics() {
        let records = vec![
            record("Booster Pack", 6.0, 4.5, 40.0, 60.0, 25.0),
            record("Dice Set", 10.0, 5.0, 10.0, 90.0, 5.0),
        ];
        let summary = KpiSummary::summarize(&records);

        // 4.5 * 40 + 5 * 10
        assert_eq!(summary.total_stock_value, 230.0);
        // (25 + 50) / 2
        assert_eq!(summary.avg_margin_pct, 37.5);
        // (0.6 + 0.9) / 2
        assert_eq!(summary.avg_turnover, 0.75);
    }

    #[test]
    fn undefined_margins_are_left_out_of_the_mean() {
        let records = vec![
            record("Booster Pack", 6.0, 4.5, 40.0, 60.0, 25.0),
            record("Promo Freebie", 0.0, 0.5, 100.0, 0.0, 10.0),
        ];
        let summary = KpiSummary::summarize(&records);
        assert_eq!(summary.avg_margin_pct, 25.0);
    }

    #[test]
    fn scan_flags_only_records_below_reorder_point() {
        let records = vec![
            record("Booster Pack", 6.0, 4.5, 40.0, 60.0, 25.0),
            record("Dice Set", 10.0, 5.0, 4.0, 90.0, 5.0),
        ];
        let alerts = ReorderAlert::scan(&records);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].item_name, "Dice Set");
        assert_eq!(alerts[0].units_left, 4.0);
    }
}
