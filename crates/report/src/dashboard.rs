//! The per-run dashboard report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stocklens_core::{Horizon, RunId};
use stocklens_forecast::{ForecastResult, ForecastTable, forecast_all};
use stocklens_inventory::{InventoryRecord, KpiSummary, ReorderAlert};
use stocklens_sales::SalesObservation;

/// Display name of the horizon-total column, e.g. `forecast_next_30`.
///
/// The core exposes horizon and total as separate typed fields; encoding
/// the horizon into a column name is purely a display convention and lives
/// here.
pub fn forecast_column_label(horizon: Horizon) -> String {
    format!("forecast_next_{}", horizon.days())
}

/// One presentation row of the forecast table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    pub item_name: String,
    pub location: String,
    pub column: String,
    pub units: f64,
}

impl ForecastRow {
    fn from_result(result: &ForecastResult) -> Self {
        Self {
            item_name: result.item_id.clone(),
            location: result.location.clone(),
            column: forecast_column_label(result.horizon),
            units: result.total_units,
        }
    }
}

/// Everything one run hands to the presentation layer. Immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub run_id: RunId,
    pub generated_at: DateTime<Utc>,
    pub horizon: Horizon,
    pub kpis: KpiSummary,
    pub reorder_alerts: Vec<ReorderAlert>,
    pub forecasts: Vec<ForecastRow>,
}

impl DashboardReport {
    /// Compute a fresh report over the supplied (already filtered) data.
    ///
    /// Deterministic apart from the run id and timestamp; use
    /// [`DashboardReport::from_parts`] in tests to pin both.
    pub fn assemble(
        records: &[InventoryRecord],
        observations: &[SalesObservation],
        horizon: Horizon,
    ) -> Self {
        let table = forecast_all(observations, horizon);
        Self::from_parts(RunId::new(), Utc::now(), records, &table, horizon)
    }

    pub fn from_parts(
        run_id: RunId,
        generated_at: DateTime<Utc>,
        records: &[InventoryRecord],
        table: &ForecastTable,
        horizon: Horizon,
    ) -> Self {
        let kpis = KpiSummary::summarize(records);
        let reorder_alerts = ReorderAlert::scan(records);
        let forecasts = table.rows().iter().map(ForecastRow::from_result).collect();
        tracing::info!(
            %run_id,
            records = records.len(),
            alerts = reorder_alerts.len(),
            forecast_rows = table.len(),
            "report assembled"
        );

        Self {
            run_id,
            generated_at,
            horizon,
            kpis,
            reorder_alerts,
            forecasts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(name: &str, left: f64, reorder: f64) -> InventoryRecord {
        InventoryRecord {
            item_name: name.to_string(),
            price: 6.0,
            cost_price: 4.5,
            units_left: left,
            units_sold: 60.0,
            reorder_point: reorder,
            category: "TCG".to_string(),
            supplier: "Wholesale North".to_string(),
            location: "Main Warehouse".to_string(),
        }
    }

    fn daily(item: &str, location: &str, days: u32, units: f64) -> Vec<SalesObservation> {
        let base = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        (0..days)
            .map(|offset| SalesObservation {
                item_id: item.to_string(),
                location: location.to_string(),
                date: base + chrono::Days::new(u64::from(offset)),
                units_sold: units,
            })
            .collect()
    }

    #[test]
    fn column_label_encodes_the_horizon() {
        assert_eq!(
            forecast_column_label(Horizon::new(60).unwrap()),
            "forecast_next_60"
        );
    }

    #[test]
    fn report_bundles_kpis_alerts_and_forecasts() {
        let records = vec![record("Booster Pack", 40.0, 25.0), record("Dice Set", 2.0, 5.0)];
        let observations = daily("Booster Pack", "Main", 40, 10.0);
        let horizon = Horizon::new(30).unwrap();

        let report = DashboardReport::assemble(&records, &observations, horizon);

        assert_eq!(report.reorder_alerts.len(), 1);
        assert_eq!(report.reorder_alerts[0].item_name, "Dice Set");
        assert_eq!(report.forecasts.len(), 1);
        assert_eq!(report.forecasts[0].column, "forecast_next_30");
        assert!((report.forecasts[0].units - 300.0).abs() < 1.0);
        assert!(report.kpis.total_stock_value > 0.0);
    }

    #[test]
    fn from_parts_is_fully_deterministic() {
        let records = vec![record("Booster Pack", 40.0, 25.0)];
        let observations = daily("Booster Pack", "Main", 40, 10.0);
        let horizon = Horizon::new(30).unwrap();
        let table = forecast_all(&observations, horizon);

        let run_id = RunId::new();
        let at = Utc::now();
        let a = DashboardReport::from_parts(run_id, at, &records, &table, horizon);
        let b = DashboardReport::from_parts(run_id, at, &records, &table, horizon);
        assert_eq!(a, b);
    }
}
