//! CSV loaders for the inventory, sales, and SKU tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use stocklens_inventory::InventoryRecord;
use stocklens_sales::SalesObservation;

use crate::error::IngestError;

const INVENTORY_COLUMNS: [&str; 9] = [
    "item_name",
    "price",
    "cost_price",
    "units_left",
    "units_sold",
    "reorder_point",
    "category",
    "supplier",
    "location",
];

const SALES_COLUMNS: [&str; 4] = ["item_name", "Date", "Units_Sold", "location"];

/// Date formats the sales table is allowed to use.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Load inventory records from a CSV reader.
///
/// The header must carry every required column (extras are ignored); any
/// row that fails to deserialize aborts the load.
pub fn load_inventory<R: Read>(reader: R) -> Result<Vec<InventoryRecord>, IngestError> {
    let mut rdr = csv_reader(reader);
    ensure_columns("inventory", &mut rdr, &INVENTORY_COLUMNS)?;

    let mut records = Vec::new();
    for (index, row) in rdr.deserialize::<InventoryRecord>().enumerate() {
        let record = row.map_err(|e| malformed("inventory", index, e.to_string()))?;
        if !record.price.is_finite() || !record.cost_price.is_finite() {
            return Err(malformed("inventory", index, "non-finite price".to_string()));
        }
        records.push(record);
    }
    tracing::debug!(records = records.len(), "inventory table loaded");
    Ok(records)
}

/// Load inventory records from a CSV file path.
pub fn load_inventory_file(path: impl AsRef<Path>) -> Result<Vec<InventoryRecord>, IngestError> {
    load_inventory(open(path.as_ref())?)
}

#[derive(Debug, Deserialize)]
struct SalesRow {
    item_name: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Units_Sold")]
    units_sold: f64,
    location: String,
}

/// Load sales observations from a CSV reader.
///
/// Dates must parse with one of the accepted formats and units must be
/// finite and non-negative; a bad row rejects the whole table rather than
/// silently producing wrong numbers downstream.
pub fn load_sales<R: Read>(reader: R) -> Result<Vec<SalesObservation>, IngestError> {
    let mut rdr = csv_reader(reader);
    ensure_columns("sales", &mut rdr, &SALES_COLUMNS)?;

    let mut observations = Vec::new();
    for (index, row) in rdr.deserialize::<SalesRow>().enumerate() {
        let row = row.map_err(|e| malformed("sales", index, e.to_string()))?;
        let date = parse_date(&row.date)
            .ok_or_else(|| malformed("sales", index, format!("unparseable date {:?}", row.date)))?;
        if !row.units_sold.is_finite() || row.units_sold < 0.0 {
            return Err(malformed(
                "sales",
                index,
                format!("units_sold must be non-negative, got {}", row.units_sold),
            ));
        }
        observations.push(SalesObservation {
            item_id: row.item_name,
            location: row.location,
            date,
            units_sold: row.units_sold,
        });
    }
    tracing::debug!(observations = observations.len(), "sales table loaded");
    Ok(observations)
}

/// Load sales observations from a CSV file path.
pub fn load_sales_file(path: impl AsRef<Path>) -> Result<Vec<SalesObservation>, IngestError> {
    load_sales(open(path.as_ref())?)
}

/// Load a single-column SKU allowlist (no header). Blank lines are skipped.
pub fn load_sku_list<R: Read>(reader: R) -> Result<Vec<String>, IngestError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut skus = Vec::new();
    for (index, row) in rdr.records().enumerate() {
        let record = row.map_err(|e| malformed("sku", index, e.to_string()))?;
        let Some(sku) = record.get(0) else { continue };
        if !sku.is_empty() {
            skus.push(sku.to_string());
        }
    }
    Ok(skus)
}

/// Load the SKU allowlist from a CSV file path.
pub fn load_sku_list_file(path: impl AsRef<Path>) -> Result<Vec<String>, IngestError> {
    load_sku_list(open(path.as_ref())?)
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn ensure_columns<R: Read>(
    table: &'static str,
    rdr: &mut csv::Reader<R>,
    required: &[&str],
) -> Result<(), IngestError> {
    let headers = rdr
        .headers()
        .map_err(|source| IngestError::Csv { table, source })?;
    let missing: Vec<String> = required
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| (*column).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns { table, missing });
    }
    Ok(())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

fn malformed(table: &'static str, index: usize, reason: String) -> IngestError {
    // Row index is zero-based over data rows; line 1 is the header.
    IngestError::MalformedRow {
        table,
        line: index + 2,
        reason,
    }
}

fn open(path: &Path) -> Result<File, IngestError> {
    File::open(path).map_err(|source| IngestError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVENTORY_CSV: &str = "\
item_name,price,cost_price,units_left,units_sold,reorder_point,category,supplier,location
Booster Pack,6.00,4.50,40,60,25,TCG,Wholesale North,Main Warehouse
Dice Set,10.00,5.00,4,90,5,Accessories,Dice Co,CA-Toronto
";

    const SALES_CSV: &str = "\
item_name,Date,Units_Sold,location
Booster Pack,2026-03-01,10,Main
Booster Pack,2026-03-02,12,Main
Dice Set,03/02/2026,3,Online
";

    #[test]
    fn loads_inventory_rows() {
        let records = load_inventory(INVENTORY_CSV.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].item_name, "Booster Pack");
        assert!((records[0].price - 6.0).abs() < 1e-9);
        assert_eq!(records[1].location, "CA-Toronto");
    }

    #[test]
    fn missing_inventory_columns_abort_with_names() {
        let csv = "item_name,price\nBooster Pack,6.00\n";
        let err = load_inventory(csv.as_bytes()).unwrap_err();
        match err {
            IngestError::MissingColumns { table, missing } => {
                assert_eq!(table, "inventory");
                assert!(missing.contains(&"cost_price".to_string()));
                assert!(missing.contains(&"location".to_string()));
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn loads_sales_rows_with_either_date_format() {
        let observations = load_sales(SALES_CSV.as_bytes()).unwrap();
        assert_eq!(observations.len(), 3);
        assert_eq!(
            observations[0].date,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
        );
        assert_eq!(
            observations[2].date,
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
        );
        assert_eq!(observations[2].item_id, "Dice Set");
    }

    #[test]
    fn unparseable_date_rejects_the_whole_table() {
        let csv = "\
item_name,Date,Units_Sold,location
Booster Pack,soon,10,Main
";
        let err = load_sales(csv.as_bytes()).unwrap_err();
        match err {
            IngestError::MalformedRow { table, line, .. } => {
                assert_eq!(table, "sales");
                assert_eq!(line, 2);
            }
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn negative_units_reject_the_whole_table() {
        let csv = "\
item_name,Date,Units_Sold,location
Booster Pack,2026-03-01,-4,Main
";
        assert!(matches!(
            load_sales(csv.as_bytes()),
            Err(IngestError::MalformedRow { .. })
        ));
    }

    #[test]
    fn non_numeric_units_reject_the_whole_table() {
        let csv = "\
item_name,Date,Units_Sold,location
Booster Pack,2026-03-01,lots,Main
";
        assert!(matches!(
            load_sales(csv.as_bytes()),
            Err(IngestError::MalformedRow { .. })
        ));
    }

    #[test]
    fn sku_list_skips_blank_lines() {
        let csv = "BP-001\n\nDS-204\n";
        let skus = load_sku_list(csv.as_bytes()).unwrap();
        assert_eq!(skus, vec!["BP-001".to_string(), "DS-204".to_string()]);
    }
}
