//! Operator-selected slices of the inventory table.

use serde::{Deserialize, Serialize};

use stocklens_inventory::InventoryRecord;

/// Geographic slice, matching the warehouse naming scheme: Canadian
/// locations carry "CA" (the main warehouse counts as Canadian), US
/// locations carry "US".
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RegionScope {
    #[default]
    All,
    Ca,
    Us,
}

impl RegionScope {
    pub fn matches(&self, location: &str) -> bool {
        match self {
            RegionScope::All => true,
            RegionScope::Ca => location.contains("CA") || location == "Main Warehouse",
            RegionScope::Us => location.contains("US"),
        }
    }
}

/// Which records a run looks at. An empty allowlist means no restriction
/// on that dimension.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    pub region: RegionScope,
    pub categories: Vec<String>,
    pub suppliers: Vec<String>,
    pub locations: Vec<String>,
    pub skus: Vec<String>,
}

impl FilterSpec {
    pub fn retains(&self, record: &InventoryRecord) -> bool {
        self.region.matches(&record.location)
            && allowed(&self.categories, &record.category)
            && allowed(&self.suppliers, &record.supplier)
            && allowed(&self.locations, &record.location)
            && allowed(&self.skus, &record.item_name)
    }

    /// Drop records this filter does not retain, preserving input order.
    pub fn apply(&self, records: Vec<InventoryRecord>) -> Vec<InventoryRecord> {
        records.into_iter().filter(|r| self.retains(r)).collect()
    }
}

fn allowed(allowlist: &[String], value: &str) -> bool {
    allowlist.is_empty() || allowlist.iter().any(|entry| entry == value)
}
