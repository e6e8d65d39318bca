//! Data loading boundary.
//!
//! Everything the pipeline consumes enters through this crate: CSV tables
//! supplied by the operator, plus the inert NetSuite placeholder. Structural
//! problems (missing columns, unparseable rows) abort the whole run here so
//! the pure domain layers never see dirty data.

pub mod error;
pub mod filter;
pub mod loader;
pub mod netsuite;

pub use error::IngestError;
pub use filter::{FilterSpec, RegionScope};
pub use loader::{
    load_inventory, load_inventory_file, load_sales, load_sales_file, load_sku_list,
    load_sku_list_file,
};
pub use netsuite::{NetSuiteConfig, NetSuiteSource};
