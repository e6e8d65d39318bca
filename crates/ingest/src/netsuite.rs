//! Inert NetSuite connector placeholder.
//!
//! The tool is CSV-first. This type exists so connection settings have a
//! home in configuration, but it never performs IO and every fetch reports
//! the source as unavailable.

use stocklens_inventory::InventoryRecord;

use crate::error::IngestError;

/// Connection settings for a future SuiteTalk REST integration.
#[derive(Debug, Clone, PartialEq)]
pub struct NetSuiteConfig {
    pub endpoint: String,
    pub token: String,
}

/// Placeholder inventory source.
#[derive(Debug, Clone)]
pub struct NetSuiteSource {
    config: NetSuiteConfig,
}

impl NetSuiteSource {
    pub fn new(config: NetSuiteConfig) -> Self {
        Self { config }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    // TODO: wire up the SuiteTalk REST client once the credential flow is
    // decided; until then the CSV path is the only live source.
    pub fn fetch_inventory(&self) -> Result<Vec<InventoryRecord>, IngestError> {
        Err(IngestError::Unsupported(format!(
            "NetSuite endpoint {} is not connected",
            self.config.endpoint
        )))
    }
}
