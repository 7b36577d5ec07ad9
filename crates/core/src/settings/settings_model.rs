use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_SIZE, DEFAULT_REPORTING_CURRENCY, RESOURCE_FETCH_BATCH_SIZE};
use crate::errors::{Error, Result};
use crate::fx::ConversionTable;
use crate::table::TableQuery;

/// Engine-wide settings, loadable from JSON:
///
/// ```json
/// {
///   "defaultPageSize": 20,
///   "resourceBatchSize": 8,
///   "conversionTable": {"reportingCurrency": "PHP", "rates": {"USD": 50.0}}
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineSettings {
    pub default_page_size: usize,
    pub resource_batch_size: usize,
    pub conversion_table: ConversionTable,
}

/// Page size 20, batches of 8 and a conversion table reporting in `PHP` with
/// no rates. Every other currency (USD, EUR, GBP, JPY, KRW included)
/// normalizes at `1` with a warning until rates are configured, e.g. through
/// [`EngineSettings::from_json`].
impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            resource_batch_size: RESOURCE_FETCH_BATCH_SIZE,
            conversion_table: ConversionTable::new(DEFAULT_REPORTING_CURRENCY),
        }
    }
}

impl EngineSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        let mut settings: EngineSettings = serde_json::from_str(json)
            .map_err(|e| Error::InvalidConfigValue(format!("engine settings: {}", e)))?;
        // Rebuild so currency codes are normalized.
        settings.conversion_table = ConversionTable::from_rates(
            settings.conversion_table.reporting_currency(),
            settings.conversion_table.rates().clone(),
        )?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(Error::InvalidConfigValue(
                "defaultPageSize must be greater than zero".to_string(),
            ));
        }
        if self.resource_batch_size == 0 {
            return Err(Error::InvalidConfigValue(
                "resourceBatchSize must be greater than zero".to_string(),
            ));
        }
        self.conversion_table.validate()
    }

    pub fn reporting_currency(&self) -> &str {
        self.conversion_table.reporting_currency()
    }

    /// A fresh table query using the configured page size.
    pub fn table_query(&self) -> Result<TableQuery> {
        TableQuery::new(self.default_page_size)
    }
}
