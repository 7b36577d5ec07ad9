//! Currency normalization into the reporting currency.

mod conversion_table;

pub use conversion_table::{normalize_currency_code, ConversionTable};
