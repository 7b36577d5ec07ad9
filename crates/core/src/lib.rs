//! Capview Core - tabular data engine, domain models and services.
//!
//! Raw records come from a [`records::RecordSourceTrait`] implementation
//! (the `capview-client` crate provides the HTTP one). The table engine sorts,
//! searches and paginates them; the aggregators derive ownership and portfolio
//! figures from the full matching set.

pub mod cap_table;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod portfolio;
pub mod profiles;
pub mod records;
pub mod settings;
pub mod table;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
