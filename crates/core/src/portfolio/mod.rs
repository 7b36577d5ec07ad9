//! Investor portfolio: dashboard rows, summary metrics and cap-table reads.

mod portfolio_aggregator;
mod portfolio_model;
mod portfolio_service;
mod portfolio_traits;

pub use portfolio_aggregator::*;
pub use portfolio_model::*;
pub use portfolio_service::*;
pub use portfolio_traits::*;
