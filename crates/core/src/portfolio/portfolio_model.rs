use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::records::Resource;
use crate::table::Page;
use crate::utils::decimal_math::saturating_sum;
use crate::utils::number_format::{format_money, format_percentage, format_shares};

/// One cap-table entry the investor holds in a round.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestorHolding {
    pub entry_id: String,
    pub title: Option<String>,
    pub shares: u64,
    /// Recorded total investment in the round's currency.
    pub total_investment: Option<Decimal>,
    /// Share of the round's full cap table.
    pub percentage: Decimal,
    /// `shares * minimum_share` converted into the reporting currency.
    pub normalized_value: Decimal,
}

impl InvestorHolding {
    pub fn shares_display(&self) -> String {
        format_shares(self.shares)
    }

    pub fn percentage_display(&self) -> String {
        format_percentage(self.percentage)
    }
}

/// A funding round as it appears on an investor's dashboard.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRow {
    pub round_id: String,
    pub startup_id: Option<String>,
    pub company_name: String,
    pub funding_name: String,
    pub funding_type: String,
    pub currency: String,
    pub money_raised: Option<Decimal>,
    pub pre_money_valuation: Option<Decimal>,
    pub announced_date: String,
    pub closed_date: String,
    pub minimum_share: Decimal,
    /// Total shares of the round, over its full cap table.
    pub round_total_shares: u64,
    pub holdings: Vec<InvestorHolding>,
}

impl InvestmentRow {
    pub fn normalized_value(&self) -> Decimal {
        saturating_sum(self.holdings.iter().map(|h| h.normalized_value))
    }

    /// Key grouping rows of the same company.
    pub fn company_key(&self) -> &str {
        self.startup_id.as_deref().unwrap_or(&self.company_name)
    }
}

/// Portfolio-level metrics in the reporting currency.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub top_invested_company: String,
    /// Rounds the investor holds entries in.
    pub investment_count: usize,
    /// Investor entries across all rounds; the divisor of the average.
    pub investment_events: usize,
    pub average_investment_size: Decimal,
    pub total_investment_amount: Decimal,
    pub reporting_currency: String,
}

impl PortfolioSummary {
    pub fn average_investment_display(&self) -> String {
        format_money(&self.reporting_currency, Some(self.average_investment_size))
    }

    pub fn total_investment_display(&self) -> String {
        format_money(&self.reporting_currency, Some(self.total_investment_amount))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestorDashboard {
    pub investor_id: String,
    pub summary: PortfolioSummary,
    pub rows: Page<InvestmentRow>,
    /// Startup avatars keyed by startup id; unresolved startups are absent.
    #[serde(skip)]
    pub avatars: HashMap<String, Resource>,
}
