use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cap_table_model::FundingRound;
use super::ownership::{compute_round_ownership, EntryOwnership};
use crate::table::{paginate, Page, PageRequest};
use crate::utils::decimal_math::saturating_add;
use crate::utils::number_format::{format_money, format_shares};

/// Shares and investment of the entries visible on one page.
///
/// Kept apart from the round totals on [`CapTableView`] so a page subtotal can
/// not stand in for them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CapTableSubtotal {
    pub shares: u64,
    pub total_investment: Decimal,
    pub entry_count: usize,
}

impl CapTableSubtotal {
    pub fn from_entries(entries: &[EntryOwnership]) -> Self {
        entries.iter().fold(CapTableSubtotal::default(), |mut acc, entry| {
            acc.shares = acc.shares.saturating_add(entry.shares);
            acc.total_investment = saturating_add(
                acc.total_investment,
                entry.total_investment.unwrap_or(Decimal::ZERO),
            );
            acc.entry_count += 1;
            acc
        })
    }
}

/// A round's cap table as displayed: totals over the whole table, one page of entries.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CapTableView {
    pub round_id: String,
    pub startup_id: Option<String>,
    pub startup_name: String,
    pub funding_name: String,
    pub currency: String,
    pub total_shares: u64,
    pub total_investment: Decimal,
    pub entries: Page<EntryOwnership>,
    pub page_subtotal: CapTableSubtotal,
}

impl CapTableView {
    pub fn total_shares_display(&self) -> String {
        format_shares(self.total_shares)
    }

    pub fn total_investment_display(&self) -> String {
        format_money(&self.currency, Some(self.total_investment))
    }
}

/// Rounds of one startup, in input order.
pub fn rounds_for_startup(rounds: &[FundingRound], startup_id: &str) -> Vec<FundingRound> {
    rounds
        .iter()
        .filter(|round| round.startup_id() == Some(startup_id))
        .cloned()
        .collect()
}

/// Builds the view of `round` for the requested page.
///
/// Percentages and totals come from the full cap table; only `entries` and
/// `page_subtotal` depend on the page.
pub fn build_cap_table_view(round: &FundingRound, request: &PageRequest) -> CapTableView {
    let ownership = compute_round_ownership(round);
    let entries = paginate(&ownership.entries, request);
    let page_subtotal = CapTableSubtotal::from_entries(&entries.items);

    CapTableView {
        round_id: ownership.round_id,
        startup_id: round.startup_id().map(str::to_string),
        startup_name: round.startup_name(),
        funding_name: round.funding_name_or_na(),
        currency: ownership.currency,
        total_shares: ownership.total_shares,
        total_investment: ownership.total_investment,
        entries,
        page_subtotal,
    }
}
