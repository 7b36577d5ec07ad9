//! Roll-up of an investor's holdings across funding rounds.
//!
//! Ownership percentages are always taken from the round's full cap table; the
//! investor's own entries are only selected for display and for the summary.

use rust_decimal::{Decimal, RoundingStrategy};

use super::portfolio_model::{InvestmentRow, InvestorHolding, PortfolioSummary};
use crate::cap_table::{compute_round_ownership, FundingRound};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, NO_TOP_COMPANY};
use crate::fx::ConversionTable;
use crate::utils::decimal_math::{saturating_mul, saturating_sum};

/// `shares * minimum_share`, converted from `currency` into the reporting currency.
///
/// Values beyond the range of `Decimal` clamp to `Decimal::MAX`.
pub fn investment_value(
    shares: u64,
    minimum_share: Decimal,
    currency: &str,
    conversion_table: &ConversionTable,
) -> Decimal {
    conversion_table.normalize(saturating_mul(Decimal::from(shares), minimum_share), currency)
}

/// Builds the dashboard row of `round` for `investor_id`, or `None` when the
/// investor holds no entry in it.
pub fn build_investment_row(
    round: &FundingRound,
    investor_id: &str,
    conversion_table: &ConversionTable,
) -> Option<InvestmentRow> {
    if round.entries_held_by(investor_id).next().is_none() {
        return None;
    }

    let ownership = compute_round_ownership(round);
    let currency = round.currency();
    let minimum_share = round.minimum_share_or_zero();

    let holdings = round
        .entries_held_by(investor_id)
        .map(|entry| InvestorHolding {
            entry_id: entry.id.clone(),
            title: entry.title.clone(),
            shares: entry.shares_or_zero(),
            total_investment: entry.total_investment,
            percentage: ownership.percentage_for(&entry.id),
            normalized_value: investment_value(
                entry.shares_or_zero(),
                minimum_share,
                &currency,
                conversion_table,
            ),
        })
        .collect();

    Some(InvestmentRow {
        round_id: round.id.clone(),
        startup_id: round.startup_id().map(str::to_string),
        company_name: round.startup_name(),
        funding_name: round.funding_name_or_na(),
        funding_type: round.funding_type_or_na(),
        currency,
        money_raised: round.money_raised,
        pre_money_valuation: round.pre_money_valuation,
        announced_date: round.announced_date_display(),
        closed_date: round.closed_date_display(),
        minimum_share,
        round_total_shares: ownership.total_shares,
        holdings,
    })
}

/// Dashboard rows for every round the investor holds entries in, in input order.
pub fn build_investment_rows(
    rounds: &[FundingRound],
    investor_id: &str,
    conversion_table: &ConversionTable,
) -> Vec<InvestmentRow> {
    rounds
        .iter()
        .filter_map(|round| build_investment_row(round, investor_id, conversion_table))
        .collect()
}

/// Company with the largest normalized investment, or `None` on an empty portfolio.
///
/// Rows are grouped by startup. On an exact tie the company seen first wins.
pub fn top_invested_company(rows: &[InvestmentRow]) -> String {
    let mut totals: Vec<(&str, &str, Decimal)> = Vec::new();
    for row in rows {
        let value = row.normalized_value();
        match totals.iter_mut().find(|(key, _, _)| *key == row.company_key()) {
            Some((_, _, total)) => *total = saturating_sum([*total, value]),
            None => totals.push((row.company_key(), &row.company_name, value)),
        }
    }

    let mut top: Option<(&str, Decimal)> = None;
    for (_, name, total) in totals {
        match top {
            Some((_, best)) if total <= best => {}
            _ => top = Some((name, total)),
        }
    }

    top.map(|(name, _)| name.to_string())
        .unwrap_or_else(|| NO_TOP_COMPANY.to_string())
}

/// Computes the summary metrics over `rows`.
pub fn summarize_portfolio(rows: &[InvestmentRow], reporting_currency: &str) -> PortfolioSummary {
    let investment_events: usize = rows.iter().map(|row| row.holdings.len()).sum();
    let total = saturating_sum(rows.iter().map(InvestmentRow::normalized_value));
    let average = if investment_events == 0 {
        Decimal::ZERO
    } else {
        total / Decimal::from(investment_events)
    };

    PortfolioSummary {
        top_invested_company: top_invested_company(rows),
        investment_count: rows.len(),
        investment_events,
        average_investment_size: round_display(average),
        total_investment_amount: round_display(total),
        reporting_currency: reporting_currency.to_string(),
    }
}

fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}
