//! Ownership percentages and round totals computed from a full cap table.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::cap_table_model::{CapTableEntry, FundingRound};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::utils::decimal_math::saturating_sum;
use crate::utils::number_format::{format_money, format_percentage};

/// Ownership of one cap-table entry within its round.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntryOwnership {
    pub entry_id: String,
    pub holder_id: Option<String>,
    pub holder_name: String,
    pub title: Option<String>,
    pub shares: u64,
    pub total_investment: Option<Decimal>,
    /// Percentage of the round's total shares, rounded to two places.
    pub percentage: Decimal,
}

impl EntryOwnership {
    pub fn percentage_display(&self) -> String {
        format_percentage(self.percentage)
    }

    /// Total investment in the round's currency, or `N/A` when absent.
    pub fn total_investment_display(&self, currency: &str) -> String {
        format_money(currency, self.total_investment)
    }
}

/// Totals of a round computed over its whole cap table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundOwnership {
    pub round_id: String,
    /// The round's recorded currency, used verbatim.
    pub currency: String,
    pub total_shares: u64,
    pub total_investment: Decimal,
    pub entries: Vec<EntryOwnership>,
}

impl RoundOwnership {
    pub fn entry(&self, entry_id: &str) -> Option<&EntryOwnership> {
        self.entries.iter().find(|entry| entry.entry_id == entry_id)
    }

    /// Percentage of an entry; `0.00` for unknown entries.
    pub fn percentage_for(&self, entry_id: &str) -> Decimal {
        self.entry(entry_id)
            .map(|entry| entry.percentage)
            .unwrap_or_else(zero_percentage)
    }

    pub fn total_investment_display(&self) -> String {
        format_money(&self.currency, Some(self.total_investment))
    }
}

fn zero_percentage() -> Decimal {
    Decimal::new(0, DISPLAY_DECIMAL_PRECISION)
}

/// Sum of shares over all entries, absent shares counting as zero.
pub fn total_shares(entries: &[CapTableEntry]) -> u64 {
    entries
        .iter()
        .fold(0u64, |sum, entry| sum.saturating_add(entry.shares_or_zero()))
}

/// `shares / total_shares * 100` rounded half away from zero to two places;
/// `0.00` when the total is zero.
pub fn ownership_percentage(shares: u64, total_shares: u64) -> Decimal {
    if total_shares == 0 {
        return zero_percentage();
    }
    (Decimal::from(shares) * dec!(100) / Decimal::from(total_shares))
        .round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes per-entry ownership over `entries`, which must be the full cap table.
pub fn compute_entries_ownership(entries: &[CapTableEntry]) -> (u64, Vec<EntryOwnership>) {
    let total = total_shares(entries);
    let ownership = entries
        .iter()
        .map(|entry| EntryOwnership {
            entry_id: entry.id.clone(),
            holder_id: entry.holder_id().map(str::to_string),
            holder_name: entry.holder_name(),
            title: entry.title.clone(),
            shares: entry.shares_or_zero(),
            total_investment: entry.total_investment,
            percentage: ownership_percentage(entry.shares_or_zero(), total),
        })
        .collect();
    (total, ownership)
}

/// Computes the ownership table of a round.
pub fn compute_round_ownership(round: &FundingRound) -> RoundOwnership {
    let (total_shares, entries) = compute_entries_ownership(&round.cap_table_investors);
    let total_investment = saturating_sum(
        round
            .cap_table_investors
            .iter()
            .map(CapTableEntry::total_investment_or_zero),
    );

    RoundOwnership {
        round_id: round.id.clone(),
        currency: round.currency(),
        total_shares,
        total_investment,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, shares: Option<u64>) -> CapTableEntry {
        CapTableEntry {
            id: id.to_string(),
            investor: None,
            name: Some(format!("Holder {}", id)),
            title: None,
            shares,
            total_investment: None,
        }
    }

    fn round(entries: Vec<CapTableEntry>) -> FundingRound {
        FundingRound {
            id: "r1".to_string(),
            startup: None,
            funding_name: None,
            funding_type: None,
            money_raised: None,
            money_raised_currency: Some("KRW".to_string()),
            announced_date: None,
            closed_date: None,
            minimum_share: None,
            pre_money_valuation: None,
            cap_table_investors: entries,
        }
    }

    #[test]
    fn test_seventy_thirty_split() {
        let ownership =
            compute_round_ownership(&round(vec![entry("a", Some(700)), entry("b", Some(300))]));
        assert_eq!(ownership.total_shares, 1000);
        assert_eq!(ownership.percentage_for("a"), dec!(70.00));
        assert_eq!(ownership.percentage_for("b"), dec!(30.00));
        assert_eq!(ownership.entries[0].percentage_display(), "70.00");
        assert_eq!(ownership.entries[1].percentage_display(), "30.00");
    }

    #[test]
    fn test_missing_shares_count_as_zero() {
        let ownership =
            compute_round_ownership(&round(vec![entry("a", Some(50)), entry("b", None)]));
        assert_eq!(ownership.total_shares, 50);
        assert_eq!(ownership.percentage_for("a"), dec!(100));
        assert_eq!(ownership.percentage_for("b"), Decimal::ZERO);
    }

    #[test]
    fn test_zero_total_gives_zero_percentages() {
        let ownership =
            compute_round_ownership(&round(vec![entry("a", None), entry("b", Some(0))]));
        assert_eq!(ownership.total_shares, 0);
        for entry in &ownership.entries {
            assert_eq!(entry.percentage_display(), "0.00");
        }
    }

    #[test]
    fn test_empty_cap_table() {
        let ownership = compute_round_ownership(&round(Vec::new()));
        assert_eq!(ownership.total_shares, 0);
        assert!(ownership.entries.is_empty());
        assert_eq!(format_percentage(ownership.percentage_for("nobody")), "0.00");
        assert_eq!(ownership.total_investment, Decimal::ZERO);
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        assert_eq!(ownership_percentage(1, 8), dec!(12.50));
        assert_eq!(ownership_percentage(1, 3), dec!(33.33));
        assert_eq!(ownership_percentage(2, 3), dec!(66.67));
        assert_eq!(ownership_percentage(5, 1000), dec!(0.50));
        assert_eq!(ownership_percentage(1, 1600), dec!(0.06));
        assert_eq!(ownership_percentage(1, 40000), dec!(0.00));
        // 0.125 is a midpoint
        assert_eq!(ownership_percentage(1, 800), dec!(0.13));
    }

    #[test]
    fn test_total_is_order_independent() {
        let forward = vec![entry("a", Some(5)), entry("b", None), entry("c", Some(11))];
        let mut backward = forward.clone();
        backward.reverse();
        assert_eq!(total_shares(&forward), total_shares(&backward));
        assert_eq!(total_shares(&forward), 16);
    }

    #[test]
    fn test_currency_is_verbatim_and_investment_totals() {
        let mut entries = vec![entry("a", Some(1)), entry("b", Some(1))];
        entries[0].total_investment = Some(dec!(1000));
        let ownership = compute_round_ownership(&round(entries));
        assert_eq!(ownership.currency, "KRW");
        assert_eq!(ownership.total_investment, dec!(1000));
        assert_eq!(ownership.total_investment_display(), "KRW 1,000");
        assert_eq!(ownership.entries[0].total_investment_display("KRW"), "KRW 1,000");
        assert_eq!(ownership.entries[1].total_investment_display("KRW"), "N/A");
    }

    #[test]
    fn test_total_investment_clamps_instead_of_overflowing() {
        let big = Decimal::from_scientific("5e28").unwrap();
        let mut entries = vec![entry("a", Some(1)), entry("b", Some(1))];
        entries[0].total_investment = Some(big);
        entries[1].total_investment = Some(big);
        let ownership = compute_round_ownership(&round(entries));
        assert_eq!(ownership.total_investment, Decimal::MAX);
        assert_eq!(ownership.percentage_for("a"), dec!(50.00));
    }
}
