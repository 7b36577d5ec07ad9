//! Property-based tests for the ownership and portfolio aggregators.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use capview_core::cap_table::{
    compute_entries_ownership, ownership_percentage, total_shares, CapTableEntry, FundingRound,
    HolderRef, StartupRef,
};
use capview_core::fx::ConversionTable;
use capview_core::portfolio::{build_investment_rows, summarize_portfolio};

// =============================================================================
// Generators
// =============================================================================

fn arb_entries(max: usize) -> impl Strategy<Value = Vec<CapTableEntry>> {
    proptest::collection::vec(
        (proptest::option::of(0u64..1_000_000), 0usize..3),
        0..=max,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (shares, holder))| CapTableEntry {
                id: format!("e{}", i),
                investor: Some(HolderRef {
                    id: Some(format!("inv{}", holder)),
                    ..HolderRef::default()
                }),
                name: None,
                title: None,
                shares,
                total_investment: None,
            })
            .collect()
    })
}

fn arb_currency() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("USD"), Just("EUR"), Just("PHP"), Just("XYZ")]
}

fn arb_rounds(max: usize) -> impl Strategy<Value = Vec<FundingRound>> {
    proptest::collection::vec((arb_entries(6), arb_currency(), 0u32..10_000, 0usize..4), 0..=max)
        .prop_map(|rounds| {
            rounds
                .into_iter()
                .enumerate()
                .map(|(i, (entries, currency, price, startup))| FundingRound {
                    id: format!("r{}", i),
                    startup: Some(StartupRef {
                        id: Some(format!("s{}", startup)),
                        company_name: Some(format!("Startup {}", startup)),
                    }),
                    funding_name: None,
                    funding_type: None,
                    money_raised: None,
                    money_raised_currency: Some(currency.to_string()),
                    announced_date: None,
                    closed_date: None,
                    minimum_share: Some(Decimal::from(price)),
                    pre_money_valuation: None,
                    cap_table_investors: entries,
                })
                .collect()
        })
}

fn conversion_table() -> ConversionTable {
    ConversionTable::new("PHP")
        .with_rate("USD", dec!(50.0))
        .with_rate("EUR", dec!(60.0))
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Percentages add up to 100 within rounding, or are all zero.
    #[test]
    fn prop_percentages_sum_to_hundred(entries in arb_entries(40)) {
        let (total, ownership) = compute_entries_ownership(&entries);
        let sum: Decimal = ownership.iter().map(|e| e.percentage).sum();

        if total == 0 {
            prop_assert!(ownership.iter().all(|e| e.percentage.is_zero()));
        } else {
            let tolerance = dec!(0.005) * Decimal::from(ownership.len());
            prop_assert!((sum - dec!(100)).abs() <= tolerance, "sum was {}", sum);
        }
    }

    /// Every percentage lies in [0, 100] and has two decimal places.
    #[test]
    fn prop_percentage_bounds(shares in 0u64..1_000_000, extra in 0u64..1_000_000) {
        let percentage = ownership_percentage(shares, shares + extra);
        prop_assert!(percentage >= Decimal::ZERO && percentage <= dec!(100));
        prop_assert!(percentage.scale() <= 2);
    }

    /// The round total does not depend on entry order.
    #[test]
    fn prop_total_shares_ignores_order(entries in arb_entries(40)) {
        let mut reversed = entries.clone();
        reversed.reverse();
        prop_assert_eq!(total_shares(&entries), total_shares(&reversed));
        let expected: u64 = entries.iter().map(|e| e.shares.unwrap_or(0)).sum();
        prop_assert_eq!(total_shares(&entries), expected);
    }

    /// The portfolio total is the sum of the rows and the average divides it by the entries.
    #[test]
    fn prop_summary_is_consistent(rounds in arb_rounds(8), holder in 0usize..3) {
        let investor = format!("inv{}", holder);
        let rows = build_investment_rows(&rounds, &investor, &conversion_table());
        let summary = summarize_portfolio(&rows, "PHP");

        let events: usize = rows.iter().map(|r| r.holdings.len()).sum();
        prop_assert_eq!(summary.investment_events, events);
        prop_assert_eq!(summary.investment_count, rows.len());
        prop_assert!(rows.iter().all(|r| !r.holdings.is_empty()));

        let total: Decimal = rows.iter().map(|r| r.normalized_value()).sum();
        prop_assert_eq!(summary.total_investment_amount, total.round_dp(2));

        if events == 0 {
            prop_assert_eq!(summary.average_investment_size, Decimal::ZERO);
            prop_assert_eq!(summary.top_invested_company.as_str(), "None");
        } else {
            let recomputed = summary.average_investment_size * Decimal::from(events);
            prop_assert!((recomputed - total).abs() <= dec!(0.005) * Decimal::from(events));
        }
    }
}
