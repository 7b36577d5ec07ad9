use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{DISPLAY_DECIMAL_PRECISION, NOT_AVAILABLE};

/// Formats a number with `,` thousands separators and at most
/// `max_fraction_digits` decimals, dropping trailing zeros. Midpoints round
/// away from zero.
pub fn format_grouped(value: Decimal, max_fraction_digits: u32) -> String {
    let rounded = value
        .round_dp_with_strategy(max_fraction_digits, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + text.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Share count with thousands separators.
pub fn format_shares(shares: u64) -> String {
    format_grouped(Decimal::from(shares), 0)
}

/// Percentage with exactly two decimals, e.g. `70.00`.
pub fn format_percentage(percentage: Decimal) -> String {
    let rounded = percentage
        .round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", DISPLAY_DECIMAL_PRECISION as usize, rounded)
}

/// `<CODE> <amount>` for a present amount, `N/A` otherwise.
pub fn format_money(currency: &str, amount: Option<Decimal>) -> String {
    match amount {
        Some(amount) => format!(
            "{} {}",
            currency,
            format_grouped(amount, DISPLAY_DECIMAL_PRECISION)
        ),
        None => NOT_AVAILABLE.to_string(),
    }
}
