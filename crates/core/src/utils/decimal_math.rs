//! Saturating money arithmetic.
//!
//! Amounts come straight from API payloads and can exceed what `Decimal` holds
//! once multiplied or summed. Results clamp to `Decimal::MAX`/`Decimal::MIN`
//! and the overflow is logged.

use log::warn;
use rust_decimal::Decimal;

fn saturated(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

/// `a * b`, clamped on overflow.
pub fn saturating_mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| {
        warn!("Decimal overflow computing {} * {}; clamping", a, b);
        saturated(a.is_sign_negative() != b.is_sign_negative())
    })
}

/// `a + b`, clamped on overflow.
pub fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or_else(|| {
        warn!("Decimal overflow computing {} + {}; clamping", a, b);
        saturated(b.is_sign_negative())
    })
}

/// Sum of `values`, clamped on overflow.
pub fn saturating_sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().fold(Decimal::ZERO, saturating_add)
}
