use std::collections::BTreeMap;

use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::utils::decimal_math::saturating_mul;

/// Upper-cases and trims a currency code.
pub fn normalize_currency_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Fixed multipliers from currency codes into a single reporting currency.
///
/// The table is supplied by configuration. Codes missing from the table are
/// assumed to already be in the reporting currency (multiplier `1`); this is a
/// known approximation and is logged as a data-quality warning.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionTable {
    reporting_currency: String,
    #[serde(default)]
    rates: BTreeMap<String, Decimal>,
}

impl ConversionTable {
    pub fn new(reporting_currency: &str) -> Self {
        ConversionTable {
            reporting_currency: normalize_currency_code(reporting_currency),
            rates: BTreeMap::new(),
        }
    }

    /// Adds or replaces the multiplier for `code`.
    pub fn with_rate(mut self, code: &str, multiplier: Decimal) -> Self {
        self.rates.insert(normalize_currency_code(code), multiplier);
        self
    }

    /// Builds and validates a table from `(code, multiplier)` pairs.
    pub fn from_rates<I, S>(reporting_currency: &str, rates: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: AsRef<str>,
    {
        let table = rates
            .into_iter()
            .fold(ConversionTable::new(reporting_currency), |table, (code, rate)| {
                table.with_rate(code.as_ref(), rate)
            });
        table.validate()?;
        Ok(table)
    }

    /// Parses a table from JSON, e.g.
    /// `{"reportingCurrency": "PHP", "rates": {"USD": 50.0, "EUR": 60.0}}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let parsed: ConversionTable = serde_json::from_str(json)
            .map_err(|e| Error::InvalidConfigValue(format!("conversion table: {}", e)))?;
        let table = ConversionTable::from_rates(&parsed.reporting_currency, parsed.rates)?;
        Ok(table)
    }

    /// Rejects an empty reporting currency and non-positive multipliers.
    pub fn validate(&self) -> Result<()> {
        if self.reporting_currency.is_empty() {
            return Err(Error::InvalidConfigValue(
                "reporting currency must not be empty".to_string(),
            ));
        }
        if let Some((code, rate)) = self.rates.iter().find(|(_, rate)| **rate <= Decimal::ZERO) {
            return Err(Error::InvalidConfigValue(format!(
                "multiplier for {} must be positive, got {}",
                code, rate
            )));
        }
        Ok(())
    }

    pub fn reporting_currency(&self) -> &str {
        &self.reporting_currency
    }

    pub fn rates(&self) -> &BTreeMap<String, Decimal> {
        &self.rates
    }

    /// Multiplier into the reporting currency; unknown codes yield `1`.
    pub fn multiplier(&self, code: &str) -> Decimal {
        let code = normalize_currency_code(code);
        if code == self.reporting_currency {
            return Decimal::ONE;
        }
        match self.rates.get(&code) {
            Some(rate) => *rate,
            None => {
                warn!(
                    "No conversion rate for currency '{}' into {}; assuming 1",
                    code, self.reporting_currency
                );
                Decimal::ONE
            }
        }
    }

    /// Converts `amount` expressed in `code` into the reporting currency,
    /// clamping on overflow.
    pub fn normalize(&self, amount: Decimal, code: &str) -> Decimal {
        saturating_mul(amount, self.multiplier(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn table() -> ConversionTable {
        ConversionTable::new("PHP")
            .with_rate("USD", dec!(50.0))
            .with_rate("EUR", dec!(60.0))
            .with_rate("GBP", dec!(70.0))
            .with_rate("JPY", dec!(0.45))
            .with_rate("KRW", dec!(0.045))
    }

    #[test]
    fn test_known_currency_multiplier() {
        let table = table();
        assert_eq!(table.multiplier("USD"), dec!(50.0));
        assert_eq!(table.multiplier(" usd "), dec!(50.0));
        assert_eq!(table.normalize(dec!(50000), "USD"), dec!(2500000));
    }

    #[test]
    fn test_reporting_currency_is_identity() {
        let table = table();
        assert_eq!(table.multiplier("php"), Decimal::ONE);
    }

    #[test]
    fn test_unknown_currency_defaults_to_one() {
        let table = table();
        assert_eq!(table.multiplier("CHF"), Decimal::ONE);
        assert_eq!(table.normalize(dec!(123.45), "CHF"), dec!(123.45));
    }

    #[test]
    fn test_from_json() {
        let table = ConversionTable::from_json(
            r#"{"reportingCurrency": "php", "rates": {"usd": 50.0, "KRW": "0.045"}}"#,
        )
        .unwrap();
        assert_eq!(table.reporting_currency(), "PHP");
        assert_eq!(table.multiplier("USD"), dec!(50));
        assert_eq!(table.multiplier("KRW"), dec!(0.045));
    }

    #[test]
    fn test_rejects_non_positive_multipliers() {
        assert!(ConversionTable::from_rates("PHP", [("USD", dec!(0))]).is_err());
        assert!(ConversionTable::from_rates("PHP", [("USD", dec!(-1))]).is_err());
        assert!(ConversionTable::from_rates("", [("USD", dec!(1))]).is_err());
        assert!(ConversionTable::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_normalize_clamps_on_overflow() {
        let table = table();
        let near_max = Decimal::MAX / dec!(10);
        assert_eq!(table.normalize(near_max, "USD"), Decimal::MAX);
        assert_eq!(table.normalize(-near_max, "USD"), Decimal::MIN);
    }
}
