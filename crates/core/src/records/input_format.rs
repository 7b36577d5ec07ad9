//! Lenient decoders for API payload fields.
//!
//! The API is inconsistent about ids (string or number) and amounts (string,
//! number, empty string or null). These helpers normalize both.

use rust_decimal::Decimal;
use serde::{self, Deserialize, Deserializer};
use serde_json::Number;
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarInput {
    String(String),
    Number(Number),
    Null,
}

fn parse_decimal_value(value: &str) -> Result<Decimal, String> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| format!("Invalid decimal value '{}': {}", value, e))
}

pub fn deserialize_option_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<ScalarInput>::deserialize(deserializer)?;
    match raw {
        None | Some(ScalarInput::Null) => Ok(None),
        Some(ScalarInput::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            parse_decimal_value(trimmed)
                .map(Some)
                .map_err(serde::de::Error::custom)
        }
        Some(ScalarInput::Number(n)) => parse_decimal_value(&n.to_string())
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_option_id(deserializer)?
        .ok_or_else(|| serde::de::Error::custom("missing identifier"))
}

pub fn deserialize_option_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<ScalarInput>::deserialize(deserializer)?;
    match raw {
        None | Some(ScalarInput::Null) => Ok(None),
        Some(ScalarInput::String(s)) if s.trim().is_empty() => Ok(None),
        Some(ScalarInput::String(s)) => Ok(Some(s)),
        Some(ScalarInput::Number(n)) => Ok(Some(n.to_string())),
    }
}

/// Treats an explicit `null` like a missing field.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Share counts must be non-negative integers; `12.0` is accepted, `12.5` is not.
pub fn deserialize_option_shares<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<ScalarInput>::deserialize(deserializer)?;
    let value = match raw {
        None | Some(ScalarInput::Null) => return Ok(None),
        Some(ScalarInput::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(ScalarInput::String(s)) => {
            parse_decimal_value(&s).map_err(serde::de::Error::custom)?
        }
        Some(ScalarInput::Number(n)) => {
            if let Some(v) = n.as_u64() {
                return Ok(Some(v));
            }
            parse_decimal_value(&n.to_string()).map_err(serde::de::Error::custom)?
        }
    };

    if value.is_sign_negative() || !value.fract().is_zero() {
        return Err(serde::de::Error::custom(format!(
            "shares must be a non-negative integer, got {}",
            value
        )));
    }
    num_traits::ToPrimitive::to_u64(&value)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("shares out of range: {}", value)))
}
