use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ROUND_CURRENCY, NOT_AVAILABLE};
use crate::errors::Result;
use crate::fx::normalize_currency_code;
use crate::records::input_format::{
    deserialize_id, deserialize_null_default, deserialize_option_decimal, deserialize_option_id,
    deserialize_option_shares,
};
use crate::records::Record;
use crate::utils::time_utils::display_date;

/// Startup a funding round belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StartupRef {
    #[serde(default, deserialize_with = "deserialize_option_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

/// Investor (or other shareholder) holding a cap-table entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HolderRef {
    #[serde(default, deserialize_with = "deserialize_option_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub contact_information: Option<String>,
}

impl HolderRef {
    /// `First Last` from the non-empty name parts, or `N/A`.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// One line of a cap table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CapTableEntry {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub investor: Option<HolderRef>,
    /// Holder name for entries without an investor profile.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_shares")]
    pub shares: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_option_decimal")]
    pub total_investment: Option<Decimal>,
}

impl CapTableEntry {
    pub fn shares_or_zero(&self) -> u64 {
        self.shares.unwrap_or(0)
    }

    pub fn total_investment_or_zero(&self) -> Decimal {
        self.total_investment.unwrap_or(Decimal::ZERO)
    }

    pub fn holder_id(&self) -> Option<&str> {
        self.investor.as_ref().and_then(|holder| holder.id.as_deref())
    }

    pub fn is_held_by(&self, investor_id: &str) -> bool {
        self.holder_id() == Some(investor_id)
    }

    pub fn holder_name(&self) -> String {
        match (self.name.as_deref().map(str::trim), &self.investor) {
            (Some(name), _) if !name.is_empty() => name.to_string(),
            (_, Some(holder)) => holder.display_name(),
            _ => NOT_AVAILABLE.to_string(),
        }
    }
}

/// A single funding event with its cap table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundingRound {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub startup: Option<StartupRef>,
    #[serde(default)]
    pub funding_name: Option<String>,
    #[serde(default)]
    pub funding_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_decimal")]
    pub money_raised: Option<Decimal>,
    #[serde(default)]
    pub money_raised_currency: Option<String>,
    #[serde(default)]
    pub announced_date: Option<String>,
    #[serde(default)]
    pub closed_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_decimal")]
    pub minimum_share: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_option_decimal")]
    pub pre_money_valuation: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub cap_table_investors: Vec<CapTableEntry>,
}

impl FundingRound {
    pub fn from_record(record: &Record) -> Result<Self> {
        record.decode()
    }

    pub fn from_records(records: &[Record]) -> Result<Vec<Self>> {
        records.iter().map(FundingRound::from_record).collect()
    }

    /// Recorded currency code, `USD` when the round has none.
    pub fn currency(&self) -> String {
        self.money_raised_currency
            .as_deref()
            .map(normalize_currency_code)
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| DEFAULT_ROUND_CURRENCY.to_string())
    }

    pub fn startup_id(&self) -> Option<&str> {
        self.startup.as_ref().and_then(|startup| startup.id.as_deref())
    }

    pub fn startup_name(&self) -> String {
        non_empty_or_na(
            self.startup
                .as_ref()
                .and_then(|startup| startup.company_name.as_deref()),
        )
    }

    pub fn funding_name_or_na(&self) -> String {
        non_empty_or_na(self.funding_name.as_deref())
    }

    pub fn funding_type_or_na(&self) -> String {
        non_empty_or_na(self.funding_type.as_deref())
    }

    pub fn announced_date_display(&self) -> String {
        display_date(self.announced_date.as_deref())
    }

    pub fn closed_date_display(&self) -> String {
        display_date(self.closed_date.as_deref())
    }

    pub fn minimum_share_or_zero(&self) -> Decimal {
        self.minimum_share.unwrap_or(Decimal::ZERO)
    }

    /// Entries of the cap table held by `investor_id`, in cap-table order.
    pub fn entries_held_by<'a>(
        &'a self,
        investor_id: &'a str,
    ) -> impl Iterator<Item = &'a CapTableEntry> + 'a {
        self.cap_table_investors
            .iter()
            .filter(move |entry| entry.is_held_by(investor_id))
    }
}

fn non_empty_or_na(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
