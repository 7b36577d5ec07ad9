use serde::{Deserialize, Serialize};

use crate::constants::{DESCRIPTION_EXCERPT_WORDS, LOCATION_NOT_AVAILABLE, NOT_AVAILABLE};
use crate::errors::Result;
use crate::records::input_format::deserialize_id;
use crate::records::Record;
use crate::utils::time_utils::display_date;

/// Address fields shared by startup and investor profiles.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street_address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl Address {
    /// Non-empty parts joined with `, `, or `Location not available`.
    pub fn location(&self) -> String {
        let parts: Vec<&str> = [
            self.street_address.as_deref(),
            self.city.as_deref(),
            self.country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

        if parts.is_empty() {
            LOCATION_NOT_AVAILABLE.to_string()
        } else {
            parts.join(", ")
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StartupProfile {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub founded_date: Option<String>,
    #[serde(default)]
    pub company_description: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(flatten)]
    pub address: Address,
}

impl StartupProfile {
    pub fn from_record(record: &Record) -> Result<Self> {
        record.decode()
    }

    pub fn company_name_or_na(&self) -> String {
        self.company_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(NOT_AVAILABLE)
            .to_string()
    }

    pub fn location(&self) -> String {
        self.address.location()
    }

    pub fn founded_date_display(&self) -> String {
        display_date(self.founded_date.as_deref())
    }

    pub fn description_excerpt(&self) -> String {
        description_excerpt(self.company_description.as_deref().unwrap_or_default())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestorProfile {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub contact_information: Option<String>,
    #[serde(flatten)]
    pub address: Address,
}

impl InvestorProfile {
    pub fn from_record(record: &Record) -> Result<Self> {
        record.decode()
    }

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

    pub fn location(&self) -> String {
        self.address.location()
    }
}

/// First words of a description followed by `...`.
pub fn description_excerpt(description: &str) -> String {
    let words: Vec<&str> = description
        .split_whitespace()
        .take(DESCRIPTION_EXCERPT_WORDS)
        .collect();
    format!("{}...", words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_location_joins_present_parts() {
        let record = Record::from_value(json!({
            "id": 1,
            "companyName": "Acme",
            "streetAddress": "12 Rizal St",
            "city": "",
            "country": "Philippines"
        }))
        .unwrap();
        let startup = StartupProfile::from_record(&record).unwrap();
        assert_eq!(startup.location(), "12 Rizal St, Philippines");

        let bare =
            StartupProfile::from_record(&Record::from_value(json!({"id": 2})).unwrap()).unwrap();
        assert_eq!(bare.location(), "Location not available");
        assert_eq!(bare.company_name_or_na(), "N/A");
        assert_eq!(bare.founded_date_display(), "N/A");
    }

    #[test]
    fn test_description_excerpt_keeps_fifteen_words() {
        let words = |n: usize| (1..=n).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ");
        assert_eq!(description_excerpt(&words(20)), format!("{}...", words(15)));

        assert_eq!(description_excerpt("Short pitch"), "Short pitch...");
        assert_eq!(description_excerpt(""), "...");
    }

    #[test]
    fn test_investor_display_name() {
        let record = Record::from_value(json!({
            "id": "7",
            "firstName": "Ada",
            "lastName": " ",
            "city": "Cebu"
        }))
        .unwrap();
        let investor = InvestorProfile::from_record(&record).unwrap();
        assert_eq!(investor.display_name(), "Ada");
        assert_eq!(investor.location(), "Cebu");
    }
}
