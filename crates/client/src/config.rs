use std::time::Duration;

use capview_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

pub const API_URL_VAR: &str = "CAPVIEW_API_URL";
pub const ACCESS_TOKEN_VAR: &str = "CAPVIEW_ACCESS_TOKEN";
pub const HTTP_TIMEOUT_VAR: &str = "CAPVIEW_HTTP_TIMEOUT_SECS";

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to reach the record API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_access_token(mut self, token: &str) -> Self {
        self.access_token = Some(token.to_string());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Reads the configuration from the process environment, loading a `.env`
    /// file first when one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url =
            non_blank(API_URL_VAR).ok_or_else(|| Error::MissingConfigKey(API_URL_VAR.to_string()))?;
        let timeout_secs = match non_blank(HTTP_TIMEOUT_VAR) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                Error::InvalidConfigValue(format!("{}='{}': {}", HTTP_TIMEOUT_VAR, raw, e))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let mut config = ClientConfig::new(base_url.trim()).with_timeout_secs(timeout_secs);
        config.access_token = non_blank(ACCESS_TOKEN_VAR);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(Error::InvalidConfigValue(format!(
                "{} must be an http(s) URL, got '{}'",
                API_URL_VAR, self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(Error::InvalidConfigValue(format!(
                "{} must be greater than zero",
                HTTP_TIMEOUT_VAR
            )));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
