//! HTTP implementation of the record and profile-picture sources.

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

use capview_core::errors::{Error, FetchError, Result};
use capview_core::records::{
    EntityKind, Record, RecordKind, RecordSourceTrait, Resource, ResourceSourceTrait,
};

use crate::config::ClientConfig;

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the startup/investor record API.
///
/// ```ignore
/// let client = ApiClient::new(ClientConfig::from_env()?)?;
/// let startups = client.fetch_all(RecordKind::Startups).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: Option<HeaderValue>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let auth_header = config
            .access_token
            .as_deref()
            .map(|token| {
                HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                    Error::InvalidConfigValue(format!("Invalid access token format: {}", e))
                })
            })
            .transpose()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(auth) = &self.auth_header {
            headers.insert(AUTHORIZATION, auth.clone());
        }
        headers
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, url: &str, headers: HeaderMap) -> Result<reqwest::Response> {
        debug!("[CapviewApi] GET {}", url);
        let response = self
            .client
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorResponse>(&body)
            .ok()
            .and_then(|err| err.message.or(err.error))
            .unwrap_or_else(|| body.chars().take(200).collect());
        Err(FetchError::Status {
            status: status.as_u16(),
            message,
        }
        .into())
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let response = self.send(&self.url(path), self.headers()).await?;
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Decode(format!("Failed to read response: {}", e)))?;
        serde_json::from_str(&body)
            .map_err(|e| FetchError::Decode(format!("Failed to parse response: {}", e)).into())
    }
}

pub(crate) fn collection_path(kind: RecordKind) -> String {
    format!("/{}/all", kind.as_path())
}

pub(crate) fn record_path(kind: RecordKind, id: &str) -> String {
    format!("/{}/{}", kind.as_path(), id)
}

pub(crate) fn profile_picture_path(kind: EntityKind, entity_id: &str) -> String {
    format!("/profile-picture/{}/{}", kind.as_path(), entity_id)
}

pub(crate) const CURRENT_USER_PATH: &str = "/users/profile";

#[async_trait]
impl RecordSourceTrait for ApiClient {
    async fn fetch_all(&self, kind: RecordKind) -> Result<Vec<Record>> {
        let body = self.get_json(&collection_path(kind)).await?;
        let records = Record::many_from_value(body)?;
        debug!("[CapviewApi] {} {} records", records.len(), kind.as_path());
        Ok(records)
    }

    async fn fetch_one(&self, kind: RecordKind, id: &str) -> Result<Record> {
        let body = self.get_json(&record_path(kind, id)).await?;
        Record::from_value(body)
    }

    async fn fetch_current_user(&self) -> Result<Record> {
        if self.auth_header.is_none() {
            return Err(FetchError::Request("no access token configured".to_string()).into());
        }
        let body = self.get_json(CURRENT_USER_PATH).await?;
        Record::from_value(body)
    }
}

#[async_trait]
impl ResourceSourceTrait for ApiClient {
    async fn fetch_resource(&self, kind: EntityKind, entity_id: &str) -> Result<Resource> {
        let mut headers = self.headers();
        headers.insert(ACCEPT, HeaderValue::from_static("image/*"));
        headers.remove(CONTENT_TYPE);

        let response = self
            .send(&self.url(&profile_picture_path(kind, entity_id)), headers)
            .await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Decode(format!("Failed to read image: {}", e)))?;

        Ok(Resource {
            entity_id: entity_id.to_string(),
            content_type,
            bytes: bytes.to_vec(),
        })
    }
}
