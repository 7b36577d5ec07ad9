//! In-memory collaborators shared by the service tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::records_model::{EntityKind, Record, RecordKind, Resource};
use super::records_traits::{RecordSourceTrait, ResourceSourceTrait};
use crate::errors::{Error, FetchError, Result};

#[derive(Clone, Default)]
pub struct MockRecordSource {
    collections: Arc<Mutex<HashMap<RecordKind, Vec<Record>>>>,
    failing: Arc<Mutex<HashSet<RecordKind>>>,
    current_user: Arc<Mutex<Option<Record>>>,
}

impl MockRecordSource {
    pub fn set_records(&self, kind: RecordKind, records: Vec<Record>) {
        self.collections.lock().unwrap().insert(kind, records);
    }

    pub fn set_fail(&self, kind: RecordKind) {
        self.failing.lock().unwrap().insert(kind);
    }

    pub fn set_current_user(&self, user: Record) {
        *self.current_user.lock().unwrap() = Some(user);
    }
}

#[async_trait]
impl RecordSourceTrait for MockRecordSource {
    async fn fetch_all(&self, kind: RecordKind) -> Result<Vec<Record>> {
        if self.failing.lock().unwrap().contains(&kind) {
            return Err(Error::Fetch(FetchError::Status {
                status: 500,
                message: "Internal Server Error".to_string(),
            }));
        }
        Ok(self
            .collections
            .lock()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_one(&self, kind: RecordKind, id: &str) -> Result<Record> {
        self.fetch_all(kind)
            .await?
            .into_iter()
            .find(|record| record.id().as_deref() == Some(id))
            .ok_or_else(|| Error::Fetch(FetchError::NotFound(id.to_string())))
    }

    async fn fetch_current_user(&self) -> Result<Record> {
        self.current_user
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Error::Fetch(FetchError::Request("unauthorized".to_string())))
    }
}

#[derive(Clone, Default)]
pub struct MockResourceSource {
    failing_ids: Arc<Mutex<HashSet<String>>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl MockResourceSource {
    pub fn set_fail(&self, entity_id: &str) {
        self.failing_ids.lock().unwrap().insert(entity_id.to_string());
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResourceSourceTrait for MockResourceSource {
    async fn fetch_resource(&self, _kind: EntityKind, entity_id: &str) -> Result<Resource> {
        self.requested.lock().unwrap().push(entity_id.to_string());
        if self.failing_ids.lock().unwrap().contains(entity_id) {
            return Err(Error::Fetch(FetchError::Status {
                status: 404,
                message: "Profile picture not found".to_string(),
            }));
        }
        Ok(Resource {
            entity_id: entity_id.to_string(),
            content_type: Some("image/png".to_string()),
            bytes: entity_id.as_bytes().to_vec(),
        })
    }
}

pub fn record(value: serde_json::Value) -> Record {
    Record::from_value(value).unwrap()
}
