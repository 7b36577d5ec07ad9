use async_trait::async_trait;

use super::records_model::{EntityKind, Record, RecordKind, Resource};
use crate::errors::Result;

/// Contract of the remote record source.
#[async_trait]
pub trait RecordSourceTrait: Send + Sync {
    /// Fetches every record of a collection.
    async fn fetch_all(&self, kind: RecordKind) -> Result<Vec<Record>>;

    /// Fetches a single record by id.
    async fn fetch_one(&self, kind: RecordKind, id: &str) -> Result<Record>;

    /// Fetches the profile of the authenticated user.
    async fn fetch_current_user(&self) -> Result<Record>;
}

/// Contract of the remote binary-resource source (profile pictures).
#[async_trait]
pub trait ResourceSourceTrait: Send + Sync {
    async fn fetch_resource(&self, kind: EntityKind, entity_id: &str) -> Result<Resource>;
}
