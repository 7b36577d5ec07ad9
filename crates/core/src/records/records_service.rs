use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use futures::future::join_all;
use log::{debug, error, warn};

use super::records_model::{EntityKind, Record, RecordKind, Resource};
use super::records_traits::{RecordSourceTrait, ResourceSourceTrait};
use crate::constants::RESOURCE_FETCH_BATCH_SIZE;
use crate::settings::EngineSettings;

/// Loads records and per-entity resources from the collaborators, turning
/// fetch failures into "no data" so a single failure never takes down a view.
pub struct RecordService {
    record_source: Arc<dyn RecordSourceTrait>,
    resource_source: Arc<dyn ResourceSourceTrait>,
    batch_size: usize,
}

impl RecordService {
    pub fn new(
        record_source: Arc<dyn RecordSourceTrait>,
        resource_source: Arc<dyn ResourceSourceTrait>,
    ) -> Self {
        Self {
            record_source,
            resource_source,
            batch_size: RESOURCE_FETCH_BATCH_SIZE,
        }
    }

    /// Uses the configured resource fan-out batch size.
    pub fn from_settings(
        record_source: Arc<dyn RecordSourceTrait>,
        resource_source: Arc<dyn ResourceSourceTrait>,
        settings: &EngineSettings,
    ) -> Self {
        Self::new(record_source, resource_source).with_batch_size(settings.resource_batch_size)
    }

    /// Overrides how many resource fetches run concurrently. Zero is treated as one.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Loads a whole collection; a failed fetch yields an empty list.
    pub async fn load_all(&self, kind: RecordKind) -> Vec<Record> {
        match self.record_source.fetch_all(kind).await {
            Ok(records) => {
                debug!("Loaded {} {} records", records.len(), kind.as_path());
                records
            }
            Err(e) => {
                error!("Error fetching {} records: {}", kind.as_path(), e);
                Vec::new()
            }
        }
    }

    /// Loads one record; a failed fetch yields `None`.
    pub async fn load_one(&self, kind: RecordKind, id: &str) -> Option<Record> {
        match self.record_source.fetch_one(kind, id).await {
            Ok(record) => Some(record),
            Err(e) => {
                error!("Error fetching {} record {}: {}", kind.as_path(), id, e);
                None
            }
        }
    }

    /// Loads the authenticated user's profile; a failed fetch yields `None`.
    pub async fn load_current_user(&self) -> Option<Record> {
        match self.record_source.fetch_current_user().await {
            Ok(record) => Some(record),
            Err(e) => {
                error!("Failed to fetch user data: {}", e);
                None
            }
        }
    }

    /// Resolves the resource of every entity independently.
    ///
    /// Ids are deduplicated and blank ids skipped. Entities whose fetch fails are
    /// logged and left out of the returned map.
    pub async fn resolve_resources<I, S>(
        &self,
        kind: EntityKind,
        entity_ids: I,
    ) -> HashMap<String, Resource>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let ids: Vec<String> = entity_ids
            .into_iter()
            .map(|id| id.as_ref().trim().to_string())
            .filter(|id| !id.is_empty() && seen.insert(id.clone()))
            .collect();

        let mut resolved = HashMap::with_capacity(ids.len());
        let mut failures = 0usize;

        for chunk in ids.chunks(self.batch_size) {
            let futures: Vec<_> = chunk
                .iter()
                .map(|id| async move {
                    let result = self.resource_source.fetch_resource(kind, id).await;
                    (id, result)
                })
                .collect();

            for (id, result) in join_all(futures).await {
                match result {
                    Ok(resource) => {
                        resolved.insert(id.clone(), resource);
                    }
                    Err(e) => {
                        failures += 1;
                        warn!(
                            "Failed to fetch profile picture for {} ID {}: {}",
                            kind.as_path(),
                            id,
                            e
                        );
                    }
                }
            }
        }

        debug!(
            "Resolved {} of {} {} resources ({} failed)",
            resolved.len(),
            ids.len(),
            kind.as_path(),
            failures
        );
        resolved
    }
}
