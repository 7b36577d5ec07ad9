use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use super::profiles_model::StartupProfile;
use crate::errors::Result;
use crate::records::{EntityKind, Record, RecordKind, RecordService, Resource};
use crate::table::{Page, Sort, TableQuery};

/// Sort key of the company directory when the query names none.
pub const DIRECTORY_DEFAULT_SORT: &str = "companyName";

/// A startup as listed in the company directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRow {
    pub id: String,
    pub company_name: String,
    pub location: String,
    pub founded_date: String,
    pub description: String,
}

impl From<&StartupProfile> for CompanyRow {
    fn from(profile: &StartupProfile) -> Self {
        CompanyRow {
            id: profile.id.clone(),
            company_name: profile.company_name_or_na(),
            location: profile.location(),
            founded_date: profile.founded_date_display(),
            description: profile.description_excerpt(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDirectory {
    pub rows: Page<CompanyRow>,
    /// Avatars keyed by startup id; unresolved startups are absent.
    #[serde(skip)]
    pub avatars: HashMap<String, Resource>,
}

#[async_trait]
pub trait DirectoryServiceTrait: Send + Sync {
    /// Lists startups filtered, sorted and paginated by `query`.
    ///
    /// Without a sort in the query the directory is ordered by company name,
    /// ascending.
    async fn get_company_directory(&self, query: &TableQuery) -> Result<CompanyDirectory>;

    /// Profile of one startup; `None` when it can't be loaded.
    async fn get_startup_profile(&self, startup_id: &str) -> Result<Option<StartupProfile>>;
}

pub struct DirectoryService {
    records: Arc<RecordService>,
}

impl DirectoryService {
    pub fn new(records: Arc<RecordService>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl DirectoryServiceTrait for DirectoryService {
    async fn get_company_directory(&self, query: &TableQuery) -> Result<CompanyDirectory> {
        let startups = self.records.load_all(RecordKind::Startups).await;
        debug!("Loaded {} startups for the company directory", startups.len());

        let avatars = self
            .records
            .resolve_resources(EntityKind::Startup, startups.iter().filter_map(Record::id))
            .await;

        let query = match query.sort() {
            Some(_) => query.clone(),
            None => query.clone().with_sort(Sort::asc(DIRECTORY_DEFAULT_SORT)),
        };
        let result = query.apply(&startups);

        let rows = result.page.try_map(|record| {
            StartupProfile::from_record(&record).map(|profile| CompanyRow::from(&profile))
        })?;

        Ok(CompanyDirectory { rows, avatars })
    }

    async fn get_startup_profile(&self, startup_id: &str) -> Result<Option<StartupProfile>> {
        self.records
            .load_one(RecordKind::Startups, startup_id)
            .await
            .map(|record| StartupProfile::from_record(&record))
            .transpose()
    }
}
