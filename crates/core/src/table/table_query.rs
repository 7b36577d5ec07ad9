use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use super::comparator::{sort_records, Sort, SortDirection};
use super::pagination::{paginate, Page, PageRequest};
use super::search::filter_records;
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::errors::{Result, ValidationError};
use crate::records::Record;

/// View parameters of a table: sort, search text, 1-based page and page size.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TableQuery {
    #[serde(default)]
    sort: Option<Sort>,
    #[serde(default)]
    search: String,
    #[serde(default = "first_page")]
    page: usize,
    page_size: NonZeroUsize,
}

fn first_page() -> usize {
    1
}

impl Default for TableQuery {
    fn default() -> Self {
        TableQuery {
            sort: None,
            search: String::new(),
            page: 1,
            page_size: NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl TableQuery {
    pub fn new(page_size: usize) -> Result<Self> {
        let page_size = NonZeroUsize::new(page_size).ok_or(ValidationError::ZeroPageSize)?;
        Ok(TableQuery {
            page_size,
            ..TableQuery::default()
        })
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Replaces the search text and goes back to the first page.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
    }

    /// Sorts on `id`: the active key flips direction, a new key starts ascending.
    pub fn request_sort(&mut self, id: &str) {
        self.sort = Some(match self.sort.take() {
            Some(current) if current.id == id => Sort {
                id: current.id,
                direction: current.direction.toggled(),
            },
            _ => Sort {
                id: id.to_string(),
                direction: SortDirection::Asc,
            },
        });
    }

    /// Moves to a 1-based page; `0` is read as the first page.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        self.page_size = NonZeroUsize::new(page_size).ok_or(ValidationError::ZeroPageSize)?;
        self.page = 1;
        Ok(())
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::with_size(self.page, self.page_size)
    }

    /// Filters, sorts, then paginates `items`.
    ///
    /// The returned `rows` hold the whole ordered matching set; aggregates must be
    /// computed from it rather than from the page.
    pub fn apply<T>(&self, items: &[T]) -> TableResult<T>
    where
        T: AsRef<Record> + Clone,
    {
        let filtered = filter_records(items, &self.search);
        let rows = match &self.sort {
            Some(sort) => sort_records(&filtered, sort),
            None => filtered,
        };
        let page = paginate(&rows, &self.page_request());
        TableResult { rows, page }
    }

    /// Adopts the page the result was clamped to.
    pub fn reconcile<T>(&mut self, result: &TableResult<T>) {
        self.page = result.page.page.unwrap_or(1);
    }
}

/// Output of [`TableQuery::apply`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableResult<T> {
    pub rows: Vec<T>,
    pub page: Page<T>,
}
