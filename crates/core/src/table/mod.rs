//! Record table engine: stable sorting, free-text search and pagination.

mod comparator;
mod pagination;
mod search;
mod table_query;
mod table_row;

pub use comparator::{
    compare_records, compare_values, sort_records, stable_sort_by, Sort, SortDirection,
};
pub use pagination::{paginate, total_pages, Page, PageRequest};
pub use search::{filter_records, fold_case, record_matches, searchable_text};
pub use table_query::{TableQuery, TableResult};
pub use table_row::TableRow;
