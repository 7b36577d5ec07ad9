//! Fixed-size pages over an ordered sequence.
//!
//! Pages are addressed 1-based everywhere outside this module. The only
//! conversion to a 0-based slice offset lives in `PageRequest::offset`.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A 1-based page number and a non-zero page size.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    page: usize,
    page_size: NonZeroUsize,
}

impl PageRequest {
    /// Builds a request for a 1-based page. Page `0` is read as page `1`.
    pub fn new(page: usize, page_size: usize) -> Result<Self> {
        let page_size = NonZeroUsize::new(page_size).ok_or(ValidationError::ZeroPageSize)?;
        Ok(Self::with_size(page, page_size))
    }

    pub fn with_size(page: usize, page_size: NonZeroUsize) -> Self {
        PageRequest {
            page: page.max(1),
            page_size,
        }
    }

    /// Builds a request from a 0-based page index.
    pub fn from_index(index: usize, page_size: usize) -> Result<Self> {
        PageRequest::new(index.saturating_add(1), page_size)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// 0-based index of the page.
    pub fn index(&self) -> usize {
        self.page.saturating_sub(1)
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Slice offset of the first element on this page.
    fn offset(&self) -> usize {
        self.index().saturating_mul(self.page_size())
    }
}

/// One page of an ordered sequence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Clamped 1-based page, or `None` when there are no pages.
    pub page: Option<usize>,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Empty rows needed to render this page at full height.
    /// Zero when there is no page to render.
    pub fn padding(&self) -> usize {
        match self.page {
            Some(_) => self.page_size.saturating_sub(self.items.len()),
            None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    pub fn has_next(&self) -> bool {
        matches!(self.page, Some(page) if page < self.total_pages)
    }

    pub fn has_previous(&self) -> bool {
        matches!(self.page, Some(page) if page > 1)
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }

    /// Like [`Page::map`], stopping at the first error.
    pub fn try_map<U, E, F>(self, f: F) -> std::result::Result<Page<U>, E>
    where
        F: FnMut(T) -> std::result::Result<U, E>,
    {
        Ok(Page {
            items: self.items.into_iter().map(f).collect::<std::result::Result<_, _>>()?,
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        })
    }
}

/// `ceil(total_items / page_size)`; zero items means zero pages.
pub fn total_pages(total_items: usize, page_size: NonZeroUsize) -> usize {
    total_items.div_ceil(page_size.get())
}

/// Slices out the requested page.
///
/// A page past the end is clamped to the last page; with no items the result
/// carries no page at all.
pub fn paginate<T: Clone>(items: &[T], request: &PageRequest) -> Page<T> {
    let total_items = items.len();
    let total_pages = total_pages(total_items, request.page_size);

    if total_pages == 0 {
        return Page {
            items: Vec::new(),
            page: None,
            page_size: request.page_size(),
            total_items,
            total_pages,
        };
    }

    let clamped = PageRequest::with_size(request.page().min(total_pages), request.page_size);
    let start = clamped.offset();
    let end = start.saturating_add(clamped.page_size()).min(total_items);

    Page {
        items: items[start..end].to_vec(),
        page: Some(clamped.page()),
        page_size: clamped.page_size(),
        total_items,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_short_page() {
        let items: Vec<u32> = (1..=45).collect();
        let page = paginate(&items, &PageRequest::new(3, 20).unwrap());

        assert_eq!(page.items, (41..=45).collect::<Vec<_>>());
        assert_eq!(page.page, Some(3));
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 45);
        assert_eq!(page.padding(), 15);
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn test_first_page() {
        let items: Vec<u32> = (1..=45).collect();
        let page = paginate(&items, &PageRequest::new(1, 20).unwrap());
        assert_eq!(page.items, (1..=20).collect::<Vec<_>>());
        assert_eq!(page.padding(), 0);
        assert!(page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_out_of_range_page_clamps_to_last() {
        let items: Vec<u32> = (1..=12).collect();
        let page = paginate(&items, &PageRequest::new(9, 5).unwrap());
        assert_eq!(page.page, Some(3));
        assert_eq!(page.items, vec![11, 12]);
    }

    #[test]
    fn test_empty_input_has_no_pages() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, &PageRequest::new(2, 5).unwrap());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, None);
        assert!(page.items.is_empty());
        assert_eq!(page.padding(), 0);
        assert!(page.is_empty());
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        assert!(matches!(
            PageRequest::new(1, 0),
            Err(crate::Error::Validation(ValidationError::ZeroPageSize))
        ));
    }

    #[test]
    fn test_zero_based_and_one_based_addressing_agree() {
        let from_index = PageRequest::from_index(2, 5).unwrap();
        let from_page = PageRequest::new(3, 5).unwrap();
        assert_eq!(from_index, from_page);
        assert_eq!(from_page.index(), 2);
        assert_eq!(PageRequest::new(0, 5).unwrap().page(), 1);
    }

    #[test]
    fn test_total_pages_formula() {
        let size = NonZeroUsize::new(20).unwrap();
        assert_eq!(total_pages(0, size), 0);
        assert_eq!(total_pages(1, size), 1);
        assert_eq!(total_pages(20, size), 1);
        assert_eq!(total_pages(21, size), 2);
    }
}
