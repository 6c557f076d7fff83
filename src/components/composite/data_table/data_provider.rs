//! DataProvider Trait
//!
//! Abstraction over where table rows come from: an in-memory collection that
//! is sliced locally, or a page envelope returned by the backend.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Trait for providing data to the DataTable
pub trait DataProvider {
    type Row: Clone;

    /// Get the total number of rows
    fn len(&self) -> usize;

    /// Check if empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a row by index
    fn row(&self, index: usize) -> Option<Self::Row>;

    /// Get multiple rows in a range
    fn rows(&self, range: Range<usize>) -> Vec<Self::Row> {
        range.filter_map(|i| self.row(i)).collect()
    }

    /// Slice out one page (1-based) as a paged envelope
    fn page(&self, page: usize, page_size: usize) -> PagedResponse<Self::Row> {
        let total = self.len();
        let page_size = page_size.max(1);
        let page = page.max(1);
        let start = (page - 1).saturating_mul(page_size).min(total);
        let end = start.saturating_add(page_size).min(total);
        PagedResponse {
            items: self.rows(start..end),
            total,
            page,
            page_size,
            total_pages: total_pages(total, page_size),
        }
    }
}

/// `ceil(total / page_size)`; zero items means zero pages
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Simple in-memory data provider
pub struct VecDataProvider<R> {
    rows: Vec<R>,
}

impl<R: Clone> VecDataProvider<R> {
    /// Create a new VecDataProvider
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }
}

impl<R: Clone> DataProvider for VecDataProvider<R> {
    type Row = R;

    fn len(&self) -> usize {
        self.rows.len()
    }

    fn row(&self, index: usize) -> Option<Self::Row> {
        self.rows.get(index).cloned()
    }
}

/// Page envelope returned by paginated backend endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl<T> Default for PagedResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            page_size: crate::constants::DEFAULT_PAGE_SIZE,
            total_pages: 0,
        }
    }
}

impl<T: for<'de> Deserialize<'de>> PagedResponse<T> {
    /// Decode an envelope from a JSON response body
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_slices_rows() {
        let provider = VecDataProvider::new((1..=25).collect::<Vec<u32>>());
        let page = provider.page(3, 10);
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let provider = VecDataProvider::new(vec!["a", "b"]);
        let page = provider.page(4, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn envelope_decodes_from_json() {
        let body = r#"{"items":[{"id":1},{"id":2}],"total":12,"page":2,"page_size":10,"total_pages":2}"#;

        #[derive(Debug, PartialEq, Deserialize)]
        struct Item {
            id: u32,
        }

        let page = PagedResponse::<Item>::from_json(body).expect("valid envelope");
        assert_eq!(page.items, vec![Item { id: 1 }, Item { id: 2 }]);
        assert_eq!(page.total, 12);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn malformed_envelope_is_an_error() {
        let result = PagedResponse::<u32>::from_json(r#"{"items":"nope"}"#);
        assert!(matches!(result, Err(crate::error::Error::Json { .. })));
    }
}
