//! CollectionState - Search, Sort and Page a Record Collection
//!
//! Owner-side state of a list page. The page keeps the full collection here,
//! derives the visible slice, and feeds the slice to the `DataTable` and the
//! metadata to `Pagination`.

use std::cmp::Ordering;

use crate::components::composite::data_table::{
    DataProvider, PaginationProps, SortDirection, SortState, VecDataProvider, total_pages,
};
use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// A record that can be searched and sorted by field name
pub trait CollectionRecord: Clone {
    /// Text fields matched against the search term
    fn search_fields(&self) -> Vec<&str>;

    /// Ascending ordering on a named field; `None` for unknown fields
    fn compare_field(&self, other: &Self, field: &str) -> Option<Ordering>;

    /// Case-insensitive substring match on any search field
    fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

/// Owner-side collection state
#[derive(Debug, Clone)]
pub struct CollectionState<R> {
    records: Vec<R>,
    search: String,
    sort: SortState,
    current_page: usize,
    per_page: usize,
    loading: bool,
}

impl<R> Default for CollectionState<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            search: String::new(),
            sort: SortState::default(),
            current_page: 1,
            per_page: DEFAULT_PAGE_SIZE,
            loading: false,
        }
    }
}

impl<R: CollectionRecord> CollectionState<R> {
    pub fn new(per_page: usize) -> Self {
        let mut state = Self::default();
        state.set_per_page(per_page);
        state
    }

    // ==================== Getters ====================

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Records matching the search, in sort order
    pub fn filtered(&self) -> Vec<&R> {
        let mut rows: Vec<&R> = self
            .records
            .iter()
            .filter(|r| r.matches(&self.search))
            .collect();

        if !self.sort.is_empty() {
            rows.sort_by(|a, b| {
                self.sort
                    .entries()
                    .iter()
                    .map(|entry| {
                        let ord = a
                            .compare_field(b, &entry.column_id)
                            .unwrap_or(Ordering::Equal);
                        match entry.direction {
                            SortDirection::Ascending => ord,
                            SortDirection::Descending => ord.reverse(),
                        }
                    })
                    .find(|ord| *ord != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            });
        }
        rows
    }

    pub fn total_items(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items(), self.per_page)
    }

    /// Rows of the current page
    pub fn page_rows(&self) -> Vec<R> {
        let filtered: Vec<R> = self.filtered().into_iter().cloned().collect();
        VecDataProvider::new(filtered)
            .page(self.current_page, self.per_page)
            .items
    }

    /// Metadata for the pagination control
    pub fn pagination_props(&self) -> PaginationProps {
        PaginationProps::new(
            self.current_page,
            self.total_pages(),
            self.total_items(),
            self.per_page,
        )
        .with_loading(self.loading)
    }

    // ==================== Setters ====================

    /// Replace the collection, keeping the page in range
    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.loading = false;
        self.clamp_page();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Change the search term and go back to the first page
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.current_page = 1;
    }

    /// Change the page size and go back to the first page
    pub fn set_per_page(&mut self, per_page: usize) {
        if per_page == 0 {
            return;
        }
        self.per_page = per_page.min(MAX_PAGE_SIZE);
        self.current_page = 1;
    }

    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
    }

    /// Go to a page, clamped to `[1, max(total_pages, 1)]`
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
        self.clamp_page();
    }

    fn clamp_page(&mut self) {
        let last = self.total_pages().max(1);
        self.current_page = self.current_page.clamp(1, last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_table::SortEntry;

    #[derive(Debug, Clone, PartialEq)]
    struct Class {
        name: String,
        section: String,
        size: u32,
    }

    impl CollectionRecord for Class {
        fn search_fields(&self) -> Vec<&str> {
            vec![&self.name, &self.section]
        }

        fn compare_field(&self, other: &Self, field: &str) -> Option<Ordering> {
            match field {
                "name" => Some(self.name.cmp(&other.name)),
                "size" => Some(self.size.cmp(&other.size)),
                _ => None,
            }
        }
    }

    fn classes(n: u32) -> Vec<Class> {
        (1..=n)
            .map(|i| Class {
                name: format!("Class {i:02}"),
                section: if i % 2 == 0 { "B".into() } else { "A".into() },
                size: 30 - i,
            })
            .collect()
    }

    #[test]
    fn pages_are_sliced_and_counted() {
        let mut state = CollectionState::new(10);
        state.set_records(classes(25));
        assert_eq!(state.total_pages(), 3);

        state.set_page(3);
        let rows = state.page_rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].name, "Class 21");
        assert_eq!(
            state.pagination_props().summary().to_string(),
            "Showing 21 to 25 of 25 results"
        );
    }

    #[test]
    fn search_is_case_insensitive_and_resets_page() {
        let mut state = CollectionState::new(5);
        state.set_records(classes(20));
        state.set_page(3);

        state.set_search("  CLASS 1");
        assert_eq!(state.current_page(), 1);
        // Class 01 and Class 10..19
        assert_eq!(state.total_items(), 11);
    }

    #[test]
    fn page_is_clamped() {
        let mut state = CollectionState::new(10);
        state.set_records(classes(15));
        state.set_page(9);
        assert_eq!(state.current_page(), 2);
        state.set_page(0);
        assert_eq!(state.current_page(), 1);

        state.set_records(Vec::new());
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.pagination_props().total_pages, 0);
    }

    #[test]
    fn shrinking_collection_pulls_page_back() {
        let mut state = CollectionState::new(10);
        state.set_records(classes(30));
        state.set_page(3);
        state.set_records(classes(12));
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn sort_applies_across_all_pages() {
        let mut state = CollectionState::new(10);
        state.set_records(classes(25));
        state.set_sort(SortState::new(vec![SortEntry::asc("size")]));
        // Smallest size is the last class
        assert_eq!(state.page_rows()[0].name, "Class 25");

        state.set_sort(SortState::new(vec![SortEntry::desc("name")]));
        assert_eq!(state.page_rows()[0].name, "Class 25");

        state.set_sort(SortState::new(vec![SortEntry::asc("unknown")]));
        assert_eq!(state.page_rows()[0].name, "Class 01");
    }

    #[test]
    fn multi_key_sort_breaks_ties() {
        let mut state = CollectionState::new(100);
        let mut records = classes(4);
        for r in &mut records {
            r.size = 10;
        }
        state.set_records(records);
        state.set_sort(SortState::new(vec![
            SortEntry::asc("size"),
            SortEntry::desc("name"),
        ]));
        let names: Vec<_> = state.page_rows().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Class 04", "Class 03", "Class 02", "Class 01"]);
    }

    #[test]
    fn page_size_is_bounded_and_resets_page() {
        let mut state = CollectionState::<Class>::new(10);
        state.set_records(classes(40));
        state.set_page(2);
        state.set_per_page(500);
        assert_eq!(state.per_page(), 100);
        assert_eq!(state.current_page(), 1);

        state.set_per_page(0);
        assert_eq!(state.per_page(), 100);
    }
}
