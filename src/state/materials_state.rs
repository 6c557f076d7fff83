//! MaterialsState - Training Materials Browser
//!
//! Models a server-paged list: every page is fetched as a `PagedResponse`
//! for the active tab, newest upload first.

use tracing::debug;

use crate::components::composite::data_table::{
    DataProvider, PagedResponse, PaginationProps, VecDataProvider,
};
use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::domain::{FileStatus, MaterialsTab, TrainingFile};

#[derive(Debug, Clone)]
pub struct MaterialsState {
    files: Vec<TrainingFile>,
    tab: MaterialsTab,
    current_page: usize,
    per_page: usize,
    response: PagedResponse<TrainingFile>,
    selected: Option<u32>,
    loading: bool,
}

impl Default for MaterialsState {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            tab: MaterialsTab::default(),
            current_page: 1,
            per_page: DEFAULT_PAGE_SIZE,
            response: PagedResponse::default(),
            selected: None,
            loading: true,
        }
    }
}

impl MaterialsState {
    pub fn new(per_page: usize) -> Self {
        Self {
            per_page: per_page.clamp(1, MAX_PAGE_SIZE),
            ..Default::default()
        }
    }

    // ==================== Getters ====================

    pub fn tab(&self) -> MaterialsTab {
        self.tab
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The page currently shown
    pub fn page(&self) -> &PagedResponse<TrainingFile> {
        &self.response
    }

    pub fn selected(&self) -> Option<&TrainingFile> {
        let id = self.selected?;
        self.files.iter().find(|f| f.id == id)
    }

    pub fn pagination_props(&self) -> PaginationProps {
        PaginationProps::new(
            self.response.page,
            self.response.total_pages,
            self.response.total,
            self.response.page_size,
        )
        .with_loading(self.loading)
    }

    // ==================== Setters ====================

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Replace the backing files and refetch the current page
    pub fn set_files(&mut self, files: Vec<TrainingFile>) {
        self.files = files;
        self.loading = false;
        self.refetch();
        if self.current_page > self.response.total_pages.max(1) {
            self.current_page = self.response.total_pages.max(1);
            self.refetch();
        }
    }

    /// Switch tabs; starts from page 1
    pub fn set_tab(&mut self, tab: MaterialsTab) {
        if self.tab == tab {
            return;
        }
        self.tab = tab;
        self.current_page = 1;
        self.refetch();
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.response.total_pages.max(1));
        self.refetch();
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        if per_page == 0 {
            return;
        }
        self.per_page = per_page.min(MAX_PAGE_SIZE);
        self.current_page = 1;
        self.refetch();
    }

    pub fn select(&mut self, id: Option<u32>) {
        self.selected = id;
    }

    /// Change a file's status; returns false for unknown ids
    pub fn set_status(&mut self, id: u32, status: FileStatus) -> bool {
        let Some(file) = self.files.iter_mut().find(|f| f.id == id) else {
            return false;
        };
        file.file_status = status;
        self.refetch();
        if self.response.items.is_empty() && self.current_page > 1 {
            self.current_page -= 1;
            self.refetch();
        }
        true
    }

    /// Server-side query for the active tab and page
    fn refetch(&mut self) {
        let mut rows: Vec<TrainingFile> = self
            .files
            .iter()
            .filter(|f| self.tab.includes(f.file_status))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));

        self.response = VecDataProvider::new(rows).page(self.current_page, self.per_page);
        debug!(
            tab = ?self.tab,
            page = self.response.page,
            total = self.response.total,
            "Fetched materials page"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn file(id: u32, status: FileStatus) -> TrainingFile {
        TrainingFile {
            id,
            original_filename: format!("unit-{id}.pdf"),
            uploaded_at: Utc
                .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
                .single()
                .expect("valid timestamp")
                + chrono::Duration::days(i64::from(id)),
            file_size: 1024 * u64::from(id),
            mime_type: "application/pdf".to_string(),
            file_status: status,
            subject_name: "Science".to_string(),
            school_name: "Hillside".to_string(),
            grade_name: "Grade 6".to_string(),
        }
    }

    fn files() -> Vec<TrainingFile> {
        (1..=14)
            .map(|id| {
                let status = match id % 3 {
                    0 => FileStatus::Trained,
                    1 => FileStatus::Uploaded,
                    _ => FileStatus::Skipped,
                };
                file(id, status)
            })
            .collect()
    }

    #[test]
    fn loading_until_files_arrive() {
        let mut state = MaterialsState::new(5);
        assert!(state.pagination_props().loading);
        state.set_files(files());
        assert!(!state.is_loading());
    }

    #[test]
    fn not_trained_tab_is_paged_newest_first() {
        let mut state = MaterialsState::new(5);
        state.set_files(files());
        // 10 of 14 files are uploaded or skipped
        assert_eq!(state.page().total, 10);
        assert_eq!(state.page().total_pages, 2);
        assert_eq!(state.page().items[0].id, 14);

        state.set_page(2);
        assert_eq!(state.page().items.len(), 5);
        assert_eq!(state.pagination_props().current_page, 2);
    }

    #[test]
    fn switching_tab_starts_from_first_page() {
        let mut state = MaterialsState::new(2);
        state.set_files(files());
        state.set_page(3);
        state.set_tab(MaterialsTab::Trained);
        assert_eq!(state.page().page, 1);
        assert_eq!(state.page().total, 4);
        assert!(
            state
                .page()
                .items
                .iter()
                .all(|f| f.file_status == FileStatus::Trained)
        );
    }

    #[test]
    fn page_requests_are_clamped() {
        let mut state = MaterialsState::new(5);
        state.set_files(files());
        state.set_page(99);
        assert_eq!(state.page().page, 2);
        state.set_page(0);
        assert_eq!(state.page().page, 1);
    }

    #[test]
    fn skipping_last_item_on_page_steps_back() {
        let mut state = MaterialsState::new(3);
        state.set_files(files());
        state.set_tab(MaterialsTab::Trained);
        state.set_page(2);
        assert_eq!(state.page().items.len(), 1);
        let id = state.page().items[0].id;

        assert!(state.set_status(id, FileStatus::Skipped));
        assert_eq!(state.page().page, 1);
        assert_eq!(state.page().total, 3);
        assert!(!state.set_status(999, FileStatus::Skipped));
    }

    #[test]
    fn selection_follows_file_id() {
        let mut state = MaterialsState::new(5);
        state.set_files(files());
        state.select(Some(4));
        assert_eq!(state.selected().map(|f| f.id), Some(4));
        state.select(Some(404));
        assert!(state.selected().is_none());
    }
}
