//! Intents
//!
//! Change requests raised by the collection components. Components never
//! mutate caller state; they hand one of these to the owning page.

use gpui::SharedString;

use super::sort::SortState;

/// Raised when a sortable header is clicked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortChangeRequest {
    /// Column whose header was clicked
    pub column_id: SharedString,
    /// Sort state the caller should apply
    pub sort: SortState,
}

/// Raised by the pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChangeRequest {
    /// Go to a 1-based page number
    Page(usize),
    /// Switch to a different page size
    PageSize(usize),
}
