//! TableState
//!
//! Headless model behind [`super::DataTable`]: which body to show, in which
//! layout, in which row order, and what a header click asks for.

use std::cmp::Ordering;

use gpui::SharedString;

use super::column::Column;
use super::intent::SortChangeRequest;
use super::sort::{SortDirection, SortState};
use super::viewport::{LayoutMode, is_narrow, layout_mode};

/// What the table body shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// Loading indicator only
    Loading,
    /// A single placeholder row (table) or block (cards)
    Empty {
        layout: LayoutMode,
        message: SharedString,
    },
    /// Records, by index into the row vector, in display order
    Rows { layout: LayoutMode, order: Vec<usize> },
}

/// Headless state of a data table
pub struct TableState<R> {
    rows: Vec<R>,
    sort: SortState,
    /// Caller owns sorting; rows are shown in the order given
    manual_sort: bool,
    multi_sort: bool,
    loading: bool,
    empty_message: SharedString,
    narrow: bool,
    card_layout: bool,
    has_card_renderer: bool,
}

impl<R> Default for TableState<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            sort: SortState::default(),
            manual_sort: false,
            multi_sort: false,
            loading: false,
            empty_message: "No data available".into(),
            narrow: false,
            card_layout: true,
            has_card_renderer: false,
        }
    }
}

impl<R: 'static> TableState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&R> {
        self.rows.get(index)
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_narrow(&self) -> bool {
        self.narrow
    }

    pub fn empty_message(&self) -> &SharedString {
        &self.empty_message
    }

    pub fn layout(&self) -> LayoutMode {
        layout_mode(self.narrow, self.has_card_renderer, self.card_layout)
    }

    // ==================== Setters ====================

    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
    }

    pub fn set_manual_sort(&mut self, manual: bool) {
        self.manual_sort = manual;
    }

    pub fn set_multi_sort(&mut self, multi: bool) {
        self.multi_sort = multi;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.empty_message = message.into();
    }

    pub fn set_card_layout(&mut self, enabled: bool) {
        self.card_layout = enabled;
    }

    pub fn set_has_card_renderer(&mut self, has: bool) {
        self.has_card_renderer = has;
    }

    /// Re-evaluate the breakpoint; returns true when the narrow flag flipped
    pub fn set_viewport_width(&mut self, width: f32) -> bool {
        let narrow = is_narrow(width);
        let changed = narrow != self.narrow;
        self.narrow = narrow;
        changed
    }

    // ==================== Behavior ====================

    /// Row indices in display order. Rows keep their given order when the
    /// caller owns sorting or nothing is sorted; otherwise a stable sort by
    /// the sort entries in priority order.
    pub fn display_order(&self, columns: &[Column<R>]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.rows.len()).collect();
        if self.manual_sort || self.sort.is_empty() {
            return order;
        }

        let keys: Vec<(&Column<R>, SortDirection)> = self
            .sort
            .entries()
            .iter()
            .filter_map(|entry| {
                columns
                    .iter()
                    .find(|c| c.id == entry.column_id)
                    .map(|c| (c, entry.direction))
            })
            .collect();

        order.sort_by(|&a, &b| {
            keys.iter()
                .map(|(column, direction)| {
                    let ord = column.compare(&self.rows[a], &self.rows[b]);
                    match direction {
                        SortDirection::Ascending => ord,
                        SortDirection::Descending => ord.reverse(),
                    }
                })
                .find(|ord| *ord != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });
        order
    }

    /// Body to render
    pub fn body(&self, columns: &[Column<R>]) -> TableBody {
        if self.loading {
            return TableBody::Loading;
        }
        let layout = self.layout();
        if self.rows.is_empty() {
            return TableBody::Empty {
                layout,
                message: self.empty_message.clone(),
            };
        }
        TableBody::Rows {
            layout,
            order: self.display_order(columns),
        }
    }

    /// Handle a header click. Returns the request to forward to the caller,
    /// or `None` when the column is unknown or not sortable. With local
    /// sorting the new state is applied immediately.
    pub fn toggle_sort(
        &mut self,
        columns: &[Column<R>],
        column_id: &str,
    ) -> Option<SortChangeRequest> {
        let column = columns.iter().find(|c| AsRef::<str>::as_ref(&c.id) == column_id)?;
        if !column.sortable {
            return None;
        }

        let next = self.sort.toggled(column_id, self.multi_sort);
        if !self.manual_sort {
            self.sort = next.clone();
        }

        Some(SortChangeRequest {
            column_id: column.id.clone(),
            sort: next,
        })
    }
}
