//! DataTable Component
//!
//! Renders a page of records as a table, or as cards on narrow windows.
//! Sort and row intents are emitted as [`DataTableEvent`]s.

use gpui::{
    div, prelude::*, px, AnyElement, ClickEvent, Context, Div, Entity, EventEmitter,
    InteractiveElement, IntoElement, ParentElement, Render, SharedString, Stateful,
    StatefulInteractiveElement, Styled, Subscription, Window,
};
use rust_i18n::t;
use tracing::debug;

use super::column::{Column, ColumnWidth};
use super::intent::SortChangeRequest;
use super::sort::SortState;
use super::state::{TableBody, TableState};
use super::viewport::LayoutMode;
use crate::constants::{TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT};
use crate::theme::colors::CampusColors;

/// Cosmetic per-row tint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowTone {
    #[default]
    Normal,
    Muted,
    Success,
    Warning,
    Danger,
}

/// Intents raised by the table
#[derive(Debug, Clone)]
pub enum DataTableEvent<R> {
    /// A sortable header was clicked
    SortChanged(SortChangeRequest),
    /// A row or card was clicked (only when rows are clickable)
    RowActivated(R),
}

/// DataTable component
pub struct DataTable<R: Clone + 'static> {
    columns: Vec<Column<R>>,
    state: TableState<R>,
    clickable_rows: bool,
    row_tone: Option<Box<dyn Fn(&R) -> RowTone>>,
    card_renderer: Option<Box<dyn Fn(&R) -> AnyElement>>,
    _bounds_subscription: Subscription,
}

impl<R: Clone + 'static> EventEmitter<DataTableEvent<R>> for DataTable<R> {}

impl<R: Clone + 'static> DataTable<R> {
    /// Create a new data table tracking the window width
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let mut state = TableState::new();
        state.set_empty_message(t!("table.no_data").to_string());
        state.set_viewport_width(f32::from(window.viewport_size().width));

        // Released together with the table
        let bounds_subscription = cx.observe_window_bounds(window, |this, window, cx| {
            let width = f32::from(window.viewport_size().width);
            if this.state.set_viewport_width(width) {
                debug!(width, narrow = this.state.is_narrow(), "DataTable layout changed");
                cx.notify();
            }
        });

        Self {
            columns: Vec::new(),
            state,
            clickable_rows: false,
            row_tone: None,
            card_renderer: None,
            _bounds_subscription: bounds_subscription,
        }
    }

    /// Set the columns
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    /// Set the rows (already filtered and paginated by the caller)
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.state.set_rows(rows);
    }

    /// Set loading state
    pub fn set_loading(&mut self, loading: bool) {
        self.state.set_loading(loading);
    }

    /// Set the empty message
    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.state.set_empty_message(message);
    }

    /// Push the caller-owned sort state
    pub fn set_sort(&mut self, sort: SortState) {
        self.state.set_sort(sort);
    }

    /// When true the caller sorts (locally or on the server) in response to
    /// [`DataTableEvent::SortChanged`]; otherwise the table sorts its rows itself
    pub fn set_manual_sort(&mut self, manual: bool) {
        self.state.set_manual_sort(manual);
    }

    /// Keep other sorted columns when a new header is clicked
    pub fn set_multi_sort(&mut self, multi: bool) {
        self.state.set_multi_sort(multi);
    }

    /// Emit [`DataTableEvent::RowActivated`] on click and show the pointer affordance
    pub fn set_clickable_rows(&mut self, clickable: bool) {
        self.clickable_rows = clickable;
    }

    /// Per-row tint
    pub fn set_row_tone(&mut self, tone: impl Fn(&R) -> RowTone + 'static) {
        self.row_tone = Some(Box::new(tone));
    }

    /// Card renderer used on narrow windows
    pub fn set_card_renderer(&mut self, render: impl Fn(&R) -> AnyElement + 'static) {
        self.card_renderer = Some(Box::new(render));
        self.state.set_has_card_renderer(true);
    }

    /// Enable or disable the card layout (enabled by default)
    pub fn set_card_layout(&mut self, enabled: bool) {
        self.state.set_card_layout(enabled);
    }

    /// Headless state
    pub fn state(&self) -> &TableState<R> {
        &self.state
    }

    /// Header labels in column order
    pub fn column_labels(&self) -> Vec<SharedString> {
        self.columns.iter().map(|col| col.label.clone()).collect()
    }

    fn handle_header_click(&mut self, column_id: &str, cx: &mut Context<Self>) {
        let Some(request) = self.state.toggle_sort(&self.columns, column_id) else {
            return;
        };
        debug!(column = %request.column_id, sort = ?request.sort, "Sort change requested");
        cx.emit(DataTableEvent::SortChanged(request));
        cx.notify();
    }

    fn activate_row(&mut self, index: usize, cx: &mut Context<Self>) {
        if !self.clickable_rows {
            return;
        }
        if let Some(row) = self.state.row(index) {
            cx.emit(DataTableEvent::RowActivated(row.clone()));
        }
    }

    fn tone_bg(&self, row: &R, position: usize) -> gpui::Rgba {
        let tone = self.row_tone.as_ref().map(|f| f(row)).unwrap_or_default();
        match tone {
            RowTone::Normal if position % 2 == 0 => CampusColors::content_bg(),
            RowTone::Normal => CampusColors::table_row_alt(),
            RowTone::Muted => CampusColors::row_muted(),
            RowTone::Success => CampusColors::row_success(),
            RowTone::Warning => CampusColors::row_warning(),
            RowTone::Danger => CampusColors::row_danger(),
        }
    }

    /// Apply a column width to a cell container
    fn sized(cell: Div, width: &ColumnWidth) -> Div {
        match width {
            ColumnWidth::Fixed(w) => cell.w(px(*w)).flex_none(),
            ColumnWidth::Flex { min } => cell.flex_1().min_w(px(min.unwrap_or(100.0))),
        }
    }

    /// Render the header row
    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let sort = self.state.sort();

        div()
            .h(px(TABLE_HEADER_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .bg(CampusColors::table_header_bg())
            .border_b_1()
            .border_color(CampusColors::border())
            .children(self.columns.iter().enumerate().map(|(i, col)| {
                let label = Self::sized(div(), &col.width)
                    .px_3()
                    .flex()
                    .items_center()
                    .gap_2()
                    .text_xs()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(CampusColors::text_secondary())
                    .child(col.label.clone());

                let mut cell = div().id(("col-header", i)).child(if col.sortable {
                    label.child(sort.indicator(&col.id))
                } else {
                    label
                });

                if col.sortable {
                    let column_id = col.id.clone();
                    cell = cell
                        .cursor_pointer()
                        .hover(|s| s.text_color(CampusColors::text_primary()))
                        .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                            this.handle_header_click(&column_id, cx);
                        }));
                }
                cell
            }))
    }

    /// Render a data row
    fn render_row(
        &self,
        row: &R,
        index: usize,
        position: usize,
        cx: &mut Context<Self>,
    ) -> Stateful<Div> {
        let mut el = div()
            .id(("row", index))
            .h(px(TABLE_ROW_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .bg(self.tone_bg(row, position))
            .border_b_1()
            .border_color(CampusColors::border())
            .children(self.columns.iter().map(|col| {
                Self::sized(div(), &col.width)
                    .px_3()
                    .text_sm()
                    .text_color(CampusColors::text_primary())
                    .overflow_hidden()
                    .children(col.render_cell(row))
            }));

        if self.clickable_rows {
            el = el
                .cursor_pointer()
                .hover(|s| s.bg(CampusColors::table_row_hover()))
                .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                    this.activate_row(index, cx);
                }));
        }
        el
    }

    /// Render one record as a card
    fn render_card(&self, row: &R, index: usize, cx: &mut Context<Self>) -> Stateful<Div> {
        let mut card = div()
            .id(("card", index))
            .w_full()
            .p_4()
            .rounded_lg()
            .border_1()
            .border_color(CampusColors::border())
            .bg(self.tone_bg(row, 0))
            .shadow_sm()
            .children(self.card_renderer.as_ref().map(|render| render(row)));

        if self.clickable_rows {
            card = card
                .cursor_pointer()
                .hover(|s| s.shadow_md())
                .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                    this.activate_row(index, cx);
                }));
        }
        card
    }

    /// Single full-width placeholder row
    fn render_empty_row(&self, message: SharedString) -> impl IntoElement {
        div()
            .w_full()
            .py_8()
            .flex()
            .justify_center()
            .text_sm()
            .text_color(CampusColors::text_muted())
            .child(message)
    }

    /// Render loading state
    fn render_loading(&self) -> impl IntoElement {
        div()
            .flex_1()
            .py_8()
            .flex()
            .items_center()
            .justify_center()
            .text_color(CampusColors::text_muted())
            .child(t!("table.loading").to_string())
    }

    fn table_frame(&self) -> Div {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(CampusColors::content_bg())
            .border_1()
            .border_color(CampusColors::border())
            .rounded_md()
            .overflow_hidden()
    }

    fn card_frame(&self) -> Div {
        div().size_full().flex().flex_col().gap_3()
    }
}

impl<R: Clone + 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        match self.state.body(&self.columns) {
            TableBody::Loading => self
                .table_frame()
                .child(self.render_loading())
                .into_any_element(),
            TableBody::Empty {
                layout: LayoutMode::Cards,
                message,
            } => self
                .card_frame()
                .child(self.render_empty_row(message))
                .into_any_element(),
            TableBody::Empty {
                layout: LayoutMode::Table,
                message,
            } => self
                .table_frame()
                .child(self.render_header(cx))
                .child(self.render_empty_row(message))
                .into_any_element(),
            TableBody::Rows {
                layout: LayoutMode::Cards,
                order,
            } => {
                let cards: Vec<_> = order
                    .into_iter()
                    .filter_map(|i| self.state.row(i).map(|row| self.render_card(row, i, cx)))
                    .collect();
                self.card_frame()
                    .child(
                        div()
                            .id("data-table-cards")
                            .flex_1()
                            .flex()
                            .flex_col()
                            .gap_3()
                            .overflow_y_scroll()
                            .children(cards),
                    )
                    .into_any_element()
            }
            TableBody::Rows {
                layout: LayoutMode::Table,
                order,
            } => {
                let rows: Vec<_> = order
                    .into_iter()
                    .enumerate()
                    .filter_map(|(position, i)| {
                        self.state
                            .row(i)
                            .map(|row| self.render_row(row, i, position, cx))
                    })
                    .collect();
                self.table_frame()
                    .child(self.render_header(cx))
                    .child(
                        div()
                            .id("data-table-rows")
                            .flex_1()
                            .overflow_y_scroll()
                            .children(rows),
                    )
                    .into_any_element()
            }
        }
    }
}

/// Helper to create a DataTable entity
pub fn data_table<R: Clone + 'static, V: 'static>(
    columns: Vec<Column<R>>,
    window: &mut Window,
    cx: &mut Context<V>,
) -> Entity<DataTable<R>> {
    cx.new(|cx| {
        let mut table = DataTable::new(window, cx);
        table.set_columns(columns);
        table
    })
}
