//! Pagination Component
//!
//! Page navigation for the DataTable: page-size selector, "showing X to Y of
//! Z" summary and a windowed page strip. Purely driven by props; every
//! interaction goes out through callbacks.

use std::fmt;
use std::rc::Rc;

use gpui::{
    div, prelude::*, AnyView, App, Context, Div, ElementId, Entity, InteractiveElement,
    IntoElement, ParentElement, Render, SharedString, Stateful, StatefulInteractiveElement,
    StyleRefinement, Styled, Window,
};
use rust_i18n::t;
use tracing::debug;

use super::intent::PageChangeRequest;
use crate::constants::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS, MAX_VISIBLE_PAGES};
use crate::theme::colors::CampusColors;

pub type PageHandler = Rc<dyn Fn(PageChangeRequest, &mut Window, &mut App)>;

/// One slot of the page strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number (1-based)
    Page(usize),
    /// Non-interactive gap marker, keyed by its position in the strip
    Ellipsis { slot: usize },
}

impl PageItem {
    pub fn label(&self) -> String {
        match self {
            PageItem::Page(n) => n.to_string(),
            PageItem::Ellipsis { .. } => "…".to_string(),
        }
    }
}

/// Compute the page strip for `current` of `total` pages.
///
/// Up to seven pages are listed in full. Beyond that: first page, a gap if
/// `current > 3`, the pages around `current`, a gap if
/// `current < total - 2`, last page.
pub fn page_items(current: usize, total: usize) -> Vec<PageItem> {
    let mut items = Vec::new();

    if total <= MAX_VISIBLE_PAGES {
        items.extend((1..=total).map(PageItem::Page));
        return items;
    }

    items.push(PageItem::Page(1));

    if current > 3 {
        items.push(PageItem::Ellipsis { slot: items.len() });
    }

    let start = current.saturating_sub(1).max(2);
    let end = (total - 1).min(current + 1);
    items.extend((start..=end).map(PageItem::Page));

    if current < total - 2 {
        items.push(PageItem::Ellipsis { slot: items.len() });
    }

    items.push(PageItem::Page(total));
    items
}

/// The "showing X to Y of Z" range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl PageSummary {
    pub fn new(current_page: usize, items_per_page: usize, total_items: usize) -> Self {
        let start = if total_items == 0 {
            0
        } else {
            current_page.saturating_sub(1) * items_per_page + 1
        };
        let end = (current_page * items_per_page).min(total_items);
        Self {
            start,
            end,
            total: total_items,
        }
    }
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} results",
            self.start, self.end, self.total
        )
    }
}

/// Pagination metadata supplied by the owning page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub page_size_options: Vec<usize>,
    pub loading: bool,
}

impl Default for PaginationProps {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            total_items: 0,
            items_per_page: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            loading: false,
        }
    }
}

impl PaginationProps {
    pub fn new(
        current_page: usize,
        total_pages: usize,
        total_items: usize,
        items_per_page: usize,
    ) -> Self {
        Self {
            current_page,
            total_pages,
            total_items,
            items_per_page,
            ..Default::default()
        }
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn with_page_size_options(mut self, options: Vec<usize>) -> Self {
        self.page_size_options = options;
        self
    }

    pub fn summary(&self) -> PageSummary {
        PageSummary::new(self.current_page, self.items_per_page, self.total_items)
    }

    pub fn page_items(&self) -> Vec<PageItem> {
        page_items(self.current_page, self.total_pages)
    }

    pub fn prev_disabled(&self) -> bool {
        self.current_page == 1 || self.loading
    }

    pub fn next_disabled(&self) -> bool {
        self.current_page == self.total_pages || self.loading
    }

    /// Numbered page buttons only lock while loading
    pub fn page_button_disabled(&self) -> bool {
        self.loading
    }

    pub fn size_selector_disabled(&self) -> bool {
        self.loading
    }
}

/// Pagination component
pub struct Pagination {
    props: PaginationProps,
    on_page_change: PageHandler,
    on_items_per_page_change: Option<PageHandler>,
    #[cfg(test)]
    render_count: usize,
}

impl Pagination {
    /// Create a new pagination component
    pub fn new(
        props: PaginationProps,
        on_page_change: impl Fn(usize, &mut Window, &mut App) + 'static,
    ) -> Self {
        Self {
            props,
            on_page_change: Rc::new(move |request, window, cx| {
                if let PageChangeRequest::Page(page) = request {
                    on_page_change(page, window, cx);
                }
            }),
            on_items_per_page_change: None,
            #[cfg(test)]
            render_count: 0,
        }
    }

    /// Embed a pagination entity so that the parent re-rendering does not
    /// re-render it; only `set_props` with new props does
    pub fn cached_view(pagination: &Entity<Self>) -> AnyView {
        AnyView::from(pagination.clone()).cached(StyleRefinement::default().w_full())
    }

    /// Show the page-size selector and forward size changes
    pub fn on_items_per_page_change(
        mut self,
        handler: impl Fn(usize, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_items_per_page_change = Some(Rc::new(move |request, window, cx| {
            if let PageChangeRequest::PageSize(size) = request {
                handler(size, window, cx);
            }
        }));
        self
    }

    pub fn props(&self) -> &PaginationProps {
        &self.props
    }

    /// The size selector is only shown when size changes have a receiver
    pub fn shows_size_selector(&self) -> bool {
        self.on_items_per_page_change.is_some()
    }

    /// Handler that receives a request, if anyone listens for it
    pub fn handler_for(&self, request: PageChangeRequest) -> Option<PageHandler> {
        match request {
            PageChangeRequest::Page(_) => Some(self.on_page_change.clone()),
            PageChangeRequest::PageSize(_) => self.on_items_per_page_change.clone(),
        }
    }

    /// Replace the props; returns false (and changes nothing) when they are equal
    fn apply_props(&mut self, props: PaginationProps) -> bool {
        if self.props == props {
            return false;
        }
        self.props = props;
        true
    }

    /// Push new props, re-rendering only when something changed
    pub fn set_props(&mut self, props: PaginationProps, cx: &mut Context<Self>) {
        if self.apply_props(props) {
            cx.notify();
        }
    }

    fn button(
        id: impl Into<ElementId>,
        label: impl Into<SharedString>,
        disabled: bool,
        active: bool,
        request: PageChangeRequest,
        handler: PageHandler,
    ) -> Stateful<Div> {
        let label: SharedString = label.into();
        let mut btn = div()
            .id(id)
            .px_3()
            .py_1()
            .rounded_md()
            .text_sm()
            .border_1()
            .border_color(CampusColors::border())
            .child(label);

        btn = if active {
            btn.bg(CampusColors::accent())
                .text_color(CampusColors::text_light())
        } else {
            btn.bg(CampusColors::content_bg())
                .text_color(CampusColors::text_primary())
        };

        if disabled {
            btn.opacity(0.5)
        } else {
            btn.cursor_pointer()
                .hover(|s| s.bg(CampusColors::table_row_hover()))
                .on_click(move |_, window, cx| {
                    debug!(?request, "Pagination request");
                    handler(request, window, cx);
                })
        }
    }

    fn render_size_selector(&self, handler: PageHandler) -> impl IntoElement {
        let props = &self.props;
        div()
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .text_sm()
                    .text_color(CampusColors::text_secondary())
                    .child(t!("pagination.show").to_string()),
            )
            .children(props.page_size_options.iter().map(|&size| {
                Self::button(
                    ("page-size", size),
                    size.to_string(),
                    props.size_selector_disabled(),
                    size == props.items_per_page,
                    PageChangeRequest::PageSize(size),
                    handler.clone(),
                )
            }))
            .child(
                div()
                    .text_sm()
                    .text_color(CampusColors::text_secondary())
                    .child(t!("pagination.entries").to_string()),
            )
    }

    fn render_summary(&self) -> impl IntoElement {
        let summary = self.props.summary();
        div()
            .text_sm()
            .text_color(CampusColors::text_secondary())
            .child(
                t!(
                    "pagination.summary",
                    start = summary.start,
                    end = summary.end,
                    total = summary.total
                )
                .to_string(),
            )
    }

    fn render_strip(&self) -> impl IntoElement {
        let props = &self.props;
        let current = props.current_page;

        div()
            .flex()
            .items_center()
            .gap_2()
            .child(Self::button(
                "prev-page",
                t!("pagination.previous").to_string(),
                props.prev_disabled(),
                false,
                PageChangeRequest::Page(current.saturating_sub(1)),
                self.on_page_change.clone(),
            ))
            .children(props.page_items().into_iter().map(|item| match item {
                PageItem::Ellipsis { slot } => div()
                    .id(("page-ellipsis", slot))
                    .px_2()
                    .text_sm()
                    .text_color(CampusColors::text_muted())
                    .child(item.label())
                    .into_any_element(),
                PageItem::Page(page) => Self::button(
                    ("page", page),
                    page.to_string(),
                    props.page_button_disabled(),
                    page == current,
                    PageChangeRequest::Page(page),
                    self.on_page_change.clone(),
                )
                .into_any_element(),
            }))
            .child(Self::button(
                "next-page",
                t!("pagination.next").to_string(),
                props.next_disabled(),
                false,
                PageChangeRequest::Page(current + 1),
                self.on_page_change.clone(),
            ))
    }
}

impl Render for Pagination {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        #[cfg(test)]
        {
            self.render_count += 1;
        }

        let size_handler = self
            .handler_for(PageChangeRequest::PageSize(self.props.items_per_page));

        div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .flex_wrap()
            .items_center()
            .justify_between()
            .gap_4()
            .border_t_1()
            .border_color(CampusColors::border())
            .when_some(size_handler, |el, handler| {
                el.child(self.render_size_selector(handler))
            })
            .child(self.render_summary())
            .child(self.render_strip())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use gpui::{TestAppContext, VisualTestContext};

    fn labels(items: &[PageItem]) -> Vec<String> {
        items.iter().map(PageItem::label).collect()
    }

    #[test]
    fn small_page_counts_list_every_page() {
        for total in 0..=7 {
            let items = page_items(1, total);
            assert_eq!(items.len(), total);
            assert!(items.iter().all(|i| matches!(i, PageItem::Page(_))));
        }
    }

    #[test]
    fn middle_page_has_two_gaps() {
        assert_eq!(
            labels(&page_items(5, 10)),
            vec!["1", "…", "4", "5", "6", "…", "10"]
        );
    }

    #[test]
    fn first_pages_have_trailing_gap_only() {
        assert_eq!(labels(&page_items(1, 10)), vec!["1", "2", "…", "10"]);
        assert_eq!(labels(&page_items(2, 10)), vec!["1", "2", "3", "…", "10"]);
        assert_eq!(labels(&page_items(3, 10)), vec!["1", "2", "3", "4", "…", "10"]);
    }

    #[test]
    fn last_pages_have_leading_gap_only() {
        assert_eq!(labels(&page_items(10, 10)), vec!["1", "…", "9", "10"]);
        assert_eq!(labels(&page_items(8, 10)), vec!["1", "…", "7", "8", "9", "10"]);
    }

    #[test]
    fn ellipses_are_keyed_by_slot() {
        let items = page_items(5, 10);
        assert_eq!(items[1], PageItem::Ellipsis { slot: 1 });
        assert_eq!(items[5], PageItem::Ellipsis { slot: 5 });
    }

    #[test]
    fn summary_for_empty_collection() {
        let summary = PageSummary::new(1, 10, 0);
        assert_eq!(summary.to_string(), "Showing 0 to 0 of 0 results");
    }

    #[test]
    fn summary_for_partial_last_page() {
        let props = PaginationProps::new(3, 3, 25, 10);
        assert_eq!(props.summary().to_string(), "Showing 21 to 25 of 25 results");
    }

    #[test]
    fn localized_summary_matches_display() {
        let summary = PageSummary::new(3, 10, 25);
        let text = t!(
            "pagination.summary",
            locale = "en",
            start = summary.start,
            end = summary.end,
            total = summary.total
        );
        assert_eq!(text, summary.to_string());
    }

    #[test]
    fn prev_next_disabled_at_boundaries() {
        let first = PaginationProps::new(1, 5, 50, 10);
        assert!(first.prev_disabled());
        assert!(!first.next_disabled());

        let middle = PaginationProps::new(3, 5, 50, 10);
        assert!(!middle.prev_disabled());
        assert!(!middle.next_disabled());

        let last = PaginationProps::new(5, 5, 50, 10);
        assert!(!last.prev_disabled());
        assert!(last.next_disabled());
    }

    #[test]
    fn loading_disables_navigation() {
        let props = PaginationProps::new(3, 5, 50, 10).with_loading(true);
        assert!(props.prev_disabled());
        assert!(props.next_disabled());
    }

    #[test]
    fn equal_props_do_not_trigger_update() {
        let mut pagination = Pagination::new(PaginationProps::new(1, 3, 25, 10), |_, _, _| {});
        assert!(!pagination.apply_props(PaginationProps::new(1, 3, 25, 10)));
        assert!(pagination.apply_props(PaginationProps::new(2, 3, 25, 10)));
        assert_eq!(pagination.props().current_page, 2);
    }

    #[test]
    fn default_page_size_options() {
        let props = PaginationProps::default();
        assert_eq!(props.page_size_options, vec![10, 25, 50, 100]);
        assert_eq!(props.items_per_page, 10);
    }

    #[test]
    fn loading_disables_every_page_and_size_button() {
        let idle = PaginationProps::new(3, 5, 50, 10);
        assert!(!idle.page_button_disabled());
        assert!(!idle.size_selector_disabled());

        let loading = idle.with_loading(true);
        assert!(loading.page_button_disabled());
        assert!(loading.size_selector_disabled());
        assert!(loading.prev_disabled());
        assert!(loading.next_disabled());
    }

    #[test]
    fn size_selector_needs_a_handler() {
        let bare = Pagination::new(PaginationProps::default(), |_, _, _| {});
        assert!(!bare.shows_size_selector());
        assert!(bare.handler_for(PageChangeRequest::PageSize(25)).is_none());

        let sized = Pagination::new(PaginationProps::default(), |_, _, _| {})
            .on_items_per_page_change(|_, _, _| {});
        assert!(sized.shows_size_selector());
        assert!(sized.handler_for(PageChangeRequest::PageSize(25)).is_some());
    }

    struct Host {
        pagination: Entity<Pagination>,
    }

    impl Render for Host {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            div()
                .size_full()
                .child(Pagination::cached_view(&self.pagination))
        }
    }

    fn host_with(
        cx: &mut TestAppContext,
        build: impl FnOnce() -> Pagination + 'static,
    ) -> (Entity<Host>, Entity<Pagination>, &mut VisualTestContext) {
        let (host, cx) = cx.add_window_view(|_window, cx| Host {
            pagination: cx.new(|_cx| build()),
        });
        cx.run_until_parked();
        let pagination = host.read_with(cx, |host, _| host.pagination.clone());
        (host, pagination, cx)
    }

    fn dispatch(pagination: &Entity<Pagination>, request: PageChangeRequest, cx: &mut VisualTestContext) {
        cx.update(|window, cx| {
            if let Some(handler) = pagination.read(cx).handler_for(request) {
                handler(request, window, cx);
            }
        });
    }

    #[gpui::test]
    fn page_click_reaches_handler_once(cx: &mut TestAppContext) {
        let pages = Rc::new(RefCell::new(Vec::new()));
        let sizes = Rc::new(RefCell::new(Vec::new()));
        let (on_page, on_size) = (pages.clone(), sizes.clone());
        let (_host, pagination, cx) = host_with(cx, move || {
            Pagination::new(PaginationProps::new(2, 5, 50, 10), move |page, _, _| {
                on_page.borrow_mut().push(page)
            })
            .on_items_per_page_change(move |size, _, _| on_size.borrow_mut().push(size))
        });

        dispatch(&pagination, PageChangeRequest::Page(4), cx);
        assert_eq!(*pages.borrow(), vec![4]);
        assert!(sizes.borrow().is_empty());

        dispatch(&pagination, PageChangeRequest::PageSize(25), cx);
        assert_eq!(*pages.borrow(), vec![4]);
        assert_eq!(*sizes.borrow(), vec![25]);
    }

    #[gpui::test]
    fn parent_redraw_reuses_unchanged_pagination(cx: &mut TestAppContext) {
        let (host, pagination, cx) = host_with(cx, || {
            Pagination::new(PaginationProps::new(1, 3, 25, 10), |_, _, _| {})
        });
        let renders = |cx: &mut VisualTestContext| pagination.read_with(cx, |p, _| p.render_count);
        let first = renders(cx);
        assert!(first >= 1);

        // Parent redraws with equal props pushed in between
        pagination.update(cx, |p, cx| p.set_props(PaginationProps::new(1, 3, 25, 10), cx));
        host.update(cx, |_, cx| cx.notify());
        cx.run_until_parked();
        assert_eq!(renders(cx), first);

        pagination.update(cx, |p, cx| p.set_props(PaginationProps::new(2, 3, 25, 10), cx));
        host.update(cx, |_, cx| cx.notify());
        cx.run_until_parked();
        assert_eq!(renders(cx), first + 1);
    }
}
