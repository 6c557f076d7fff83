//! Materials Page
//!
//! Training materials split into "not trained" and "trained" tabs. Pages are
//! fetched one at a time; sorting only reorders the visible page.

use gpui::{
    div, prelude::*, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Subscription, Window,
};
use rust_i18n::t;

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::{
    Column, DataTable, DataTableEvent, Pagination, PaginationProps, data_table,
};
use crate::components::primitives::button::Button;
use crate::domain::{FileStatus, MaterialsTab, TrainingFile};
use crate::features::materials::controller::MaterialsController;
use crate::theme::colors::CampusColors;
use crate::utils::format::{format_date, format_kilobytes};

/// Materials page component
pub struct MaterialsPage {
    entities: AppEntities,
    controller: MaterialsController,
    table: Entity<DataTable<TrainingFile>>,
    pagination: Entity<Pagination>,
    /// Locale the column labels were built with
    locale: String,
    _subscriptions: Vec<Subscription>,
}

impl MaterialsPage {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let controller = MaterialsController::new(entities.clone());
        let locale = entities.settings.read(cx).locale().to_string();

        let table = data_table(Self::create_columns(), window, cx);
        table.update(cx, |table, _cx| {
            table.set_clickable_rows(true);
            table.set_row_tone(|file: &TrainingFile| file.file_status.tone());
            table.set_empty_message(t!("materials.empty").to_string());
        });

        let pagination = {
            let on_page = controller.clone();
            let on_size = controller.clone();
            cx.new(|_cx| {
                Pagination::new(PaginationProps::default(), move |page, _window, cx| {
                    on_page.set_page(page, cx)
                })
                .on_items_per_page_change(move |size, _window, cx| on_size.set_per_page(size, cx))
            })
        };

        let subscriptions = vec![
            cx.subscribe(
                &table,
                |this, _table, event: &DataTableEvent<TrainingFile>, cx| match event {
                    DataTableEvent::RowActivated(file) => this.controller.select(file, cx),
                    DataTableEvent::SortChanged(request) => {
                        tracing::debug!(column = %request.column_id, "Sorting visible materials");
                    }
                },
            ),
            cx.observe(&entities.materials, |this, _materials, cx| this.sync(cx)),
            cx.observe(&entities.settings, |this, settings, cx| {
                let locale = settings.read(cx).locale().to_string();
                if locale == this.locale {
                    return;
                }
                tracing::debug!(%locale, "Rebuilding material columns");
                this.locale = locale;
                this.table.update(cx, |table, cx| {
                    table.set_columns(Self::create_columns());
                    table.set_empty_message(t!("materials.empty").to_string());
                    cx.notify();
                });
                cx.notify();
            }),
        ];

        controller.refresh(cx);

        Self {
            entities,
            controller,
            table,
            pagination,
            locale,
            _subscriptions: subscriptions,
        }
    }

    pub fn table(&self) -> &Entity<DataTable<TrainingFile>> {
        &self.table
    }

    fn create_columns() -> Vec<Column<TrainingFile>> {
        vec![
            Column::new("school", t!("materials.col_school").to_string())
                .accessor(|f: &TrainingFile| f.school_name.clone().into())
                .flex_width(Some(140.0))
                .sortable(),
            Column::new("grade", t!("materials.col_grade").to_string())
                .accessor(|f: &TrainingFile| f.grade_name.clone().into())
                .fixed_width(90.0)
                .sortable(),
            Column::new("subject", t!("materials.col_subject").to_string())
                .accessor(|f: &TrainingFile| f.subject_name.clone().into())
                .fixed_width(120.0)
                .sortable(),
            Column::new("file", t!("materials.col_file").to_string())
                .accessor(|f: &TrainingFile| f.original_filename.clone().into())
                .flex_width(Some(200.0))
                .sortable(),
            Column::new("size", t!("materials.col_size").to_string())
                .accessor(|f: &TrainingFile| format_kilobytes(f.file_size).into())
                .fixed_width(100.0)
                .sort_by(|a: &TrainingFile, b: &TrainingFile| a.file_size.cmp(&b.file_size)),
            Column::new("status", t!("materials.col_status").to_string())
                .cell(|f: &TrainingFile| render_status_badge(f.file_status))
                .fixed_width(100.0),
            Column::new("uploaded_at", t!("materials.col_uploaded").to_string())
                .accessor(|f: &TrainingFile| format_date(&f.uploaded_at).into())
                .fixed_width(120.0)
                .sort_by(|a: &TrainingFile, b: &TrainingFile| a.uploaded_at.cmp(&b.uploaded_at)),
        ]
    }

    fn sync(&mut self, cx: &mut Context<Self>) {
        let (rows, props, loading) = {
            let state = self.entities.materials.read(cx);
            (
                state.page().items.clone(),
                state.pagination_props(),
                state.is_loading(),
            )
        };

        self.table.update(cx, |table, cx| {
            table.set_rows(rows);
            table.set_loading(loading);
            cx.notify();
        });
        self.pagination
            .update(cx, |pagination, cx| pagination.set_props(props, cx));
        cx.notify();
    }

    fn render_tabs(&self, active: MaterialsTab) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .gap_2()
            .children(MaterialsTab::all().iter().enumerate().map(|(i, &tab)| {
                let controller = self.controller.clone();
                Button::chip(("materials-tab", i), t!(tab.title_key()).to_string())
                    .selected(tab == active)
                    .on_click(move |_event: &ClickEvent, _window, cx| controller.set_tab(tab, cx))
            }))
    }

    fn render_selection(&self, file: &TrainingFile, tab: MaterialsTab) -> impl IntoElement {
        let controller = self.controller.clone();
        let id = file.id;

        div()
            .w_full()
            .p_4()
            .flex()
            .items_center()
            .justify_between()
            .gap_4()
            .rounded_md()
            .border_1()
            .border_color(CampusColors::border())
            .bg(CampusColors::content_bg())
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(file.original_filename.clone()),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(CampusColors::text_secondary())
                            .child(format!(
                                "{} · {} · {} · {}",
                                file.school_name,
                                file.grade_name,
                                file.subject_name,
                                format_kilobytes(file.file_size)
                            )),
                    ),
            )
            .when(tab == MaterialsTab::NotTrained, |el| {
                el.child(
                    Button::secondary("skip-material", t!("materials.skip").to_string())
                        .disabled(file.file_status == FileStatus::Skipped)
                        .on_click(move |_event: &ClickEvent, _window, cx| controller.skip(id, cx)),
                )
            })
    }
}

/// Status pill
fn render_status_badge(status: FileStatus) -> gpui::AnyElement {
    let (bg, fg) = match status {
        FileStatus::Trained => (CampusColors::row_success(), CampusColors::success()),
        FileStatus::Skipped | FileStatus::Unknown => {
            (CampusColors::row_muted(), CampusColors::text_secondary())
        }
        FileStatus::Uploaded | FileStatus::Processing => {
            (CampusColors::table_row_hover(), CampusColors::accent())
        }
    };
    div()
        .px_2()
        .py_0p5()
        .rounded_full()
        .text_xs()
        .bg(bg)
        .text_color(fg)
        .child(status.label())
        .into_any_element()
}

impl Render for MaterialsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.entities.materials.read(cx);
        let tab = state.tab();
        let selection = state
            .selected()
            .map(|file| self.render_selection(file, tab).into_any_element());

        div()
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_4()
            // Header
            .child(
                div()
                    .w_full()
                    .flex()
                    .flex_wrap()
                    .items_center()
                    .justify_between()
                    .gap_2()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .text_xl()
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .child(t!("materials.title").to_string()),
                            )
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(CampusColors::text_secondary())
                                    .child(t!("materials.subtitle").to_string()),
                            ),
                    )
                    .child(self.render_tabs(tab)),
            )
            .children(selection)
            // Table
            .child(div().flex_1().overflow_hidden().child(self.table.clone()))
            .child(Pagination::cached_view(&self.pagination))
    }
}
