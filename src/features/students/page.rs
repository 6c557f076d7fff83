//! Students Page
//!
//! Roster with free-text search (plus preset shortcuts), caller-driven sort
//! over the whole filtered list, and a card layout on narrow windows.

use gpui::{
    div, prelude::*, AnyElement, ClickEvent, Context, Entity, IntoElement, ParentElement, Render,
    Styled, Subscription, Window,
};
use rust_i18n::t;
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::{
    Column, DataTable, DataTableEvent, Pagination, PaginationProps, data_table,
};
use crate::components::primitives::button::Button;
use crate::components::primitives::text_input::{TextInput, TextInputEvent, text_input};
use crate::domain::Student;
use crate::features::students::controller::{SEARCH_PRESETS, StudentsController};
use crate::theme::colors::CampusColors;
use crate::utils::format::format_naive_date;

/// Students page component
pub struct StudentsPage {
    entities: AppEntities,
    controller: StudentsController,
    table: Entity<DataTable<Student>>,
    pagination: Entity<Pagination>,
    search_input: Entity<TextInput>,
    /// Locale the column labels were built with
    locale: String,
    _subscriptions: Vec<Subscription>,
}

impl StudentsPage {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let controller = StudentsController::new(entities.clone());
        let (card_layout, locale) = {
            let settings = entities.settings.read(cx);
            (settings.card_layout(), settings.locale().to_string())
        };
        let search_input = text_input(
            "student-search",
            t!("students.search_placeholder").to_string(),
            cx,
        );

        let table = data_table(Self::create_columns(), window, cx);
        table.update(cx, |table, _cx| {
            // Sorting spans every page, so the roster state sorts
            table.set_manual_sort(true);
            table.set_card_renderer(render_student_card);
            table.set_card_layout(card_layout);
            table.set_empty_message(t!("students.empty").to_string());
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
                |this, _table, event: &DataTableEvent<Student>, cx| {
                    if let DataTableEvent::SortChanged(request) = event {
                        this.controller.set_sort(request.sort.clone(), cx);
                    }
                },
            ),
            cx.subscribe(&search_input, |this, _input, event: &TextInputEvent, cx| {
                let TextInputEvent::Changed(term) = event;
                this.controller.set_search(term, cx);
            }),
            cx.observe(&entities.students, |this, _students, cx| this.sync(cx)),
            cx.observe(&entities.settings, |this, _settings, cx| this.apply_settings(cx)),
        ];

        controller.refresh(cx);

        Self {
            entities,
            controller,
            table,
            pagination,
            search_input,
            locale,
            _subscriptions: subscriptions,
        }
    }

    pub fn table(&self) -> &Entity<DataTable<Student>> {
        &self.table
    }

    pub fn search_input(&self) -> &Entity<TextInput> {
        &self.search_input
    }

    fn create_columns() -> Vec<Column<Student>> {
        vec![
            Column::new("name", t!("students.col_name").to_string())
                .accessor(|s: &Student| s.name.clone().into())
                .flex_width(Some(180.0))
                .sortable(),
            Column::new("grade", t!("students.col_grade").to_string())
                .accessor(|s: &Student| s.grade.clone().into())
                .fixed_width(120.0)
                .sortable(),
            Column::new("class", t!("students.col_class").to_string())
                .cell(|s: &Student| {
                    let color = if s.class_name.is_some() {
                        CampusColors::text_secondary()
                    } else {
                        CampusColors::text_muted()
                    };
                    div()
                        .text_color(color)
                        .child(s.class_label())
                        .into_any_element()
                })
                .flex_width(Some(160.0))
                .sortable(),
            Column::new("enrolled_on", t!("students.col_enrolled").to_string())
                .accessor(|s: &Student| format_naive_date(&s.enrolled_on).into())
                .fixed_width(130.0)
                .sortable(),
        ]
    }

    /// Follow the card layout switch; rebuild labels after a locale change
    fn apply_settings(&mut self, cx: &mut Context<Self>) {
        let (card_layout, locale) = {
            let settings = self.entities.settings.read(cx);
            (settings.card_layout(), settings.locale().to_string())
        };

        let relabel = locale != self.locale;
        if relabel {
            debug!(%locale, "Rebuilding student columns");
            self.locale = locale;
            self.search_input.update(cx, |input, cx| {
                input.set_placeholder(t!("students.search_placeholder").to_string());
                cx.notify();
            });
        }

        self.table.update(cx, |table, cx| {
            table.set_card_layout(card_layout);
            if relabel {
                table.set_columns(Self::create_columns());
                table.set_empty_message(t!("students.empty").to_string());
            }
            cx.notify();
        });
        cx.notify();
    }

    /// Push the roster state into the table and pagination
    fn sync(&mut self, cx: &mut Context<Self>) {
        let (rows, sort, props, loading) = {
            let state = self.entities.students.read(cx);
            (
                state.page_rows(),
                state.sort().clone(),
                state.pagination_props(),
                state.is_loading(),
            )
        };

        self.table.update(cx, |table, cx| {
            table.set_rows(rows);
            table.set_sort(sort);
            table.set_loading(loading);
            cx.notify();
        });
        self.pagination
            .update(cx, |pagination, cx| pagination.set_props(props, cx));
        cx.notify();
    }

    fn render_presets(&self, cx: &Context<Self>) -> impl IntoElement {
        let current = self.entities.students.read(cx).search().to_string();

        div()
            .flex()
            .items_center()
            .gap_2()
            .children(SEARCH_PRESETS.iter().enumerate().map(|(i, &(key, term))| {
                let controller = self.controller.clone();
                let input = self.search_input.clone();
                Button::chip(("student-preset", i), t!(key).to_string())
                    .selected(current == term)
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        input.update(cx, |input, cx| {
                            input.set_value(term);
                            cx.notify();
                        });
                        controller.set_search(term, cx);
                    })
            }))
    }
}

/// Card shown for each student on narrow windows
fn render_student_card(student: &Student) -> AnyElement {
    div()
        .flex()
        .flex_col()
        .gap_1()
        .child(
            div()
                .text_base()
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .text_color(CampusColors::text_primary())
                .child(student.name.clone()),
        )
        .child(
            div()
                .flex()
                .gap_2()
                .text_sm()
                .text_color(CampusColors::text_secondary())
                .child(student.grade.clone())
                .child("·")
                .child(student.class_label()),
        )
        .child(
            div()
                .text_xs()
                .text_color(CampusColors::text_muted())
                .child(format_naive_date(&student.enrolled_on)),
        )
        .into_any_element()
}

impl Render for StudentsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let total = self.entities.students.read(cx).total_items();

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
                            .text_xl()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(t!("students.title", count = total).to_string()),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_wrap()
                            .items_center()
                            .gap_3()
                            .child(self.search_input.clone())
                            .child(self.render_presets(cx)),
                    ),
            )
            // Table
            .child(div().flex_1().overflow_hidden().child(self.table.clone()))
            .child(Pagination::cached_view(&self.pagination))
    }
}
