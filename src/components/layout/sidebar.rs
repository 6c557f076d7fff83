//! Sidebar Component
//!
//! Navigation sidebar with page links and the view preferences.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};
use rust_i18n::t;

use crate::app::entities::{AppEntities, switch_locale, update_settings_and_save};
use crate::app::navigation::ActivePage;
use crate::components::primitives::button::Button;
use crate::constants::SIDEBAR_WIDTH;
use crate::state::view_settings::{SUPPORTED_LOCALES, locale_name};
use crate::theme::colors::CampusColors;

/// Sidebar component
pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.navigation, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.settings, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_item(&self, page: ActivePage, active_page: ActivePage) -> impl IntoElement {
        let is_active = page == active_page;
        let entities = self.entities.clone();

        let (bg_color, text_color) = if is_active {
            (CampusColors::sidebar_active(), CampusColors::text_light())
        } else {
            (CampusColors::sidebar_bg(), CampusColors::text_muted())
        };

        div()
            .id(SharedString::from(format!("nav-{:?}", page)))
            .w_full()
            .px_4()
            .py_2()
            .bg(bg_color)
            .text_color(text_color)
            .text_size(px(14.0))
            .cursor_pointer()
            .hover(|s| s.text_color(CampusColors::text_light()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.navigation.update(cx, |nav, cx| {
                    if nav.set_active_page(page) {
                        tracing::debug!(?page, "Navigated");
                        cx.notify();
                    }
                });
            })
            .child(t!(page.title_key()).to_string())
    }
}

impl Sidebar {
    fn render_preferences(&self, cx: &Context<Self>) -> impl IntoElement {
        let (card_layout, current) = {
            let settings = self.entities.settings.read(cx);
            (settings.card_layout(), settings.locale().to_string())
        };
        let entities = self.entities.clone();

        div()
            .mt_auto()
            .px_4()
            .pb_4()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .text_xs()
                    .text_color(CampusColors::text_muted())
                    .child(t!("settings.language").to_string()),
            )
            .child(
                div()
                    .flex()
                    .gap_2()
                    .children(SUPPORTED_LOCALES.iter().enumerate().map(|(i, &code)| {
                        let entities = self.entities.clone();
                        Button::chip(("locale", i), locale_name(code))
                            .selected(current == code)
                            .on_click(move |_event: &ClickEvent, window, cx| {
                                switch_locale(&entities, code, window, cx);
                            })
                    })),
            )
            .child(
                Button::chip("card-layout", t!("settings.card_layout").to_string())
                    .selected(card_layout)
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        update_settings_and_save(
                            &entities,
                            "toggle_card_layout",
                            |settings| settings.set_card_layout(!card_layout),
                            cx,
                        );
                    }),
            )
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.navigation.read(cx).active_page;

        div()
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .flex_none()
            .bg(CampusColors::sidebar_bg())
            .flex()
            .flex_col()
            .pt_4()
            .gap_1()
            .child(
                div()
                    .px_4()
                    .pb_4()
                    .text_lg()
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(CampusColors::text_light())
                    .child(t!("app.title").to_string()),
            )
            .children(
                ActivePage::all()
                    .iter()
                    .map(|page| self.render_nav_item(*page, active_page)),
            )
            .child(self.render_preferences(cx))
    }
}
