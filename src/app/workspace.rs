//! Workspace - Main Shell with Layout
//!
//! The workspace holds the sidebar and the active page. Pages are created on
//! first visit and kept afterwards.

use gpui::{
    div, prelude::*, AnyElement, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::layout::sidebar::Sidebar;
use crate::features::materials::page::MaterialsPage;
use crate::features::students::page::StudentsPage;
use crate::theme::colors::CampusColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    sidebar: Entity<Sidebar>,
    students_page: Option<Entity<StudentsPage>>,
    materials_page: Option<Entity<MaterialsPage>>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));

        cx.observe(&entities.navigation, |_this, _, cx| {
            cx.notify();
        })
        .detach();

        Self {
            entities,
            sidebar,
            students_page: None,
            materials_page: None,
        }
    }

    /// Get or create a page view for the given page
    fn get_or_create_page(
        &mut self,
        page: ActivePage,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        match page {
            ActivePage::Students => {
                let entities = self.entities.clone();
                self.students_page
                    .get_or_insert_with(|| {
                        cx.new(|cx| StudentsPage::new(entities, window, cx))
                    })
                    .clone()
                    .into_any_element()
            }
            ActivePage::Materials => {
                let entities = self.entities.clone();
                self.materials_page
                    .get_or_insert_with(|| {
                        cx.new(|cx| MaterialsPage::new(entities, window, cx))
                    })
                    .clone()
                    .into_any_element()
            }
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.navigation.read(cx).active_page;
        let content = self.get_or_create_page(active_page, window, cx);

        div()
            .size_full()
            .flex()
            .flex_row()
            .bg(CampusColors::background())
            .child(self.sidebar.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .bg(CampusColors::background())
                    .child(content),
            )
    }
}
