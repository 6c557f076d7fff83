//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::CampusColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled indigo button
    #[default]
    Primary,
    /// Outlined white button
    Secondary,
    /// Rounded filter chip
    Chip,
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    selected: bool,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            selected: false,
            disabled: false,
            on_click: None,
        }
    }

    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    pub fn chip(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Chip)
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Highlight as the active choice of a group
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg) = match (self.variant, self.selected) {
            (ButtonVariant::Primary, _) | (_, true) => (
                CampusColors::accent(),
                CampusColors::text_light(),
                CampusColors::sidebar_active(),
            ),
            (ButtonVariant::Secondary, false) | (ButtonVariant::Chip, false) => (
                CampusColors::content_bg(),
                CampusColors::text_primary(),
                CampusColors::table_row_hover(),
            ),
        };

        let mut element = div()
            .id(self.id)
            .px(px(14.0))
            .py(px(6.0))
            .bg(bg_color)
            .text_color(text_color)
            .text_size(px(13.0))
            .border_1()
            .border_color(CampusColors::border())
            .cursor_pointer()
            .child(self.label);

        element = match self.variant {
            ButtonVariant::Chip => element.rounded_full(),
            _ => element.rounded_md(),
        };

        if self.disabled {
            return element.opacity(0.5).cursor_default();
        }

        element = element.hover(|s| s.bg(hover_bg));
        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }
        element
    }
}
