//! TextInput Component
//!
//! Single-line input fed by key-down events. Every edit is reported as a
//! [`TextInputEvent::Changed`].

use gpui::{
    div, prelude::*, px, Context, ElementId, Entity, EventEmitter, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, MouseButton, MouseDownEvent, ParentElement,
    Render, SharedString, Styled, Window,
};

use crate::theme::colors::CampusColors;

/// Raised after the value changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputEvent {
    Changed(String),
}

/// An edit derived from one key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Insert(String),
    Backspace,
    Clear,
}

impl Edit {
    /// Map a key press to an edit. Shortcuts (control/command) and
    /// non-printable keys produce nothing.
    pub fn from_key(key: &str, key_char: Option<&str>, shortcut: bool) -> Option<Edit> {
        if shortcut {
            return None;
        }
        match key {
            "backspace" => Some(Edit::Backspace),
            "escape" => Some(Edit::Clear),
            "enter" | "tab" => None,
            _ => key_char
                .filter(|text| !text.is_empty() && !text.chars().any(char::is_control))
                .map(|text| Edit::Insert(text.to_string())),
        }
    }

    /// Apply to a value; returns whether the value changed
    pub fn apply(&self, value: &mut String) -> bool {
        match self {
            Edit::Insert(text) => {
                value.push_str(text);
                true
            }
            Edit::Backspace => value.pop().is_some(),
            Edit::Clear => {
                let changed = !value.is_empty();
                value.clear();
                changed
            }
        }
    }
}

/// A text input component
pub struct TextInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    focus_handle: FocusHandle,
}

impl EventEmitter<TextInputEvent> for TextInput {}

impl TextInput {
    /// Create a new text input
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            focus_handle: cx.focus_handle(),
        }
    }

    /// Set the value without raising an event
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        let shortcut = keystroke.modifiers.control || keystroke.modifiers.platform;
        let Some(edit) = Edit::from_key(&keystroke.key, keystroke.key_char.as_deref(), shortcut)
        else {
            return;
        };

        if edit.apply(&mut self.value) {
            cx.emit(TextInputEvent::Changed(self.value.clone()));
            cx.notify();
        }
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if is_focused {
            CampusColors::accent()
        } else {
            CampusColors::border()
        };

        let (display_text, text_color) = if self.value.is_empty() {
            (self.placeholder.clone(), CampusColors::text_muted())
        } else {
            (
                SharedString::from(self.value.clone()),
                CampusColors::text_primary(),
            )
        };

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                this.handle_key_down(event, cx);
            }))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _event: &MouseDownEvent, window, _cx| {
                    this.focus_handle.focus(window);
                }),
            )
            .px_3()
            .py_2()
            .bg(CampusColors::content_bg())
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(220.0))
            .cursor_text()
            .child(display_text)
    }
}

/// Create a text input entity
pub fn text_input<V: 'static>(
    id: impl Into<ElementId>,
    placeholder: impl Into<SharedString>,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let id = id.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut input = TextInput::new(id, cx);
        input.set_placeholder(placeholder);
        input
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_keys(value: &mut String, keys: &[(&str, Option<&str>)]) {
        for (key, key_char) in keys {
            if let Some(edit) = Edit::from_key(key, *key_char, false) {
                edit.apply(value);
            }
        }
    }

    #[test]
    fn typing_and_backspace() {
        let mut value = String::new();
        type_keys(
            &mut value,
            &[
                ("m", Some("m")),
                ("a", Some("a")),
                ("x", Some("x")),
                ("backspace", None),
                ("space", Some(" ")),
                ("c", Some("C")),
            ],
        );
        assert_eq!(value, "ma C");
    }

    #[test]
    fn escape_clears_and_shortcuts_are_ignored() {
        let mut value = "maya".to_string();
        assert_eq!(Edit::from_key("a", Some("a"), true), None);
        assert_eq!(Edit::from_key("enter", Some("\n"), false), None);
        assert_eq!(Edit::from_key("left", None, false), None);

        assert!(Edit::Clear.apply(&mut value));
        assert!(value.is_empty());
        assert!(!Edit::Clear.apply(&mut value));
        assert!(!Edit::Backspace.apply(&mut value));
    }
}
