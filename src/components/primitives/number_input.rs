//! NumberInput Component
//!
//! A minimal numeric input: digits and backspace only. Click to focus.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, ElementId, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::UiColors;

const MAX_DIGITS: usize = 6;

/// A numeric text input component
pub struct NumberInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    focus_handle: FocusHandle,
    on_change: Option<Box<dyn Fn(&str, &mut Context<Self>) + 'static>>,
}

impl NumberInput {
    /// Create a new number input
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            focus_handle: cx.focus_handle(),
            on_change: None,
        }
    }

    /// Set the value without firing the change handler
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Get the value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    /// Set the change handler
    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Context<Self>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    fn handle_key(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let key = event.keystroke.key.as_str();
        match key {
            "backspace" => {
                if self.value.pop().is_none() {
                    return;
                }
            }
            digit
                if digit.len() == 1 && digit.chars().all(|c| c.is_ascii_digit()) =>
            {
                if self.value.len() >= MAX_DIGITS {
                    return;
                }
                self.value.push_str(digit);
            }
            _ => return,
        }

        if let Some(ref handler) = self.on_change {
            handler(&self.value, cx);
        }
        cx.notify();
    }
}

impl Focusable for NumberInput {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for NumberInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if is_focused {
            UiColors::border_focus()
        } else {
            UiColors::input_border()
        };

        let display_text = if self.value.is_empty() {
            self.placeholder.clone()
        } else {
            SharedString::from(self.value.clone())
        };

        let text_color = if self.value.is_empty() {
            UiColors::input_placeholder()
        } else {
            UiColors::text_primary()
        };

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_click(cx.listener(|this, _event: &ClickEvent, window, _cx| {
                window.focus(&this.focus_handle);
            }))
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                this.handle_key(event, cx);
            }))
            .px_3()
            .py_2()
            .bg(UiColors::input_bg())
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(160.0))
            .cursor_pointer()
            .child(display_text)
    }
}
