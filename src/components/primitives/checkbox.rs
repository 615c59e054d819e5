//! Checkbox Component

use gpui::{
    div, px, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::UiColors;

/// A checkbox component
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    /// Create a new checkbox
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            on_change: None,
        }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the change handler; it receives the new checked state
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let checked = self.checked;
        let on_change = self.on_change;

        let (box_bg, border_color) = if checked {
            (UiColors::accent(), UiColors::accent())
        } else {
            (UiColors::input_bg(), UiColors::input_border())
        };

        let check_mark = if checked { "✓" } else { "" };

        let mut checkbox = div()
            .id(self.id)
            .flex()
            .items_center()
            .cursor_pointer()
            .child(
                div()
                    .size(px(18.0))
                    .rounded_sm()
                    .border_1()
                    .border_color(border_color)
                    .bg(box_bg)
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(UiColors::text_light())
                    .text_size(px(12.0))
                    .child(check_mark),
            );

        if let Some(handler) = on_change {
            checkbox = checkbox.on_click(move |_event, window, cx| {
                handler(!checked, window, cx);
            });
        }

        checkbox
    }
}
