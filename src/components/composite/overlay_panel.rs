//! OverlayPanel Component
//!
//! A floating panel anchored below its (relative-positioned) parent. The
//! panel itself is stateless; whether it is shown is an explicit boolean in
//! application state, toggled by events.

use gpui::{div, prelude::*, px, AnyElement, App, IntoElement, ParentElement, RenderOnce, Styled, Window};

use crate::theme::colors::UiColors;

/// Floating overlay panel
#[derive(IntoElement)]
pub struct OverlayPanel {
    width: f32,
    children: Vec<AnyElement>,
}

impl OverlayPanel {
    /// Create a new overlay panel
    pub fn new() -> Self {
        Self {
            width: 240.0,
            children: Vec::new(),
        }
    }

    /// Set the panel width in pixels
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Add a child element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl Default for OverlayPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for OverlayPanel {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .absolute()
            .top(px(44.0))
            .right_0()
            .w(px(self.width))
            .bg(UiColors::content_bg())
            .border_1()
            .border_color(UiColors::border())
            .rounded_lg()
            .shadow_lg()
            .p_4()
            .flex()
            .flex_col()
            .gap_3()
            .children(self.children)
    }
}
