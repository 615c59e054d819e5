//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::UiColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (dark)
    #[default]
    Primary,
    /// Secondary button (gray)
    Secondary,
    /// Ghost button (transparent)
    Ghost,
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    disabled: bool,
    loading: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            disabled: false,
            loading: false,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether the button is loading
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                UiColors::button_primary_bg(),
                UiColors::button_primary_text(),
                gpui::rgba(0x374151ff),
            ),
            ButtonVariant::Secondary => (
                gpui::rgba(0xe5e7ebff),
                UiColors::text_primary(),
                gpui::rgba(0xd1d5dbff),
            ),
            ButtonVariant::Ghost => (
                gpui::rgba(0x00000000),
                UiColors::button_ghost_text(),
                gpui::rgba(0xf3f4f6ff),
            ),
        };

        let opacity = if self.disabled || self.loading {
            0.5
        } else {
            1.0
        };

        let label = if self.loading {
            "Loading...".into()
        } else {
            self.label
        };

        let mut element = div()
            .id(self.id)
            .px(px(16.0))
            .py(px(8.0))
            .bg(bg_color)
            .text_color(text_color)
            .text_size(px(14.0))
            .rounded_md()
            .cursor_pointer()
            .opacity(opacity)
            .child(label);

        if !self.disabled && !self.loading {
            element = element.hover(|s| s.bg(hover_bg));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
