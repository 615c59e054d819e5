//! Pagination Component
//!
//! Page navigation footer for the DataTable. Emits the 1-based target page
//! through `on_page_change`.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::UiColors;
use crate::utils::format::format_number;

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    current_page: u64,
    total_pages: u64,
    total_items: u64,
    items_label: SharedString,
    on_page_change: Option<Rc<dyn Fn(u64, &mut App) + 'static>>,
}

impl Pagination {
    /// Create a new pagination component
    pub fn new(current_page: u64, total_pages: u64, total_items: u64) -> Self {
        Self {
            current_page,
            total_pages,
            total_items,
            items_label: "items".into(),
            on_page_change: None,
        }
    }

    /// Set the items label
    pub fn items_label(mut self, label: impl Into<SharedString>) -> Self {
        self.items_label = label.into();
        self
    }

    /// Set the page change handler
    pub fn on_page_change(mut self, handler: impl Fn(u64, &mut App) + 'static) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    fn nav_button(
        id: &'static str,
        label: &'static str,
        enabled: bool,
        target: u64,
        handler: Option<Rc<dyn Fn(u64, &mut App) + 'static>>,
    ) -> impl IntoElement {
        let mut button = div()
            .id(id)
            .px_2()
            .py_1()
            .rounded_sm()
            .text_sm()
            .text_color(if enabled {
                UiColors::text_primary()
            } else {
                UiColors::text_muted()
            })
            .child(label);

        if enabled {
            button = button
                .cursor_pointer()
                .hover(|s| s.bg(UiColors::table_row_hover()));

            if let Some(handler) = handler {
                button = button.on_click(move |_event: &ClickEvent, _window, cx| {
                    handler(target, cx);
                });
            }
        }

        button
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let current = self.current_page.max(1);
        let total = self.total_pages.max(1);
        let can_prev = current > 1;
        let can_next = current < total;

        div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(UiColors::border())
            // Item count
            .child(
                div()
                    .text_sm()
                    .text_color(UiColors::text_secondary())
                    .child(format!(
                        "{} {}",
                        format_number(self.total_items),
                        self.items_label
                    )),
            )
            // Page navigation
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(Self::nav_button(
                        "prev-page",
                        "←",
                        can_prev,
                        current.saturating_sub(1),
                        self.on_page_change.clone(),
                    ))
                    .child(
                        div()
                            .text_sm()
                            .text_color(UiColors::text_primary())
                            .child(format!("{current} / {total}")),
                    )
                    .child(Self::nav_button(
                        "next-page",
                        "→",
                        can_next,
                        current + 1,
                        self.on_page_change,
                    )),
            )
    }
}
