//! Header Component
//!
//! The application header with logo, title and catalog status.

use gpui::{
    div, px, Context, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::theme::colors::UiColors;
use crate::utils::format::format_number;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Repaint when the catalog or the selection changes
        cx.observe(&entities.catalog, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.selection, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let catalog = self.entities.catalog.read(cx);
        let selected = self.entities.selection.read(cx).len();

        let status = if catalog.loading() {
            "Loading...".to_string()
        } else {
            format!("{} artworks", format_number(catalog.total()))
        };

        div()
            .h(px(48.0))
            .w_full()
            .bg(UiColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: logo and title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(32.0))
                            .rounded_md()
                            .bg(gpui::rgba(0xffffffcc))
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(UiColors::header_bg())
                            .font_weight(gpui::FontWeight::BOLD)
                            .child("A"),
                    )
                    .child(
                        div()
                            .text_color(UiColors::text_light())
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child("Art Institute of Chicago Collection"),
                    ),
            )
            // Right side: catalog status and selection count
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(
                        div()
                            .text_color(gpui::rgba(0xffffffccu32))
                            .text_size(px(13.0))
                            .child(status),
                    )
                    .child(
                        div()
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .bg(gpui::rgba(0xffffff22))
                            .text_color(UiColors::text_light())
                            .text_size(px(13.0))
                            .child(format!("{selected} selected")),
                    ),
            )
    }
}
