//! Workspace - Root Layout and Event Pump
//!
//! Composes the header, the artworks page and the log panel, and drains the
//! service event channel into state mutations on the UI thread.

use gpui::{div, prelude::*, Context, Entity, IntoElement, ParentElement, Render, Styled, Window};

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::eventing::app_event::AppEvent;
use crate::features::artworks::ArtworksPage;
use crate::theme::colors::UiColors;

/// The root workspace view
pub struct Workspace {
    header: Entity<Header>,
    page: Entity<ArtworksPage>,
    log_panel: Entity<LogPanel>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let page = cx.new(|cx| ArtworksPage::new(entities.clone(), cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));

        Self::start_event_pump(entities, event_rx, cx);

        Self {
            header,
            page,
            log_panel,
        }
    }

    /// Forward service events onto the UI thread until the channel or the
    /// app goes away
    fn start_event_pump(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let applied = cx.update(|cx| dispatch_event(&entities, event, cx));
                if applied.is_err() {
                    break;
                }
            }
        })
        .detach();
    }
}

/// Apply one service event to the state entities
fn dispatch_event(entities: &AppEntities, event: AppEvent, cx: &mut gpui::App) {
    match event {
        AppEvent::Log {
            level,
            message,
            timestamp,
        } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push(level, message, timestamp);
                cx.notify();
            });
        }

        AppEvent::PageLoaded {
            generation,
            artworks,
            total,
        } => {
            entities.catalog.update(cx, |catalog, cx| {
                if catalog.apply_page(generation, artworks, total) {
                    cx.notify();
                } else {
                    tracing::debug!("discarded stale page response (generation {generation})");
                }
            });
        }

        AppEvent::PageFailed {
            generation,
            message,
        } => {
            entities.catalog.update(cx, |catalog, cx| {
                if catalog.fail_fetch(generation, message.as_str()) {
                    cx.notify();
                }
            });
        }

        AppEvent::SelectionComplete { artworks } => {
            entities.selection.update(cx, |selection, cx| {
                selection.finish_auto_select(artworks);
                cx.notify();
            });
        }

        // The sequence aborted; the previous selection stays as it was.
        AppEvent::SelectionFailed { message } => {
            tracing::warn!("auto-select failed: {message}");
            entities.selection.update(cx, |selection, cx| {
                selection.set_selecting(false);
                cx.notify();
            });
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(UiColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .min_h(gpui::px(0.0))
                    .child(self.page.clone()),
            )
            .child(self.log_panel.clone())
    }
}
