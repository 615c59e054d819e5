//! Artworks Controller
//!
//! Mediates between the artworks page and the catalog service. Every user
//! intent is a method here: the page never mutates state or talks to the
//! hub directly.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::artwork::Artwork;
use crate::eventing::app_event::AppEvent;
use crate::services::hub::{CatalogCommand, CatalogHub};

/// Controller for the artworks page
#[derive(Clone)]
pub struct ArtworksController {
    entities: AppEntities,
}

impl ArtworksController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Load the page window starting at `offset`. Marks the catalog as
    /// loading and queues the fetch; the response comes back through the
    /// event pump tagged with the returned generation.
    pub fn load_offset(&self, offset: u64, cx: &mut App) {
        let (generation, page, limit) = self.entities.catalog.update(cx, |catalog, cx| {
            let page_size = catalog.page_size();
            let generation = catalog.begin_fetch(offset, page_size);
            cx.notify();
            (generation, catalog.page_number(), page_size)
        });

        tracing::debug!("requesting page {page} (generation {generation})");
        cx.global::<CatalogHub>().send(CatalogCommand::LoadPage {
            generation,
            page,
            limit,
        });
    }

    /// Navigate to a 1-based page number
    pub fn goto_page(&self, page: u64, cx: &mut App) {
        let page_size = self.entities.catalog.read(cx).page_size();
        self.load_offset(page.saturating_sub(1) * page_size, cx);
    }

    /// Replace the selection with the checked rows reported by the table
    pub fn set_manual_selection(&self, artworks: Vec<Artwork>, cx: &mut App) {
        self.entities.selection.update(cx, |selection, cx| {
            selection.replace(artworks);
            cx.notify();
        });
    }

    /// Toggle the auto-select overlay panel
    pub fn toggle_panel(&self, cx: &mut App) {
        self.entities.selection.update(cx, |selection, cx| {
            selection.toggle_panel();
            cx.notify();
        });
    }

    /// Record the raw text of the requested-count input
    pub fn set_count_input(&self, value: &str, cx: &mut App) {
        self.entities.selection.update(cx, |selection, cx| {
            selection.set_count_input(value);
            cx.notify();
        });
    }

    /// Start the cross-page auto-select sequence for the requested count.
    /// Ignored while a previous sequence is still running; an empty or
    /// non-positive count only logs a warning.
    pub fn request_auto_select(&self, cx: &mut App) {
        let count = self.entities.selection.update(cx, |selection, cx| {
            if selection.selecting() {
                return None;
            }
            let count = selection.requested_count()?;
            selection.set_selecting(true);
            cx.notify();
            Some(count)
        });

        let Some(count) = count else {
            let selection = self.entities.selection.read(cx);
            if !selection.selecting() {
                cx.global::<CatalogHub>().log(AppEvent::warn(format!(
                    "Invalid row count {:?}",
                    selection.count_input()
                )));
            }
            return;
        };

        let catalog = self.entities.catalog.read(cx);
        let command = CatalogCommand::SelectFirstN {
            count,
            loaded: catalog.rows().to_vec(),
            current_page: catalog.page_number(),
            page_size: catalog.page_size(),
        };

        tracing::info!("auto-selecting first {count} rows");
        cx.global::<CatalogHub>().send(command);
    }
}
