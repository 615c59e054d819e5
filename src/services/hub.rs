//! Catalog Hub
//!
//! Owns the background worker that talks to the catalog API. The UI sends
//! typed commands over a flume channel; results come back as `AppEvent`s
//! through the workspace event pump. Commands are handled one at a time, so
//! the auto-select page walk is strictly sequential and never fans out.

use gpui::Global;

use crate::domain::artwork::Artwork;
use crate::domain::config::AppConfig;
use crate::error::Result;
use crate::eventing::app_event::AppEvent;
use crate::services::catalog_client::CatalogClient;
use crate::services::runtime::spawn_in_tokio;
use crate::services::selection::select_first_n;

/// Commands the UI can issue against the catalog
#[derive(Debug, Clone)]
pub enum CatalogCommand {
    /// Load one page of the catalog. `generation` tags the response so the
    /// state layer can discard it when a newer request has been issued.
    LoadPage {
        generation: u64,
        page: u64,
        limit: u64,
    },

    /// Materialize the first `count` catalog rows, seeded with the rows
    /// already loaded for `current_page` and walking pages forward as
    /// needed.
    SelectFirstN {
        count: usize,
        loaded: Vec<Artwork>,
        current_page: u64,
        page_size: u64,
    },
}

/// Handle to the catalog worker, stored as a gpui global
pub struct CatalogHub {
    command_tx: flume::Sender<CatalogCommand>,
    event_tx: flume::Sender<AppEvent>,
}

impl Global for CatalogHub {}

impl CatalogHub {
    /// Create the hub and start its worker on the shared tokio runtime
    pub fn new(config: &AppConfig, event_tx: flume::Sender<AppEvent>) -> Result<Self> {
        let client = CatalogClient::new(&config.api)?;
        let (command_tx, command_rx) = flume::unbounded::<CatalogCommand>();

        let worker_tx = event_tx.clone();
        spawn_in_tokio(async move {
            while let Ok(command) = command_rx.recv_async().await {
                handle_command(&client, &worker_tx, command).await;
            }
        });

        Ok(Self {
            command_tx,
            event_tx,
        })
    }

    /// Queue a command for the worker
    pub fn send(&self, command: CatalogCommand) {
        let _ = self.command_tx.send(command);
    }

    /// Send a log event to the UI
    pub fn log(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}

async fn handle_command(
    client: &CatalogClient,
    events: &flume::Sender<AppEvent>,
    command: CatalogCommand,
) {
    match command {
        CatalogCommand::LoadPage {
            generation,
            page,
            limit,
        } => match client.fetch_page(page, limit).await {
            Ok(fetched) => {
                let _ = events.send(AppEvent::debug(format!(
                    "Loaded page {page} ({} rows)",
                    fetched.data.len()
                )));
                let _ = events.send(AppEvent::PageLoaded {
                    generation,
                    artworks: fetched.data,
                    total: fetched.pagination.total,
                });
            }
            Err(e) => {
                tracing::warn!("page {page} fetch failed: {e}");
                let _ = events.send(AppEvent::error(format!("Page {page} fetch failed: {e}")));
                let _ = events.send(AppEvent::PageFailed {
                    generation,
                    message: e.to_string(),
                });
            }
        },

        CatalogCommand::SelectFirstN {
            count,
            loaded,
            current_page,
            page_size,
        } => match select_first_n(client, &loaded, current_page, page_size, count).await {
            Ok(selected) => {
                let _ = events.send(AppEvent::info(format!(
                    "Auto-selected first {} rows",
                    selected.len()
                )));
                let _ = events.send(AppEvent::SelectionComplete { artworks: selected });
            }
            Err(e) => {
                tracing::warn!("auto-select aborted: {e}");
                let _ = events.send(AppEvent::error(format!("Auto-select aborted: {e}")));
                let _ = events.send(AppEvent::SelectionFailed {
                    message: e.to_string(),
                });
            }
        },
    }
}
