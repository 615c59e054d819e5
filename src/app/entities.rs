//! AppEntities - Shared State Entities
//!
//! The state entities every view observes. Cloning is cheap; all clones
//! point at the same underlying entities.

use gpui::{App, AppContext, Entity};

use crate::state::catalog_state::CatalogState;
use crate::state::log_state::LogState;
use crate::state::selection_state::SelectionState;

/// Shared application state entities
#[derive(Clone)]
pub struct AppEntities {
    pub catalog: Entity<CatalogState>,
    pub selection: Entity<SelectionState>,
    pub logs: Entity<LogState>,
}

impl AppEntities {
    /// Create all state entities
    pub fn init(page_size: u64, cx: &mut App) -> Self {
        Self {
            catalog: cx.new(|_| CatalogState::new(page_size)),
            selection: cx.new(|_| SelectionState::default()),
            logs: cx.new(|_| LogState::default()),
        }
    }
}
