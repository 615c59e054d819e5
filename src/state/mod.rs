//! Application state
//!
//! Plain state types held in gpui entities. None of them touch rendering
//! APIs, so every transition is testable without a window.

pub mod catalog_state;
pub mod log_state;
pub mod selection_state;
