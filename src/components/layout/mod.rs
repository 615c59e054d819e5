//! Layout components

pub mod header;
pub mod log_panel;
