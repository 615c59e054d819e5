//! Composite components

pub mod data_table;
pub mod overlay_panel;
