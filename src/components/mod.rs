//! Reusable UI components

pub mod composite;
pub mod layout;
pub mod primitives;
