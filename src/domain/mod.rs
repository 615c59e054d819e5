//! Domain models

pub mod artwork;
pub mod config;
