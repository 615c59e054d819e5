//! Artic GUI
//!
//! A desktop browser for the Art Institute of Chicago's public collection
//! catalog: lazily paginated artwork listing with manual and cross-page
//! automatic row selection.

pub mod app;
pub mod components;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;

pub use error::{Error, Result};
