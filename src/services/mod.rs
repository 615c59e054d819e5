//! Background services
//!
//! The catalog client and the worker that runs it, bridged to the gpui
//! side over flume channels.

pub mod catalog_client;
pub mod hub;
pub mod runtime;
pub mod selection;

pub use catalog_client::CatalogClient;
pub use hub::{CatalogCommand, CatalogHub};
pub use selection::{select_first_n, PageFetcher};
