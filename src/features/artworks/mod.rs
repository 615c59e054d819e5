//! Artworks Feature
//!
//! The paginated artworks browser with manual and cross-page auto
//! selection.

pub mod controller;
pub mod page;

pub use controller::ArtworksController;
pub use page::ArtworksPage;
