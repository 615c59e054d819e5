//! Feature modules

pub mod artworks;
