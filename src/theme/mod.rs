//! Theme

pub mod colors;
