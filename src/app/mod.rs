//! Application modules

pub mod application;
pub mod entities;
pub mod workspace;
