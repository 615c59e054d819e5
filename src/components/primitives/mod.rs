//! Primitive components

pub mod button;
pub mod checkbox;
pub mod number_input;
