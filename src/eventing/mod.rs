//! Service → UI eventing

pub mod app_event;
