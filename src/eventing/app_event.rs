//! AppEvent - Application Event Enum
//!
//! All events that can be sent from the catalog service to the UI layer.
//! Payloads are fully typed: a selection-change event carries the complete
//! new record collection, never a delta.

use chrono::{DateTime, Local};

use crate::domain::artwork::Artwork;
use crate::state::log_state::LogLevel;

/// Application events for service -> UI communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Log message
    Log {
        level: LogLevel,
        message: String,
        timestamp: DateTime<Local>,
    },

    /// A catalog page finished loading
    PageLoaded {
        generation: u64,
        artworks: Vec<Artwork>,
        total: u64,
    },

    /// A catalog page fetch failed
    PageFailed { generation: u64, message: String },

    /// The cross-page auto-select sequence finished
    SelectionComplete { artworks: Vec<Artwork> },

    /// The auto-select sequence aborted on a fetch error
    SelectionFailed { message: String },
}

impl AppEvent {
    /// Create a log event with current timestamp
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// Create an info log event
    pub fn info(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Info, message)
    }

    /// Create a warning log event
    pub fn warn(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Warn, message)
    }

    /// Create an error log event
    pub fn error(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Error, message)
    }

    /// Create a debug log event
    pub fn debug(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Debug, message)
    }
}
