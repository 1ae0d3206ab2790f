//! Telemetry Module for pattern streams
//!
//! Streams report their state transitions as structured JSON log lines
//! through the `log` facade. The host harness decides where they go by
//! installing whatever logger it likes.

use log::{debug, log_enabled, warn, Level};
use serde::Serialize;

/// Stream event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamEventType {
    /// Size reconfigured and cursor rewound
    Reset,
    /// Cursor reached the declared size
    Exhausted,
    /// Seek refused (negative target or unknown whence)
    SeekRejected,
}

/// Stream event for logging
#[derive(Debug, Clone, Serialize)]
pub struct StreamEvent {
    pub event_type: StreamEventType,
    /// Declared logical size at the time of the event
    pub size: i64,
    /// Cursor position at the time of the event
    pub position: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whence: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl StreamEvent {
    /// Create a new stream event
    pub fn new(event_type: StreamEventType, size: i64, position: i64) -> Self {
        Self {
            event_type,
            size,
            position,
            offset: None,
            whence: None,
            reason: None,
        }
    }

    /// Set seek offset
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set raw whence value
    pub fn with_whence(mut self, whence: i32) -> Self {
        self.whence = Some(whence);
        self
    }

    /// Set reason
    pub fn with_reason(mut self, reason: &str) -> Self {
        self.reason = Some(reason.to_string());
        self
    }

    /// Level the event is logged at
    pub fn level(&self) -> Level {
        match self.event_type {
            StreamEventType::SeekRejected => Level::Warn,
            _ => Level::Debug,
        }
    }

    /// Log the event
    pub fn emit(&self) {
        match serde_json::to_string(self) {
            Ok(json) => match self.level() {
                Level::Warn => warn!("[PATTERN-STREAM] {}", json),
                _ => debug!("[PATTERN-STREAM] {}", json),
            },
            Err(e) => {
                warn!("Failed to serialize stream event: {}", e);
            }
        }
    }
}

/// Build and emit an event only when its level is enabled
///
/// Keeps JSON serialization off the read path when nobody listens.
pub fn emit_with<F>(level: Level, build: F)
where
    F: FnOnce() -> StreamEvent,
{
    if log_enabled!(level) {
        build().emit();
    }
}
