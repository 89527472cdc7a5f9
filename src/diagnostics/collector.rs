// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! The collector receives events from notification managers through a
//! bounded channel and stores them in a circular buffer.

use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use serde::Serialize;

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, NotificationEvent};

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone. Events are sent via a bounded channel so
/// logging never blocks the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a notification lifecycle transition.
    ///
    /// Non-blocking: the event is dropped if the channel is full.
    pub fn log_notification(&self, event: NotificationEvent) {
        let _ = self.try_log(DiagnosticEventKind::Notification { event });
    }

    /// Logs a warning message. Non-blocking.
    pub fn log_warning(&self, message: impl Into<String>) {
        let _ = self.try_log(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    /// Logs an error message. Non-blocking.
    pub fn log_error(&self, message: impl Into<String>) {
        let _ = self.try_log(DiagnosticEventKind::Error {
            message: message.into(),
        });
    }

    /// Attempts to send an event, returning an error if the channel is full.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the internal channel buffer is full,
    /// or `TrySendError::Disconnected` if the collector has been dropped.
    pub fn try_log(&self, kind: DiagnosticEventKind) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<DiagnosticEvent>,
    /// Monotonic start, for relative event offsets.
    started_at: Instant,
    /// Wall-clock start, for report metadata.
    started_at_utc: DateTime<Utc>,
}

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// One event in an exported report.
#[derive(Debug, Serialize)]
pub struct SerializableEvent {
    /// Milliseconds since collection started.
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

/// Exported report.
#[derive(Debug, Serialize)]
pub struct DiagnosticReport {
    pub started_at: DateTime<Utc>,
    pub crate_version: &'static str,
    pub event_count: usize,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Instant::now(),
            started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer.
    ///
    /// Call this periodically (e.g., on each UI tick).
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Exports all stored events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    #[allow(clippy::cast_possible_truncation)] // Offsets in ms fit comfortably in u64
    fn build_report(&self) -> DiagnosticReport {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent {
                offset_ms: event
                    .timestamp
                    .saturating_duration_since(self.started_at)
                    .as_millis() as u64,
                kind: event.kind.clone(),
            })
            .collect();

        DiagnosticReport {
            started_at: self.started_at_utc,
            crate_version: env!("CARGO_PKG_VERSION"),
            event_count: events.len(),
            events,
        }
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
