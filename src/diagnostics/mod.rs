// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording notification activity.
//!
//! Managers report lifecycle transitions (shown, dismissed, expired,
//! evicted, swept, cleared) and warning/error toasts through a cheap,
//! non-blocking [`DiagnosticsHandle`]. The [`DiagnosticsCollector`] keeps the
//! most recent events in a memory-bounded circular buffer and can export
//! them as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event payload
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticReport, DiagnosticsCollector, DiagnosticsHandle, SerializableEvent};
pub use events::{DiagnosticEvent, DiagnosticEventKind, NotificationEvent};
