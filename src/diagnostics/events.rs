// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for notification activity.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::notifications::{Kind, NotificationId};

/// Lifecycle transitions of a notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NotificationEvent {
    /// Accepted into the active set.
    Shown { id: NotificationId, kind: Kind },
    /// Removed by an explicit dismiss.
    Dismissed { id: NotificationId },
    /// Removed because its countdown reached zero.
    Expired { id: NotificationId },
    /// Removed to make room for a newer notification.
    Evicted { id: NotificationId, kind: Kind },
    /// Force-removed by the safety-net sweep.
    Swept { id: NotificationId, age_ms: u64 },
    /// Bulk removal.
    Cleared { count: usize },
}

/// A diagnostic event with a monotonic timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock).
    pub timestamp: Instant,
    /// The event payload.
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new event stamped with the current instant.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// Payload of a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// Notification lifecycle transition.
    Notification { event: NotificationEvent },

    /// A warning toast was shown, or the manager corrected itself.
    Warning { message: String },

    /// An error toast was shown.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_event_new_uses_current_time() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            message: "w".into(),
        });
        assert!(event.timestamp >= before);
    }

    #[test]
    fn warning_serializes_with_type_tag() {
        let warning = DiagnosticEventKind::Warning {
            message: "test warning".to_string(),
        };

        let json = serde_json::to_string(&warning).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"warning\""));
        assert!(json.contains("\"message\":\"test warning\""));
    }

    #[test]
    fn lifecycle_event_serializes_nested_tag() {
        let kind = DiagnosticEventKind::Notification {
            event: NotificationEvent::Cleared { count: 3 },
        };

        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"notification\""));
        assert!(json.contains("\"event\":\"cleared\""));
        assert!(json.contains("\"count\":3"));
    }

    #[test]
    fn error_deserializes_from_json() {
        let json = r#"{"type":"error","message":"test error"}"#;
        let event: DiagnosticEventKind =
            serde_json::from_str(json).expect("deserialization should succeed");

        assert_eq!(
            event,
            DiagnosticEventKind::Error {
                message: "test error".into()
            }
        );
    }
}
