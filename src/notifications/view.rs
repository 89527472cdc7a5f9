// SPDX-License-Identifier: MPL-2.0
//! Owned render snapshots of active notifications.
//!
//! A rendering layer polls [`Manager::revision`](super::Manager::revision)
//! and, when it changed (or on every frame while progress bars animate),
//! rebuilds its widgets from [`Manager::views`](super::Manager::views).

use super::notification::{ActiveNotification, Kind, NotificationId};
use std::time::{Duration, Instant};

/// Everything a renderer needs to draw one toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastView {
    pub id: NotificationId,
    pub kind: Kind,
    pub title: Option<String>,
    pub message: String,
    /// Full display duration; zero for persistent toasts.
    pub duration: Duration,
    /// Time left before auto-dismiss; `None` for persistent toasts.
    pub remaining: Option<Duration>,
    pub paused: bool,
    /// `remaining / duration`, `None` for persistent toasts.
    pub progress: Option<f32>,
}

impl ToastView {
    pub(crate) fn capture(notification: &ActiveNotification, now: Instant) -> Self {
        Self {
            id: notification.id(),
            kind: notification.kind(),
            title: notification.title().map(str::to_owned),
            message: notification.message().to_owned(),
            duration: notification.duration().value(),
            remaining: notification.remaining(now),
            paused: notification.is_paused(),
            progress: notification.progress(now),
        }
    }

    /// Returns true if this toast shows a progress indicator.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.progress.is_some()
    }
}
