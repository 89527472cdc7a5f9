// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` request builder, the `Kind` enum,
//! and the `ActiveNotification` record the manager keeps for each toast
//! currently on screen.

use super::timers::TimerToken;
use crate::config::defaults::{
    DEFAULT_CELEBRATION_DURATION_MS, DEFAULT_ERROR_DURATION_MS, DEFAULT_INFO_DURATION_MS,
    DEFAULT_LOVE_DURATION_MS, DEFAULT_MAGIC_DURATION_MS, DEFAULT_SUCCESS_DURATION_MS,
    DEFAULT_WARNING_DURATION_MS,
};
use crate::domain::notifications::DisplayDuration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
///
/// Identifiers come from a process-wide counter and are never reused, even
/// across independent managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Kind determines the default display duration and the visual accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Operation completed successfully.
    #[default]
    Success,
    /// Something failed and needs attention.
    Error,
    /// Non-blocking problem.
    Warning,
    /// Neutral information.
    Info,
    /// Affectionate thank-you (guestbook, well-wishes).
    Love,
    /// Big moments (RSVP confirmed, countdown milestones).
    Celebration,
    /// Playful surprises (song suggestions, easter eggs).
    Magic,
}

impl Kind {
    /// Every kind, in display order.
    pub const ALL: [Kind; 7] = [
        Kind::Success,
        Kind::Error,
        Kind::Warning,
        Kind::Info,
        Kind::Love,
        Kind::Celebration,
        Kind::Magic,
    ];

    /// Returns the built-in auto-dismiss duration for this kind.
    #[must_use]
    pub fn default_duration(self) -> DisplayDuration {
        let millis = match self {
            Kind::Success => DEFAULT_SUCCESS_DURATION_MS,
            Kind::Error => DEFAULT_ERROR_DURATION_MS,
            Kind::Warning => DEFAULT_WARNING_DURATION_MS,
            Kind::Info => DEFAULT_INFO_DURATION_MS,
            Kind::Love => DEFAULT_LOVE_DURATION_MS,
            Kind::Celebration => DEFAULT_CELEBRATION_DURATION_MS,
            Kind::Magic => DEFAULT_MAGIC_DURATION_MS,
        };
        DisplayDuration::from_millis(millis)
    }

    /// Returns the lowercase name used in logs and configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Info => "info",
            Kind::Love => "love",
            Kind::Celebration => "celebration",
            Kind::Magic => "magic",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notification to be displayed to the user.
///
/// This is the request handed to [`Manager::push`](super::Manager::push);
/// the manager assigns the id and creation time when it accepts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    kind: Kind,
    title: Option<String>,
    message: String,
    /// Overrides the kind's default duration when set.
    duration: Option<DisplayDuration>,
}

impl Notification {
    /// Creates a new notification with the given kind and message.
    pub fn new(kind: Kind, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: None,
            message: message.into(),
            duration: None,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Kind::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Kind::Error, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Kind::Warning, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Kind::Info, message)
    }

    /// Creates a love notification.
    pub fn love(message: impl Into<String>) -> Self {
        Self::new(Kind::Love, message)
    }

    /// Creates a celebration notification.
    pub fn celebration(message: impl Into<String>) -> Self {
        Self::new(Kind::Celebration, message)
    }

    /// Creates a magic notification.
    pub fn magic(message: impl Into<String>) -> Self {
        Self::new(Kind::Magic, message)
    }

    /// Sets a short title shown above the message.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a custom auto-dismiss duration, overriding the kind default.
    ///
    /// `Duration::ZERO` makes the notification persistent.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.duration = Some(DisplayDuration::new(duration));
        self
    }

    /// Makes the notification persistent: it stays until dismissed.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.duration = Some(DisplayDuration::PERSISTENT);
        self
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the duration override, if any.
    #[must_use]
    pub fn duration_override(&self) -> Option<DisplayDuration> {
        self.duration
    }
}

/// Countdown state of an active notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Countdown {
    /// Zero duration: never auto-dismissed.
    Persistent,
    /// Counting down since `since`, with `remaining` left at that instant.
    Running {
        since: Instant,
        remaining: Duration,
        timer: TimerToken,
    },
    /// Frozen (pointer hovering).
    Paused { remaining: Duration },
}

/// A notification the manager has accepted and is currently displaying.
#[derive(Debug, Clone)]
pub struct ActiveNotification {
    id: NotificationId,
    notification: Notification,
    duration: DisplayDuration,
    created_at: Instant,
    pub(crate) countdown: Countdown,
}

impl ActiveNotification {
    pub(crate) fn new(
        id: NotificationId,
        notification: Notification,
        duration: DisplayDuration,
        created_at: Instant,
        countdown: Countdown,
    ) -> Self {
        Self {
            id,
            notification,
            duration,
            created_at,
            countdown,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.notification.kind()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.notification.title()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        self.notification.message()
    }

    /// Returns the resolved display duration.
    #[must_use]
    pub fn duration(&self) -> DisplayDuration {
        self.duration
    }

    /// Returns when the manager accepted this notification.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this notification at `now`.
    #[must_use]
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        matches!(self.countdown, Countdown::Persistent)
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        matches!(self.countdown, Countdown::Paused { .. })
    }

    /// Returns the time left before auto-dismiss, or `None` if persistent.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.countdown {
            Countdown::Persistent => None,
            Countdown::Running {
                since, remaining, ..
            } => Some(remaining.saturating_sub(now.saturating_duration_since(since))),
            Countdown::Paused { remaining } => Some(remaining),
        }
    }

    /// Returns `remaining / duration` in `0.0..=1.0`, or `None` if persistent.
    #[must_use]
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let remaining = self.remaining(now)?;
        let total = self.duration.value();
        if total.is_zero() {
            return None;
        }
        Some((remaining.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0))
    }

    pub(crate) fn timer(&self) -> Option<TimerToken> {
        match self.countdown {
            Countdown::Running { timer, .. } => Some(timer),
            Countdown::Persistent | Countdown::Paused { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let a = NotificationId::next();
        let b = NotificationId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn error_duration_is_longer_than_info() {
        assert!(Kind::Error.default_duration().value() > Kind::Info.default_duration().value());
    }

    #[test]
    fn no_kind_is_persistent_by_default() {
        for kind in Kind::ALL {
            assert!(!kind.default_duration().is_persistent(), "{kind}");
        }
    }

    #[test]
    fn notification_builder_pattern_works() {
        let notification = Notification::love("Thanks for signing!")
            .with_title("Thank you!")
            .auto_dismiss(Duration::from_millis(5_000));

        assert_eq!(notification.kind(), Kind::Love);
        assert_eq!(notification.title(), Some("Thank you!"));
        assert_eq!(notification.message(), "Thanks for signing!");
        assert_eq!(
            notification.duration_override(),
            Some(DisplayDuration::from_millis(5_000))
        );
    }

    #[test]
    fn zero_auto_dismiss_means_persistent() {
        let notification = Notification::info("stay").auto_dismiss(Duration::ZERO);
        assert_eq!(
            notification.duration_override(),
            Some(DisplayDuration::PERSISTENT)
        );
        assert_eq!(notification, Notification::info("stay").persistent());
    }

    #[test]
    fn notification_constructors_set_correct_kind() {
        assert_eq!(Notification::success("").kind(), Kind::Success);
        assert_eq!(Notification::error("").kind(), Kind::Error);
        assert_eq!(Notification::warning("").kind(), Kind::Warning);
        assert_eq!(Notification::info("").kind(), Kind::Info);
        assert_eq!(Notification::love("").kind(), Kind::Love);
        assert_eq!(Notification::celebration("").kind(), Kind::Celebration);
        assert_eq!(Notification::magic("").kind(), Kind::Magic);
    }

    #[test]
    fn paused_countdown_reports_frozen_remaining() {
        let now = Instant::now();
        let active = ActiveNotification::new(
            NotificationId::next(),
            Notification::info("x"),
            DisplayDuration::from_millis(4_000),
            now,
            Countdown::Paused {
                remaining: Duration::from_millis(1_000),
            },
        );

        let later = now + Duration::from_secs(10);
        assert_eq!(active.remaining(later), Some(Duration::from_millis(1_000)));
        assert!(active.is_paused());
        assert!(active.timer().is_none());
    }

    #[test]
    fn persistent_has_no_progress() {
        let now = Instant::now();
        let active = ActiveNotification::new(
            NotificationId::next(),
            Notification::warning("offline").persistent(),
            DisplayDuration::PERSISTENT,
            now,
            Countdown::Persistent,
        );
        assert!(active.remaining(now).is_none());
        assert!(active.progress(now).is_none());
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&Kind::Celebration).expect("serialize kind");
        assert_eq!(json, "\"celebration\"");
    }
}
