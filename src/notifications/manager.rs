// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the active notifications, their auto-dismiss timers
//! and the safety-net sweep. All operations run to completion on the
//! caller's thread; time only advances through [`Manager::tick`].
//!
//! Active notifications are kept in insertion order, oldest first. When the
//! set is full, pushing evicts the oldest entry regardless of its kind.

use super::notification::{ActiveNotification, Countdown, Kind, Notification, NotificationId};
use super::presets::Preset;
use super::settings::Settings;
use super::timers::TimerQueue;
use super::view::ToastView;
use crate::clock::{Clock, SystemClock};
use crate::diagnostics::{DiagnosticsHandle, NotificationEvent};
use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Pointer entered a toast: freeze its countdown.
    Pause(NotificationId),
    /// Pointer left a toast: restart its countdown.
    Resume(NotificationId),
    /// Periodic tick firing due timers and the safety-net sweep.
    Tick,
}

/// Why a notification left the active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Removal {
    Dismissed,
    Expired,
    Evicted,
    Swept,
}

/// Manages the active notifications and their countdowns.
#[derive(Debug)]
pub struct Manager<C: Clock = SystemClock> {
    clock: C,
    settings: Settings,
    /// Active notifications, oldest first.
    active: VecDeque<ActiveNotification>,
    timers: TimerQueue,
    last_sweep: Instant,
    revision: u64,
    /// Optional diagnostics handle for lifecycle logging.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager<SystemClock> {
    /// Creates a new empty manager with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Creates a new empty manager with the given settings.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self::with_clock(SystemClock, settings)
    }
}

impl Default for Manager<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Manager<C> {
    /// Creates a manager reading time from `clock`.
    #[must_use]
    pub fn with_clock(clock: C, settings: Settings) -> Self {
        let now = clock.now();
        Self {
            clock,
            settings,
            active: VecDeque::new(),
            timers: TimerQueue::new(),
            last_sweep: now,
            revision: 0,
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for lifecycle logging.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // =========================================================================
    // Adding
    // =========================================================================

    /// Pushes a new notification and returns its id.
    ///
    /// The notification is active as soon as this returns. If the active set
    /// is full, the oldest notification is evicted first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMessage`] if the message is empty or whitespace.
    /// Nothing is inserted in that case.
    pub fn push(&mut self, notification: Notification) -> Result<NotificationId> {
        if notification.message().trim().is_empty() {
            return Err(Error::EmptyMessage);
        }
        Ok(self.insert(notification))
    }

    /// Pushes a notification of `kind` with the kind's default duration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMessage`] if the message is empty or whitespace.
    pub fn add(&mut self, kind: Kind, message: impl Into<String>) -> Result<NotificationId> {
        self.push(Notification::new(kind, message))
    }

    /// # Errors
    ///
    /// See [`Manager::push`].
    pub fn success(&mut self, message: impl Into<String>) -> Result<NotificationId> {
        self.add(Kind::Success, message)
    }

    /// # Errors
    ///
    /// See [`Manager::push`].
    pub fn error(&mut self, message: impl Into<String>) -> Result<NotificationId> {
        self.add(Kind::Error, message)
    }

    /// # Errors
    ///
    /// See [`Manager::push`].
    pub fn warning(&mut self, message: impl Into<String>) -> Result<NotificationId> {
        self.add(Kind::Warning, message)
    }

    /// # Errors
    ///
    /// See [`Manager::push`].
    pub fn info(&mut self, message: impl Into<String>) -> Result<NotificationId> {
        self.add(Kind::Info, message)
    }

    /// # Errors
    ///
    /// See [`Manager::push`].
    pub fn love(&mut self, message: impl Into<String>) -> Result<NotificationId> {
        self.add(Kind::Love, message)
    }

    /// # Errors
    ///
    /// See [`Manager::push`].
    pub fn celebration(&mut self, message: impl Into<String>) -> Result<NotificationId> {
        self.add(Kind::Celebration, message)
    }

    /// # Errors
    ///
    /// See [`Manager::push`].
    pub fn magic(&mut self, message: impl Into<String>) -> Result<NotificationId> {
        self.add(Kind::Magic, message)
    }

    /// Shows a preset notification.
    pub fn show_preset(&mut self, preset: Preset) -> NotificationId {
        self.insert(preset.notification())
    }

    /// Shows a preset looked up by its camelCase key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPreset`] if no preset has this key.
    pub fn show_preset_named(&mut self, key: &str) -> Result<NotificationId> {
        let preset: Preset = key.parse()?;
        Ok(self.show_preset(preset))
    }

    fn insert(&mut self, notification: Notification) -> NotificationId {
        let now = self.clock.now();

        while self.active.len() >= self.settings.max_visible.value() {
            if self.take_at(0, Removal::Evicted, now).is_none() {
                break;
            }
        }

        let id = NotificationId::next();
        let duration = notification
            .duration_override()
            .unwrap_or_else(|| self.settings.durations.get(notification.kind()));
        let countdown = if duration.is_persistent() {
            Countdown::Persistent
        } else {
            Countdown::Running {
                since: now,
                remaining: duration.value(),
                timer: self.timers.schedule(now + duration.value(), id),
            }
        };

        if let Some(handle) = &self.diagnostics {
            handle.log_notification(NotificationEvent::Shown {
                id,
                kind: notification.kind(),
            });
            match notification.kind() {
                Kind::Warning => handle.log_warning(notification.message()),
                Kind::Error => handle.log_error(notification.message()),
                Kind::Success | Kind::Info | Kind::Love | Kind::Celebration | Kind::Magic => {}
            }
        }

        self.active.push_back(ActiveNotification::new(
            id,
            notification,
            duration,
            now,
            countdown,
        ));
        self.touch();
        id
    }

    // =========================================================================
    // Removing
    // =========================================================================

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed. Unknown or
    /// already removed ids are a no-op.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let now = self.clock.now();
        match self.position(id) {
            Some(index) => self.take_at(index, Removal::Dismissed, now).is_some(),
            None => false,
        }
    }

    /// Removes every notification and cancels every pending timer.
    pub fn clear_all(&mut self) {
        self.timers.clear();
        if self.active.is_empty() {
            return;
        }
        let count = self.active.len();
        self.active.clear();
        self.touch();
        if let Some(handle) = &self.diagnostics {
            handle.log_notification(NotificationEvent::Cleared { count });
        }
    }

    /// Dismisses every notification of `kind`, returning how many were removed.
    ///
    /// Used when a stale condition resolves, e.g. clearing submission errors
    /// once a retry succeeds.
    pub fn clear_kind(&mut self, kind: Kind) -> usize {
        let now = self.clock.now();
        let mut removed = 0;
        while let Some(index) = self.active.iter().position(|n| n.kind() == kind) {
            self.take_at(index, Removal::Dismissed, now);
            removed += 1;
        }
        removed
    }

    /// Removes the entry at `index`, cancelling its timer first.
    fn take_at(
        &mut self,
        index: usize,
        cause: Removal,
        now: Instant,
    ) -> Option<ActiveNotification> {
        let timer = self.active.get(index)?.timer();
        if let Some(timer) = timer {
            self.timers.cancel(timer);
        }
        let entry = self.active.remove(index)?;
        self.touch();
        self.log_removal(&entry, cause, now);
        Some(entry)
    }

    fn log_removal(&self, entry: &ActiveNotification, cause: Removal, now: Instant) {
        let Some(handle) = &self.diagnostics else {
            return;
        };
        let id = entry.id();
        let event = match cause {
            Removal::Dismissed => NotificationEvent::Dismissed { id },
            Removal::Expired => NotificationEvent::Expired { id },
            Removal::Evicted => NotificationEvent::Evicted {
                id,
                kind: entry.kind(),
            },
            Removal::Swept => {
                #[allow(clippy::cast_possible_truncation)] // ages are bounded by minutes
                let age_ms = entry.age(now).as_millis() as u64;
                handle.log_warning(format!("safety sweep removed {id} after {age_ms} ms"));
                NotificationEvent::Swept { id, age_ms }
            }
        };
        handle.log_notification(event);
    }

    // =========================================================================
    // Countdown control
    // =========================================================================

    /// Freezes the countdown of a running notification.
    ///
    /// Returns `false` (and does nothing) for unknown, persistent or
    /// already paused notifications. A countdown that already reached zero
    /// but has not been ticked yet expires here instead of freezing.
    pub fn pause(&mut self, id: NotificationId) -> bool {
        let now = self.clock.now();
        let Some(index) = self.position(id) else {
            return false;
        };
        let Countdown::Running {
            since,
            remaining,
            timer,
        } = self.active[index].countdown
        else {
            return false;
        };

        let elapsed = now.saturating_duration_since(since);
        if elapsed >= remaining {
            self.take_at(index, Removal::Expired, now);
            return false;
        }

        self.timers.cancel(timer);
        self.active[index].countdown = Countdown::Paused {
            remaining: remaining - elapsed,
        };
        self.touch();
        true
    }

    /// Restarts a paused countdown from its frozen remaining time.
    ///
    /// Returns `false` (and does nothing) for unknown, persistent or
    /// running notifications.
    pub fn resume(&mut self, id: NotificationId) -> bool {
        let now = self.clock.now();
        let Some(entry) = self.active.iter_mut().find(|n| n.id() == id) else {
            return false;
        };
        let Countdown::Paused { remaining } = entry.countdown else {
            return false;
        };

        let timer = self.timers.schedule(now + remaining, id);
        entry.countdown = Countdown::Running {
            since: now,
            remaining,
            timer,
        };
        self.touch();
        true
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Fires due timers and, when the sweep interval has elapsed, runs the
    /// safety-net sweep. Returns how many notifications were removed.
    ///
    /// Should be called periodically (see `Settings::tick_interval`).
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let mut removed = 0;

        for (token, id) in self.timers.pop_due(now) {
            let Some(index) = self.position(id) else {
                continue;
            };
            // A token that no longer matches belongs to a superseded countdown.
            if self.active[index].timer() == Some(token)
                && self.take_at(index, Removal::Expired, now).is_some()
            {
                removed += 1;
            }
        }

        if now.saturating_duration_since(self.last_sweep) >= self.settings.sweep_interval {
            removed += self.sweep_at(now);
        }
        removed
    }

    /// Runs the safety-net sweep immediately.
    ///
    /// Timed notifications (running or paused) older than the age ceiling
    /// are removed even if their own timer never fired. Persistent
    /// notifications are never swept.
    pub fn sweep(&mut self) -> usize {
        let now = self.clock.now();
        self.sweep_at(now)
    }

    fn sweep_at(&mut self, now: Instant) -> usize {
        self.last_sweep = now;
        let max_age = self.settings.max_age;
        let mut removed = 0;
        while let Some(index) = self
            .active
            .iter()
            .position(|n| !n.is_persistent() && n.age(now) > max_age)
        {
            self.take_at(index, Removal::Swept, now);
            removed += 1;
        }
        removed
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match *message {
            Message::Dismiss(id) => {
                self.remove(id);
            }
            Message::Pause(id) => {
                self.pause(id);
            }
            Message::Resume(id) => {
                self.resume(id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the active notifications, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ActiveNotification> {
        self.active.iter()
    }

    /// Returns the notification with this id, if active.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&ActiveNotification> {
        self.active.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns whether a tick subscription is needed.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty()
    }

    /// Returns the number of scheduled auto-dismiss timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Counter bumped on every change to the active set.
    ///
    /// Renderers compare it with the last value they drew.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns render snapshots of the active notifications, oldest first.
    #[must_use]
    pub fn views(&self) -> Vec<ToastView> {
        let now = self.clock.now();
        self.active
            .iter()
            .map(|n| ToastView::capture(n, now))
            .collect()
    }

    fn position(&self, id: NotificationId) -> Option<usize> {
        self.active.iter().position(|n| n.id() == id)
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
