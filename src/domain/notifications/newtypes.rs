// SPDX-License-Identifier: MPL-2.0
//! Notification newtypes.
//!
//! This module provides type-safe wrappers for notification queue values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

use crate::config::defaults::{
    DEFAULT_MAX_VISIBLE, DEFAULT_TICK_INTERVAL_MS, MAX_MAX_VISIBLE, MAX_NOTIFICATION_AGE_MS,
    MAX_TICK_INTERVAL_MS, MIN_MAX_VISIBLE, MIN_TICK_INTERVAL_MS,
};

// =============================================================================
// MaxVisible
// =============================================================================

/// Number of notifications that may be active at once (1–20, default 5).
///
/// Pushing past this bound evicts the oldest active notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxVisible(usize);

impl MaxVisible {
    /// Creates a new capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_MAX_VISIBLE, MAX_MAX_VISIBLE))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for MaxVisible {
    fn default() -> Self {
        Self(DEFAULT_MAX_VISIBLE)
    }
}

// =============================================================================
// DisplayDuration
// =============================================================================

/// How long a notification stays on screen before auto-dismissing.
///
/// Zero means persistent: the notification only leaves on explicit dismissal.
/// Non-zero values are clamped to the safety-net age ceiling so that a
/// notification's own countdown always fires before the sweep would catch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayDuration(Duration);

impl DisplayDuration {
    /// A duration that never auto-dismisses.
    pub const PERSISTENT: Self = Self(Duration::ZERO);

    /// Creates a display duration, clamping to the age ceiling.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self(duration.min(Duration::from_millis(MAX_NOTIFICATION_AGE_MS)))
    }

    /// Creates a display duration from milliseconds.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Returns the duration.
    #[must_use]
    pub fn value(self) -> Duration {
        self.0
    }

    /// Returns true if this duration never auto-dismisses.
    #[must_use]
    pub fn is_persistent(self) -> bool {
        self.0.is_zero()
    }
}

// =============================================================================
// TickInterval
// =============================================================================

/// Cadence at which the host drives `Manager::tick` (16–1000 ms, default 100 ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(u64);

impl TickInterval {
    /// Creates a tick interval in milliseconds, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(DEFAULT_TICK_INTERVAL_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
