// SPDX-License-Identifier: MPL-2.0
//! Deadline queue backing auto-dismiss countdowns.
//!
//! Each running countdown owns exactly one entry. Entries are keyed by
//! `(deadline, sequence)` so equal deadlines fire in scheduling order and a
//! token can be cancelled without a secondary index.

use super::notification::NotificationId;
use std::collections::BTreeMap;
use std::time::Instant;

/// Handle returned by [`TimerQueue::schedule`], used to cancel the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken {
    deadline: Instant,
    seq: u64,
}

/// Pending auto-dismiss timers ordered by deadline.
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: BTreeMap<TimerToken, NotificationId>,
    next_seq: u64,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the dismissal of `id` at `deadline`.
    pub fn schedule(&mut self, deadline: Instant, id: NotificationId) -> TimerToken {
        let token = TimerToken {
            deadline,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.pending.insert(token, id);
        token
    }

    /// Cancels a pending timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        self.pending.remove(&token).is_some()
    }

    /// Removes and returns every timer whose deadline is at or before `now`,
    /// earliest first.
    pub fn pop_due(&mut self, now: Instant) -> Vec<(TimerToken, NotificationId)> {
        let mut due = Vec::new();
        while let Some(entry) = self.pending.first_entry() {
            if entry.key().deadline > now {
                break;
            }
            let token = *entry.key();
            due.push((token, entry.remove()));
        }
        due
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Cancels every pending timer.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
