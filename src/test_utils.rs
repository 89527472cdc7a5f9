// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and virtual time.
//!
//! Re-exports the `approx` assertion macros for progress ratios, which
//! `assert_eq!` cannot compare reliably.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::clock::ManualClock;
use crate::notifications::{Manager, Settings};

/// Default epsilon for progress ratio comparisons.
pub const F32_EPSILON: f32 = 1e-6;

/// Returns a manager on a virtual clock plus a handle to advance that clock.
pub fn manual_manager(settings: Settings) -> (Manager<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    (Manager::with_clock(clock.clone(), settings), clock)
}
