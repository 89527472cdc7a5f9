// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Queue**: Visible notification capacity
//! - **Timing**: Tick cadence, safety-net sweep, age ceiling
//! - **Durations**: Per-kind auto-dismiss durations
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Default number of notifications visible at once.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// Minimum number of visible notifications.
pub const MIN_MAX_VISIBLE: usize = 1;

/// Maximum number of visible notifications.
pub const MAX_MAX_VISIBLE: usize = 20;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Hard age ceiling (in milliseconds). Timed notifications older than this
/// are force-removed by the safety-net sweep.
pub const MAX_NOTIFICATION_AGE_MS: u64 = 30_000;

/// Interval between two safety-net sweeps (in milliseconds).
pub const SWEEP_INTERVAL_MS: u64 = 5_000;

/// Default UI tick interval driving auto-dismiss (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum UI tick interval (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = 16;

/// Maximum UI tick interval (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = 1_000;

// ==========================================================================
// Duration Defaults (per kind, in milliseconds)
// ==========================================================================

pub const DEFAULT_SUCCESS_DURATION_MS: u64 = 4_000;
pub const DEFAULT_INFO_DURATION_MS: u64 = 4_000;
pub const DEFAULT_WARNING_DURATION_MS: u64 = 6_000;
/// Errors stay longer so they can be read.
pub const DEFAULT_ERROR_DURATION_MS: u64 = 8_000;
pub const DEFAULT_LOVE_DURATION_MS: u64 = 5_000;
pub const DEFAULT_CELEBRATION_DURATION_MS: u64 = 6_000;
pub const DEFAULT_MAGIC_DURATION_MS: u64 = 5_000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default diagnostics buffer capacity (number of events).
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10000;
