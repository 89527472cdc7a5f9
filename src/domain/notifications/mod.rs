// SPDX-License-Identifier: MPL-2.0
//! Notification domain types.
//!
//! - [`MaxVisible`]: Capacity of the active notification set
//! - [`DisplayDuration`]: Auto-dismiss duration, zero meaning persistent
//! - [`TickInterval`]: Host tick cadence

mod newtypes;

pub use newtypes::{DisplayDuration, MaxVisible, TickInterval};
