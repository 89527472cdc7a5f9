// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with validated ranges.
//!
//! These types carry no UI or I/O dependencies so they can be used and
//! tested in isolation.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`notifications`]: Queue types ([`MaxVisible`](notifications::MaxVisible),
//!   [`DisplayDuration`](notifications::DisplayDuration),
//!   [`TickInterval`](notifications::TickInterval))

pub mod diagnostics;
pub mod notifications;
