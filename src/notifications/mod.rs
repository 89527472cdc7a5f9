// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for guest feedback.
//!
//! Notifications appear temporarily to confirm actions (guestbook signed,
//! photo uploaded, RSVP received) or report problems without blocking
//! interaction.
//!
//! # Components
//!
//! - [`Notification`] - Request builder with kind, optional title and duration
//! - [`Manager`] - Active set, auto-dismiss timers and the safety-net sweep
//! - [`Preset`] - Ready-made notifications for recurring site events
//! - [`ToastView`] - Owned render snapshot consumed by the UI layer
//!
//! # Usage
//!
//! ```
//! use toastline::notifications::{Manager, Notification, Preset};
//!
//! let mut manager = Manager::new();
//! manager.show_preset(Preset::GuestbookSigned);
//! manager
//!     .push(Notification::info("Link copied!").with_title("Share"))
//!     .expect("non-empty message");
//!
//! // Call periodically from the host event loop.
//! manager.tick();
//! assert_eq!(manager.len(), 2);
//! ```
//!
//! # Behavior
//!
//! - At most `max_visible` toasts (default 5); the oldest is evicted first
//! - A zero duration makes a toast persistent until dismissed
//! - Hovering pauses a countdown, leaving resumes it with the time left
//! - Timed toasts older than 30s are force-removed by a periodic sweep

mod manager;
mod notification;
mod presets;
mod settings;
mod timers;
mod view;

pub use manager::{Manager, Message};
pub use notification::{ActiveNotification, Kind, Notification, NotificationId};
pub use presets::Preset;
pub use settings::{KindDurations, Settings};
pub use timers::{TimerQueue, TimerToken};
pub use view::ToastView;
