// SPDX-License-Identifier: MPL-2.0
//! `toastline` manages short-lived toast notifications for an event site.
//!
//! It keeps a bounded set of active toasts with pausable auto-dismiss
//! countdowns, ready-made presets for recurring guest actions, and a
//! safety-net sweep that removes anything left on screen too long. An Iced
//! overlay renders the toasts and a small demo application hosts it.

#![doc(html_root_url = "https://docs.rs/toastline/0.1.0")]

pub mod app;
pub mod clock;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod notifications;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
