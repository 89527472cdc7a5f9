// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the notification overlay.

pub mod design_tokens;
pub mod toast;

pub use toast::Toast;
