// SPDX-License-Identifier: MPL-2.0
//! Named notification templates for recurring site events.

use super::notification::{Kind, Notification};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// A pre-configured notification for a recurring event.
///
/// Keys are camelCase (`guestbookSigned`) both in [`FromStr`] and serde,
/// matching the identifiers the site's pages emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Preset {
    GuestbookSigned,
    RsvpSubmitted,
    PhotoUploaded,
    LinkCopied,
    SongSuggested,
    Offline,
    SubmissionFailed,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::GuestbookSigned,
        Preset::RsvpSubmitted,
        Preset::PhotoUploaded,
        Preset::LinkCopied,
        Preset::SongSuggested,
        Preset::Offline,
        Preset::SubmissionFailed,
    ];

    /// Returns the camelCase key.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Preset::GuestbookSigned => "guestbookSigned",
            Preset::RsvpSubmitted => "rsvpSubmitted",
            Preset::PhotoUploaded => "photoUploaded",
            Preset::LinkCopied => "linkCopied",
            Preset::SongSuggested => "songSuggested",
            Preset::Offline => "offline",
            Preset::SubmissionFailed => "submissionFailed",
        }
    }

    /// Builds the notification this preset stands for.
    #[must_use]
    pub fn notification(self) -> Notification {
        match self {
            Preset::GuestbookSigned => {
                Notification::love("Your message has been added to our guestbook.")
                    .with_title("Thank you!")
                    .auto_dismiss(Duration::from_millis(5_000))
            }
            Preset::RsvpSubmitted => {
                Notification::celebration("We can't wait to celebrate with you!")
                    .with_title("RSVP received")
                    .auto_dismiss(Duration::from_millis(6_000))
            }
            Preset::PhotoUploaded => {
                Notification::success("Your photo is now part of the gallery.")
                    .with_title("Photo uploaded")
                    .auto_dismiss(Duration::from_millis(4_000))
            }
            Preset::LinkCopied => Notification::info("Link copied to clipboard.")
                .auto_dismiss(Duration::from_millis(3_000)),
            Preset::SongSuggested => {
                Notification::magic("Your song suggestion joined the reception playlist.")
                    .with_title("Song added")
                    .auto_dismiss(Duration::from_millis(5_000))
            }
            Preset::Offline => {
                Notification::warning("Changes will be sent once you reconnect.")
                    .with_title("You're offline")
                    .persistent()
            }
            Preset::SubmissionFailed => {
                Notification::error("Please try again in a moment.")
                    .with_title("Something went wrong")
                    .auto_dismiss(Duration::from_millis(8_000))
            }
        }
    }

    /// Returns the kind this preset displays as.
    #[must_use]
    pub fn kind(self) -> Kind {
        self.notification().kind()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.key() == s)
            .ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notifications::DisplayDuration;

    #[test]
    fn guestbook_signed_is_a_titled_love_note() {
        let notification = Preset::GuestbookSigned.notification();
        assert_eq!(notification.kind(), Kind::Love);
        assert!(notification.title().is_some_and(|t| !t.is_empty()));
        assert_eq!(
            notification.duration_override(),
            Some(DisplayDuration::from_millis(5_000))
        );
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for preset in Preset::ALL {
            assert_eq!(preset.key().parse::<Preset>(), Ok(preset));
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_eq!(
            "weddingCancelled".parse::<Preset>(),
            Err(Error::UnknownPreset("weddingCancelled".to_string()))
        );
        // Keys are case-sensitive.
        assert!("GuestbookSigned".parse::<Preset>().is_err());
    }

    #[test]
    fn serde_uses_camel_case_keys() {
        let json = serde_json::to_string(&Preset::RsvpSubmitted).expect("serialize preset");
        assert_eq!(json, "\"rsvpSubmitted\"");
        let parsed: Preset = serde_json::from_str("\"linkCopied\"").expect("deserialize preset");
        assert_eq!(parsed, Preset::LinkCopied);
    }

    #[test]
    fn every_preset_has_a_message() {
        for preset in Preset::ALL {
            assert!(!preset.notification().message().trim().is_empty(), "{preset}");
        }
    }

    #[test]
    fn offline_preset_is_persistent() {
        assert_eq!(
            Preset::Offline.notification().duration_override(),
            Some(DisplayDuration::PERSISTENT)
        );
        assert_eq!(Preset::Offline.kind(), Kind::Warning);
    }
}
