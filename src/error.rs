// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// A notification was pushed with an empty or whitespace-only message.
    EmptyMessage,
    /// A preset key arrived from an untyped boundary and matched no preset.
    UnknownPreset(String),
}

impl Error {
    /// Returns the message key used when surfacing this error to a developer overlay.
    pub fn message_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::EmptyMessage => "error-notification-empty-message",
            Error::UnknownPreset(_) => "error-notification-unknown-preset",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::EmptyMessage => write!(f, "Notification Error: message must not be empty"),
            Error::UnknownPreset(key) => write!(f, "Notification Error: unknown preset '{}'", key),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn unknown_preset_names_the_key() {
        let err = Error::UnknownPreset("weddingCancelled".into());
        assert!(format!("{}", err).contains("weddingCancelled"));
        assert_eq!(err.message_key(), "error-notification-unknown-preset");
    }

    #[test]
    fn empty_message_has_dedicated_key() {
        assert_eq!(
            Error::EmptyMessage.message_key(),
            "error-notification-empty-message"
        );
    }
}
