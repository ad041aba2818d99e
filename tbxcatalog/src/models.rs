//! Data model for the radio catalog
//!
//! The catalog is a flat, ordered list of [`Stream`] values. A stream has no
//! identity beyond its `(name, url)` pair; duplicates appearing in several
//! playlist files are preserved as-is.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// A single internet radio stream
///
/// Immutable value type: equality, hashing and serialization are by value.
/// The constructor guarantees the invariants (non-empty name, absolute URL),
/// so a `Stream` obtained from the parser is always well-formed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Stream {
    /// Display name shown to the user (never empty)
    pub name: String,
    /// Absolute stream URL, validated at construction
    pub url: String,
}

impl Stream {
    /// Create a new stream, validating both fields
    ///
    /// Both fields are trimmed. Fails with [`Error::EmptyStreamName`] when
    /// the trimmed name is empty, and with [`Error::InvalidUrl`] when the
    /// URL does not parse as an absolute URI.
    pub fn new(name: impl Into<String>, url: impl AsRef<str>) -> Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(Error::EmptyStreamName);
        }
        let url = Url::parse(url.as_ref().trim())?;
        Ok(Self {
            name,
            url: url.into(),
        })
    }

}

impl std::fmt::Display for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_fields() {
        let stream = Stream::new("  Example Radio  ", " http://example.com/stream ").unwrap();
        assert_eq!(stream.name, "Example Radio");
        assert_eq!(stream.url, "http://example.com/stream");
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Stream::new("   ", "http://example.com/stream").unwrap_err();
        assert!(matches!(err, Error::EmptyStreamName));
    }

    #[test]
    fn test_relative_url_rejected() {
        let err = Stream::new("Example", "stream.mp3").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_equality_is_by_value() {
        let a = Stream::new("Example", "http://example.com/a").unwrap();
        let b = Stream::new("Example", "http://example.com/a").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serde_round_trip() {
        let stream = Stream::new("Example", "http://example.com/a").unwrap();
        let json = serde_json::to_string(&stream).unwrap();
        let back: Stream = serde_json::from_str(&json).unwrap();
        assert_eq!(stream, back);
    }
}
