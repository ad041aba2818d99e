//! Error types for the catalog loader

use std::path::PathBuf;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading the radio catalog
///
/// Only `DirectoryNotFound` and `NoStreamsFound` ever reach the caller of a
/// full load: per-file failures are logged by the loader and the file simply
/// contributes no entries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The playlist directory does not exist or cannot be listed
    #[error("Playlist directory not found: {path}")]
    DirectoryNotFound {
        /// The path that was attempted
        path: PathBuf,
    },

    /// A playlist file could not be read or decoded
    #[error("Failed to read playlist file {path}: {source}")]
    FileReadFailed {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A playlist file is not valid extended M3U
    #[error("Invalid playlist format in {label}: {reason}")]
    InvalidFormat {
        /// Label identifying the file (usually its file name)
        label: String,
        /// What was wrong with it
        reason: String,
    },

    /// A load produced no stream at all for the given scope
    #[error("No streams found in {scope}")]
    NoStreamsFound {
        /// Directory (or other scope) that yielded nothing
        scope: String,
    },

    /// A stream was given an empty display name
    #[error("Stream name is empty")]
    EmptyStreamName,

    /// A stream URL is not an absolute, parsable URI
    #[error("Invalid stream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Generic error from integration layers
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Create an `InvalidFormat` error
    pub fn invalid_format(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            label: label.into(),
            reason: reason.into(),
        }
    }

    /// Create a `NoStreamsFound` error
    pub fn no_streams(scope: impl Into<String>) -> Self {
        Self::NoStreamsFound {
            scope: scope.into(),
        }
    }
}
