//! Catalog loading and the per-file failure policy
//!
//! The loader orchestrates scanner and parser over one directory. Policy:
//! lenient at the file level, strict at the directory level. A file that
//! cannot be read or parsed is logged and contributes zero entries; only
//! "cannot list the directory" and "the whole directory produced nothing"
//! surface to the caller, so a successful load is never empty.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::models::Stream;
use crate::parser::parse_playlist;
use crate::scanner::scan_playlist_dir;

/// Loads the radio catalog from a directory of playlist files
///
/// The directory is set once at construction and never mutated; every load
/// re-reads the files, nothing is cached between calls.
///
/// # Example
///
/// ```no_run
/// use tbxcatalog::CatalogLoader;
///
/// # fn main() -> tbxcatalog::Result<()> {
/// let loader = CatalogLoader::new("/etc/tunebox/playlists");
/// for stream in loader.load_streams()? {
///     println!("{}", stream);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    playlist_dir: PathBuf,
}

impl CatalogLoader {
    /// Create a loader over the given playlist directory
    pub fn new(playlist_dir: impl Into<PathBuf>) -> Self {
        Self {
            playlist_dir: playlist_dir.into(),
        }
    }

    /// The directory this loader reads from
    pub fn playlist_dir(&self) -> &Path {
        &self.playlist_dir
    }

    /// Loads every playlist file and aggregates the streams
    ///
    /// Files are processed in lexicographic name order and their entries
    /// concatenated, so two loads over an unchanged directory yield equal
    /// results.
    ///
    /// # Errors
    ///
    /// - [`Error::DirectoryNotFound`] when the directory cannot be listed
    /// - [`Error::NoStreamsFound`] when no file contributed any stream
    pub fn load_streams(&self) -> Result<Vec<Stream>> {
        let files = scan_playlist_dir(&self.playlist_dir)?;

        let mut catalog = Vec::new();
        for path in &files {
            let label = playlist_label(path);
            let contents = match fs::read_to_string(path) {
                Ok(contents) => contents,
                Err(source) => {
                    let err = Error::FileReadFailed {
                        path: path.clone(),
                        source,
                    };
                    warn!(%err, "Skipping unreadable playlist file");
                    continue;
                }
            };
            match parse_playlist(&contents, &label) {
                Ok(streams) => {
                    debug!(playlist = %label, streams = streams.len(), "Parsed playlist file");
                    catalog.extend(streams);
                }
                Err(err) => {
                    warn!(playlist = %label, %err, "Skipping malformed playlist file");
                }
            }
        }

        if catalog.is_empty() {
            // An empty catalog is indistinguishable from a broken one for
            // the caller, so it is never returned as success.
            return Err(Error::no_streams(self.playlist_dir.display().to_string()));
        }

        info!(
            directory = %self.playlist_dir.display(),
            files = files.len(),
            streams = catalog.len(),
            "Loaded radio catalog"
        );
        Ok(catalog)
    }

    /// Async convenience wrapper around [`load_streams`](Self::load_streams)
    ///
    /// Runs the synchronous pipeline on a blocking worker and resolves
    /// exactly once with the full result. No cancellation, timeout, or
    /// partial delivery semantics are added.
    pub async fn load_streams_async(&self) -> Result<Vec<Stream>> {
        let loader = self.clone();
        tokio::task::spawn_blocking(move || loader.load_streams())
            .await
            .map_err(|err| Error::Other(anyhow!("catalog load task failed: {err}")))?
    }
}

/// Short label identifying a playlist file in logs and errors
fn playlist_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
