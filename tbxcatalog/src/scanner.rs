//! Directory scanning for playlist files
//!
//! The scanner is the leaf component of the load pipeline: it only lists a
//! directory and filters the entries, it never opens the files themselves.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// File extension recognized as a playlist (matched case-insensitively)
pub const PLAYLIST_EXTENSION: &str = "m3u";

/// Lists the playlist files contained in `dir`
///
/// Hidden files (leading `.`) and non-`.m3u` entries are skipped. The result
/// is sorted lexicographically by file name so that the aggregated catalog is
/// reproducible across platforms, raw directory order being
/// filesystem-dependent.
///
/// # Errors
///
/// [`Error::DirectoryNotFound`] when `dir` does not exist, is not a
/// directory, or cannot be listed.
pub fn scan_playlist_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = fs::read_dir(dir).map_err(|_| Error::DirectoryNotFound {
        path: dir.to_path_buf(),
    })?;

    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        let is_playlist = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(PLAYLIST_EXTENSION));
        if is_playlist {
            files.push(path);
        }
    }

    files.sort_by_key(|path| path.file_name().map(|name| name.to_os_string()));

    debug!(
        directory = %dir.display(),
        candidates = files.len(),
        "Scanned playlist directory"
    );
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("nope");
        let err = scan_playlist_dir(&missing).unwrap_err();
        assert!(matches!(err, Error::DirectoryNotFound { path } if path == missing));
    }

    #[test]
    fn test_filters_and_sorts() {
        let temp_dir = tempfile::tempdir().unwrap();
        touch(temp_dir.path(), "zulu.m3u");
        touch(temp_dir.path(), "alpha.m3u");
        touch(temp_dir.path(), "notes.txt");
        touch(temp_dir.path(), ".hidden.m3u");
        fs::create_dir(temp_dir.path().join("sub.m3u")).unwrap();

        let files = scan_playlist_dir(temp_dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["alpha.m3u", "zulu.m3u"]);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let temp_dir = tempfile::tempdir().unwrap();
        touch(temp_dir.path(), "radio.M3U");
        let files = scan_playlist_dir(temp_dir.path()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_empty_directory_is_not_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let files = scan_playlist_dir(temp_dir.path()).unwrap();
        assert!(files.is_empty());
    }
}
