//! Extended M3U playlist parsing
//!
//! A playlist is a line-oriented UTF-8 file: a mandatory `#EXTM3U` header
//! followed by entries of the form
//!
//! ```text
//! #EXTINF:<duration>,<display name>
//! <absolute URL>
//! ```
//!
//! Blank lines may appear anywhere and surrounding whitespace is ignored.
//! The duration field is not interpreted.
//!
//! The parser is deliberately lenient past the header: one malformed entry
//! never costs the rest of the file. Skipped entries are logged at warn
//! level.

use tracing::warn;

use crate::error::{Error, Result};
use crate::models::Stream;

/// Header token every playlist must start with
pub const M3U_HEADER: &str = "#EXTM3U";

/// Marker opening one stream entry
pub const ENTRY_MARKER: &str = "#EXTINF:";

/// Parses one playlist file's contents into its ordered stream list
///
/// `label` identifies the file in errors and logs, usually its file name.
///
/// A structurally valid playlist yielding zero entries is not an error here:
/// the empty-catalog check belongs to the directory-level loader, which is
/// the only place that can tell "one quiet file" from "nothing at all".
///
/// # Errors
///
/// [`Error::InvalidFormat`] when the first non-blank line is not exactly
/// `#EXTM3U` (an empty file included).
pub fn parse_playlist(contents: &str, label: &str) -> Result<Vec<Stream>> {
    let mut lines = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .peekable();

    if lines.next() != Some(M3U_HEADER) {
        return Err(Error::invalid_format(label, "missing #EXTM3U header"));
    }

    let mut streams = Vec::new();
    while let Some(line) = lines.next() {
        let Some(metadata) = line.strip_prefix(ENTRY_MARKER) else {
            // Stray text and non-header comments carry no entry data
            continue;
        };

        let Some((_duration, name)) = metadata.split_once(',') else {
            warn!(playlist = label, line, "Metadata line without comma, skipping");
            continue;
        };
        let name = name.trim();

        let Some(&candidate) = lines.peek() else {
            warn!(playlist = label, name, "Entry without URL at end of file, skipping");
            break;
        };
        if candidate.starts_with(ENTRY_MARKER) {
            // The next line opens another entry: this one never got its URL.
            // Leave the marker for the next iteration.
            warn!(playlist = label, name, "Entry without URL line, skipping");
            continue;
        }
        lines.next();

        match Stream::new(name, candidate) {
            Ok(stream) => streams.push(stream),
            Err(err) => {
                warn!(playlist = label, name, url = candidate, %err, "Skipping malformed entry");
            }
        }
    }

    if streams.is_empty() {
        warn!(playlist = label, "Playlist yielded no streams");
    }
    Ok(streams)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_single_entry() {
        let streams =
            parse_playlist("#EXTM3U\n#EXTINF:-1,Example Radio\nhttp://example.com/stream\n", "t")
                .unwrap();
        assert_eq!(
            streams,
            vec![Stream::new("Example Radio", "http://example.com/stream").unwrap()]
        );
    }

    #[test]
    fn test_missing_header() {
        let err = parse_playlist("#EXTINF:-1,X\nhttp://example.com/x\n", "bad.m3u").unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { label, .. } if label == "bad.m3u"));
    }

    #[test]
    fn test_empty_file_is_invalid() {
        assert!(matches!(
            parse_playlist("", "empty.m3u"),
            Err(Error::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_header_after_blank_lines() {
        let streams = parse_playlist(
            "\n\n   \n#EXTM3U\n#EXTINF:0,A\nhttp://example.com/a\n",
            "t",
        )
        .unwrap();
        assert_eq!(streams.len(), 1);
    }

    #[test]
    fn test_blank_lines_between_metadata_and_url() {
        let streams = parse_playlist(
            "#EXTM3U\n#EXTINF:-1,A\n\n\nhttp://example.com/a\n",
            "t",
        )
        .unwrap();
        assert_eq!(streams[0].url, "http://example.com/a");
    }

    #[test]
    fn test_metadata_without_comma_is_skipped() {
        let streams = parse_playlist(
            "#EXTM3U\n#EXTINF:-1\n#EXTINF:-1,B\nhttp://example.com/b\n",
            "t",
        )
        .unwrap();
        assert_eq!(streams.len(), 1);
        assert_eq!(streams[0].name, "B");
    }

    #[test]
    fn test_invalid_url_is_skipped() {
        let streams = parse_playlist(
            "#EXTM3U\n#EXTINF:-1,Bad\nnot a url\n#EXTINF:-1,Good\nhttp://example.com/good\n",
            "t",
        )
        .unwrap();
        assert_eq!(streams.len(), 1);
        assert_eq!(streams[0].name, "Good");
    }

    #[test]
    fn test_empty_name_is_skipped() {
        let streams = parse_playlist("#EXTM3U\n#EXTINF:-1,   \nhttp://example.com/a\n", "t").unwrap();
        assert!(streams.is_empty());
    }

    #[test]
    fn test_entry_at_end_of_file_without_url() {
        let streams = parse_playlist(
            "#EXTM3U\n#EXTINF:-1,A\nhttp://example.com/a\n#EXTINF:-1,Dangling\n",
            "t",
        )
        .unwrap();
        assert_eq!(streams.len(), 1);
        assert_eq!(streams[0].name, "A");
    }

    #[test]
    fn test_back_to_back_markers() {
        let streams = parse_playlist(
            "#EXTM3U\n#EXTINF:-1,NoUrl\n#EXTINF:-1,B\nhttp://example.com/b\n",
            "t",
        )
        .unwrap();
        assert_eq!(streams.len(), 1);
        assert_eq!(streams[0].name, "B");
    }

    #[test]
    fn test_stray_lines_are_ignored() {
        let streams = parse_playlist(
            "#EXTM3U\n# a comment\nrandom text\n#EXTINF:123,A\nhttp://example.com/a\ntrailing junk\n",
            "t",
        )
        .unwrap();
        assert_eq!(streams.len(), 1);
    }

    #[test]
    fn test_name_may_contain_commas() {
        let streams = parse_playlist(
            "#EXTM3U\n#EXTINF:-1,Jazz, Blues & More\nhttp://example.com/jazz\n",
            "t",
        )
        .unwrap();
        assert_eq!(streams[0].name, "Jazz, Blues & More");
    }

    #[test]
    fn test_zero_entries_is_ok_at_file_level() {
        let streams = parse_playlist("#EXTM3U\n", "t").unwrap();
        assert!(streams.is_empty());
    }

    #[test]
    fn test_entries_keep_file_order() {
        let streams = parse_playlist(
            "#EXTM3U\n#EXTINF:-1,A\nhttp://example.com/a\n#EXTINF:-1,B\nhttp://example.com/b\n",
            "t",
        )
        .unwrap();
        let names: Vec<_> = streams.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
