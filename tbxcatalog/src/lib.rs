//! Radio catalog library for TuneBox
//!
//! This crate loads a curated catalog of internet radio stations from a
//! directory of extended-M3U playlist files and exposes them as structured
//! [`Stream`] records, ready for a client application to display or play.
//!
//! # Features
//!
//! - **Directory Scanning**: deterministic, lexicographically ordered
//!   discovery of `.m3u` files (case-insensitive, hidden files excluded)
//! - **Playlist Parsing**: `#EXTM3U`/`#EXTINF` parsing with per-entry
//!   tolerance — one malformed station never costs the rest of the file
//! - **Aggregation Policy**: lenient per file, strict per directory; a
//!   successful load is never empty
//! - **Async Entry Point**: single-shot `spawn_blocking` wrapper over the
//!   synchronous pipeline
//! - **Configuration Extension**: playlist directory resolution through
//!   `tbxconfig` (feature `tbxconfig`, enabled by default)
//!
//! # Playlist format
//!
//! ```text
//! #EXTM3U
//! #EXTINF:-1,Example Radio
//! http://example.com/stream
//! ```
//!
//! The duration field of `#EXTINF` is ignored; blank lines and surrounding
//! whitespace are tolerated anywhere.
//!
//! # Example
//!
//! ```no_run
//! use tbxcatalog::CatalogLoader;
//!
//! #[tokio::main]
//! async fn main() -> tbxcatalog::Result<()> {
//!     let loader = CatalogLoader::new("playlists");
//!     let streams = loader.load_streams_async().await?;
//!     for stream in &streams {
//!         println!("{} -> {}", stream.name, stream.url);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Error policy
//!
//! Per-file problems (unreadable file, missing `#EXTM3U` header) are logged
//! and swallowed by the loader; malformed individual entries are skipped by
//! the parser. The caller only ever sees [`Error::DirectoryNotFound`] or
//! [`Error::NoStreamsFound`] from a full load — either a non-empty catalog
//! or one descriptive error.

pub mod error;
pub mod loader;
pub mod models;
pub mod parser;
pub mod scanner;

#[cfg(feature = "tbxconfig")]
pub mod config_ext;

pub use error::{Error, Result};
pub use loader::CatalogLoader;
pub use models::Stream;
pub use parser::{parse_playlist, ENTRY_MARKER, M3U_HEADER};
pub use scanner::{scan_playlist_dir, PLAYLIST_EXTENSION};

#[cfg(feature = "tbxconfig")]
pub use config_ext::CatalogConfigExt;
