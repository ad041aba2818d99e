//! Extension for wiring the catalog into tbxconfig
//!
//! This module provides the `CatalogConfigExt` trait which adds catalog
//! configuration methods to `tbxconfig::Config`.
//!
//! # Features
//!
//! - Enable/disable the catalog source
//! - Resolution of the playlist directory (managed, created on demand)
//! - Building a ready-to-use [`CatalogLoader`] from the configuration
//!
//! # Example
//!
//! ```no_run
//! use tbxconfig::get_config;
//! use tbxcatalog::CatalogConfigExt;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = get_config();
//!
//! if !config.get_catalog_enabled()? {
//!     println!("Radio catalog is disabled");
//!     return Ok(());
//! }
//!
//! let loader = config.catalog_loader()?;
//! let streams = loader.load_streams()?;
//! println!("{} stations", streams.len());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use anyhow::Result;
use serde_yaml::Value;
use tbxconfig::Config;

use crate::loader::CatalogLoader;

/// Default directory name for playlist files, relative to the config dir
pub const DEFAULT_PLAYLIST_DIR: &str = "playlists";

/// Extension trait managing the catalog configuration in tbxconfig
///
/// # Auto-persisted defaults
///
/// Getters persist their default value into the configuration when the key
/// does not exist yet.
pub trait CatalogConfigExt {
    /// Checks whether the radio catalog is enabled
    ///
    /// Returns `true` (the default) when the key is absent.
    fn get_catalog_enabled(&self) -> Result<bool>;

    /// Enables or disables the radio catalog
    fn set_catalog_enabled(&self, enabled: bool) -> Result<()>;

    /// Resolves the playlist directory
    ///
    /// The configured value may be absolute or relative to the configuration
    /// directory; the directory is created when missing.
    fn get_playlist_dir(&self) -> Result<PathBuf>;

    /// Sets the playlist directory (absolute, or relative to the config dir)
    fn set_playlist_dir(&self, directory: impl Into<String>) -> Result<()>;

    /// Builds a [`CatalogLoader`] over the resolved playlist directory
    fn catalog_loader(&self) -> Result<CatalogLoader>;
}

impl CatalogConfigExt for Config {
    fn get_catalog_enabled(&self) -> Result<bool> {
        match self.get_value(&["catalog", "enabled"]) {
            Ok(Value::Bool(b)) => Ok(b),
            _ => {
                // Default: enabled
                self.set_catalog_enabled(true)?;
                Ok(true)
            }
        }
    }

    fn set_catalog_enabled(&self, enabled: bool) -> Result<()> {
        self.set_value(&["catalog", "enabled"], Value::Bool(enabled))
    }

    fn get_playlist_dir(&self) -> Result<PathBuf> {
        let dir = self.get_managed_dir(&["catalog", "playlist_dir"], DEFAULT_PLAYLIST_DIR)?;
        Ok(PathBuf::from(dir))
    }

    fn set_playlist_dir(&self, directory: impl Into<String>) -> Result<()> {
        self.set_managed_dir(&["catalog", "playlist_dir"], directory.into())
    }

    fn catalog_loader(&self) -> Result<CatalogLoader> {
        Ok(CatalogLoader::new(self.get_playlist_dir()?))
    }
}
