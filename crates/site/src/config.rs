//! Site configuration via `portal.toml`
//!
//! Replaces module-level globals (package home, www directory) with a config
//! file read at startup. On first open, a default `portal.toml` is created.
//! To change settings, edit the file and restart.

use portalkit_core::{CharsetSource, Error, Result, TypeRegistry, Version};
use portalkit_engine::charset::Charset;
use portalkit_engine::version::read_version_file;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::types_list::types_to_list;

/// Config file name placed in the site directory.
pub const CONFIG_FILE_NAME: &str = "portal.toml";

/// Navigation tree settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NavTreeConfig {
    /// Content types never shown in navigation
    #[serde(default)]
    pub meta_types_not_to_list: Vec<String>,
}

/// Site configuration loaded from `portal.toml`.
///
/// # Example
///
/// ```toml
/// package_home = "."
/// default_charset = "utf-8"
/// content_types = ["Document", "Folder", "News Item"]
///
/// [navtree]
/// meta_types_not_to_list = ["Folder"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Directory the site's files live in. Relative paths are resolved
    /// against the directory holding `portal.toml`.
    #[serde(default = "default_package_home")]
    pub package_home: PathBuf,
    /// Static resources directory (default: `<package_home>/www`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub www_dir: Option<PathBuf>,
    /// Version file name, relative to `package_home`
    #[serde(default = "default_version_file")]
    pub version_file: String,
    /// Charset used for stored text
    #[serde(default = "default_charset")]
    pub default_charset: String,
    /// Registered content type names, in listing order
    #[serde(default)]
    pub content_types: Vec<String>,
    /// Placeholder for items without a usable title
    #[serde(default = "default_empty_title")]
    pub empty_title: String,
    /// Navigation settings
    #[serde(default)]
    pub navtree: NavTreeConfig,
}

fn default_package_home() -> PathBuf {
    PathBuf::from(".")
}

fn default_version_file() -> String {
    "version.txt".to_string()
}

fn default_charset() -> String {
    portalkit_core::limits::DEFAULT_CHARSET.to_string()
}

fn default_empty_title() -> String {
    portalkit_core::limits::EMPTY_TITLE.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            package_home: default_package_home(),
            www_dir: None,
            version_file: default_version_file(),
            default_charset: default_charset(),
            content_types: Vec::new(),
            empty_title: default_empty_title(),
            navtree: NavTreeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Resolve the configured charset.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownCharset` if no codec exists for the label.
    pub fn charset(&self) -> Result<Charset> {
        Charset::from_label(&self.default_charset)
    }

    /// Static resources directory
    pub fn www_dir(&self) -> PathBuf {
        self.www_dir
            .clone()
            .unwrap_or_else(|| self.package_home.join("www"))
    }

    /// Full path of the version file
    pub fn version_path(&self) -> PathBuf {
        self.package_home.join(&self.version_file)
    }

    /// Read and parse the site's version file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the version file cannot be read.
    pub fn fs_version(&self) -> Result<Option<Version>> {
        read_version_file(&self.version_path())
    }

    /// Content types that may appear in navigation
    pub fn types_to_list(&self) -> Vec<String> {
        types_to_list(self, &self.navtree.meta_types_not_to_list)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Site configuration
#
# Directory holding the site's files (version.txt, www/).
# Relative paths are resolved against this file's directory.
package_home = "."

# Static resources directory (default: <package_home>/www)
# www_dir = "www"

# Version file, relative to package_home
version_file = "version.txt"

# Charset for stored text: "utf-8" (default), "iso-8859-1" or "us-ascii"
default_charset = "utf-8"

# Registered content types, in listing order
content_types = []

# Shown for items without a title or with a generated id
empty_title = "[···]"

[navtree]
# Content types hidden from navigation
meta_types_not_to_list = []
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or names an
    /// unknown charset.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let mut config: SiteConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        // Validate the charset eagerly
        config.charset()?;

        if config.package_home.is_relative() {
            if let Some(dir) = path.parent() {
                config.package_home = dir.join(&config.package_home);
            }
        }
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Load `portal.toml` from a site directory, creating it first if missing.
    pub fn open(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        Self::write_default_if_missing(&path)?;
        Self::from_file(&path)
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

impl CharsetSource for SiteConfig {
    fn default_charset(&self) -> Option<&str> {
        Some(self.default_charset.as_str()).filter(|c| !c.trim().is_empty())
    }
}

impl TypeRegistry for SiteConfig {
    fn type_names(&self) -> Vec<&str> {
        self.content_types.iter().map(String::as_str).collect()
    }
}
