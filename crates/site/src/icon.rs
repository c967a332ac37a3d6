//! Tool icon lookup and registration
//!
//! Tools declare an icon path when they are installed. The path is tried as
//! given and then relative to the site's package home. Found icons are
//! published under `misc_/<product>/<file name>`.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::SiteConfig;

/// Find the icon file for `path`
///
/// Returns `None`, after logging a warning, if the file exists neither as
/// given nor below `package_home`.
pub fn resolve_icon(config: &SiteConfig, path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }
    let fallback = config.package_home.join(path);
    if fallback.is_file() {
        return Some(fallback.canonicalize().unwrap_or(fallback));
    }
    warn!(
        icon = %path.display(),
        package_home = %config.package_home.display(),
        "Tool icon not found, using the default"
    );
    None
}

/// Icon registered for a tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolIcon {
    /// Product the tool belongs to
    pub product: String,
    /// Icon file name, as published
    pub name: String,
    /// Resolved icon file
    pub file: PathBuf,
}

impl ToolIcon {
    /// URL the icon is served under
    pub fn url(&self) -> String {
        format!("misc_/{}/{}", self.product, self.name)
    }
}

/// Published tool icons, keyed by product and file name
///
/// Safe to share between threads.
#[derive(Debug, Default)]
pub struct IconRegistry {
    products: RwLock<HashMap<String, HashMap<String, PathBuf>>>,
}

impl IconRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve and publish the icon of one of `product`'s tools
    ///
    /// Returns the icon URL, or `None` if the icon file cannot be found.
    pub fn register_tool(
        &self,
        config: &SiteConfig,
        product: &str,
        icon_path: &Path,
    ) -> Option<String> {
        let name = icon_path.file_name()?.to_string_lossy().into_owned();
        let file = resolve_icon(config, icon_path)?;
        let icon = ToolIcon {
            product: product.to_string(),
            name,
            file,
        };
        debug!(product, icon = %icon.name, "Registered tool icon");

        self.products
            .write()
            .entry(icon.product.clone())
            .or_default()
            .insert(icon.name.clone(), icon.file.clone());
        Some(icon.url())
    }

    /// Look up a published icon
    pub fn get(&self, product: &str, name: &str) -> Option<ToolIcon> {
        let products = self.products.read();
        let file = products.get(product)?.get(name)?;
        Some(ToolIcon {
            product: product.to_string(),
            name: name.to_string(),
            file: file.clone(),
        })
    }

    /// Number of published icons
    pub fn len(&self) -> usize {
        self.products.read().values().map(HashMap::len).sum()
    }

    /// True if no icon was published
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
