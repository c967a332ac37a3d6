//! Site helpers driven by a `portal.toml` on disk

use portalkit_core::{ReleaseLevel, Version};
use portalkit_engine::{normalize_string, NormalizeContext};
use portalkit_site::{
    pretty_title_or_id, site_title_or_id, IconRegistry, ItemSummary, NavTreeResult, SiteConfig,
    CONFIG_FILE_NAME,
};
use std::path::Path;
use tempfile::TempDir;

fn write_site(dir: &Path) {
    std::fs::write(
        dir.join(CONFIG_FILE_NAME),
        r#"
default_charset = "iso-8859-1"
content_types = ["Document", "News Item", "Folder", "Topic"]
empty_title = "(untitled)"

[navtree]
meta_types_not_to_list = ["Topic"]
"#,
    )
    .unwrap();
    std::fs::write(dir.join("version.txt"), "3.0 RC2\n").unwrap();
    std::fs::create_dir(dir.join("www")).unwrap();
    std::fs::write(dir.join("www").join("tool.gif"), b"GIF89a").unwrap();
}

#[test]
fn test_site_config_drives_helpers() {
    let dir = TempDir::new().unwrap();
    write_site(dir.path());
    let site = SiteConfig::open(dir.path()).unwrap();

    assert_eq!(
        site.fs_version().unwrap(),
        Some(Version::new(3, 0, 0, ReleaseLevel::Candidate, 2))
    );
    assert_eq!(site.types_to_list(), vec!["Document", "News Item", "Folder"]);

    // Byte input is decoded with the site charset
    let ctx = NormalizeContext::with_site(&site);
    assert_eq!(normalize_string(b"Caf\xe9 Menu", &ctx).unwrap(), "cafe-menu");
}

#[test]
fn test_titles_hide_generated_ids() {
    let dir = TempDir::new().unwrap();
    write_site(dir.path());
    let site = SiteConfig::open(dir.path()).unwrap();

    let generated = ItemSummary::new(None, Some("news_item.2004-12-24.0123456789"));
    let named = ItemSummary::new(None, Some("about"));

    assert_eq!(site_title_or_id(&generated, &site, None), "(untitled)");
    assert_eq!(site_title_or_id(&named, &site, None), "about");
    // An explicit empty value still wins over the configured placeholder
    assert_eq!(
        pretty_title_or_id(&generated, &site, Some("-"), None),
        "-"
    );
}

#[test]
fn test_navtree_from_unordered_results() {
    let results = [
        ("/site/news/2024", "2024"),
        ("/site/about", "About"),
        ("/site", "Home"),
        ("/site/news", "News"),
    ];
    let mut nav = NavTreeResult::new();
    for (path, title) in results {
        nav.add(path, title.to_string());
    }

    let tree = nav.into_tree("/site").unwrap();
    let titles: Vec<&str> = tree
        .children
        .iter()
        .filter_map(|c| c.item.as_deref())
        .collect();
    // "/site/news" was linked first, as a placeholder for "/site/news/2024"
    assert_eq!(titles, vec!["News", "About"]);
    let news = &tree.children[0];
    assert_eq!(news.children[0].item.as_deref(), Some("2024"));
}

#[test]
fn test_icons_resolve_below_package_home() {
    let dir = TempDir::new().unwrap();
    write_site(dir.path());
    let site = SiteConfig::open(dir.path()).unwrap();

    let registry = IconRegistry::new();
    let url = registry.register_tool(&site, "PortalTools", Path::new("www/tool.gif"));
    assert_eq!(url.as_deref(), Some("misc_/PortalTools/tool.gif"));
    assert!(registry.get("PortalTools", "tool.gif").is_some());
}
