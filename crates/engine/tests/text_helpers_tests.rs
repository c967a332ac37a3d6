//! End-to-end checks of the public text helpers
//!
//! These tests pin the documented examples of each helper, exercised through
//! the crate root re-exports the way callers use them.

use std::collections::HashSet;

use portalkit_core::{CharsetSource, Error, ReleaseLevel, Version};
use portalkit_engine::{
    is_auto_generated_id, normalize_string, normalize_with_encoding, parse_version,
    portal_to_utf8, read_version_file, AsciiFolding, ErrorMode, NormalizeContext,
};

struct LatinSite;

impl CharsetSource for LatinSite {
    fn default_charset(&self) -> Option<&str> {
        Some("ISO-8859-1")
    }
}

fn document_types() -> HashSet<String> {
    ["Document".to_string(), "News Item".to_string()].into()
}

// === Version parsing ===

#[test]
fn test_documented_versions() {
    assert_eq!(parse_version("1.2.3"), Some(Version::release(1, 2, 3)));
    assert_eq!(
        parse_version("2.0b1"),
        Some(Version::new(2, 0, 0, ReleaseLevel::Beta, 1))
    );
    assert_eq!(parse_version("abc"), None);
    assert_eq!(
        parse_version("1"),
        Some(Version::new(1, 0, 0, ReleaseLevel::Final, 0))
    );
    assert_eq!(
        parse_version("2.1.3b2"),
        Some(Version::new(2, 1, 3, ReleaseLevel::Beta, 2))
    );
    assert_eq!(
        parse_version("10rc1"),
        Some(Version::new(10, 0, 0, ReleaseLevel::Candidate, 1))
    );
    assert_eq!(parse_version(""), None);
}

#[test]
fn test_versions_sort_by_maturity() {
    let mut versions: Vec<Version> = ["2.0", "2.0rc1", "1.9", "2.0a1", "2.0b3"]
        .iter()
        .filter_map(|s| parse_version(s))
        .collect();
    versions.sort();
    let rendered: Vec<String> = versions.iter().map(Version::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "1.9.0",
            "2.0.0-alpha1",
            "2.0.0-beta3",
            "2.0.0-candidate1",
            "2.0.0"
        ]
    );
}

#[test]
fn test_version_file_is_lowercased() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("version.txt");
    std::fs::write(&path, "3.1B2").unwrap();
    assert_eq!(
        read_version_file(&path).unwrap(),
        Some(Version::new(3, 1, 0, ReleaseLevel::Beta, 2))
    );
}

// === Normalization ===

#[test]
fn test_documented_normalization() {
    assert_eq!(
        normalize_with_encoding(" Héllo World!! ", "utf-8").unwrap(),
        "hello-world"
    );
    assert_eq!(
        normalize_with_encoding("report.v2.doc", "utf-8").unwrap(),
        "report-v2.doc"
    );
}

#[test]
fn test_normalization_with_site_context() {
    let site = LatinSite;
    let ctx = NormalizeContext::with_site(&site);
    assert_eq!(
        normalize_string(b"R\xe9sum\xe9 2024.PDF", &ctx).unwrap(),
        "resume-2024.pdf"
    );
}

#[test]
fn test_normalization_with_locale() {
    let german = AsciiFolding::for_locale("de");
    let site = LatinSite;
    let ctx = NormalizeContext::with_site(&site).unicode(&german);
    assert_eq!(normalize_string("Über uns", &ctx).unwrap(), "ueber-uns");
}

#[test]
fn test_normalization_requires_charset_source() {
    let result = normalize_string("anything", &NormalizeContext::default());
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_owned_string_input() {
    let title = String::from("Annual Report (Final)");
    assert_eq!(
        normalize_with_encoding(&title, "utf-8").unwrap(),
        "annual-report-final"
    );
    assert_eq!(
        normalize_with_encoding(title, "utf-8").unwrap(),
        "annual-report-final"
    );
}

// === Auto-generated ids ===

#[test]
fn test_documented_autogen_ids() {
    let types = document_types();
    assert!(is_auto_generated_id(
        "document.2020-01-01T00:00:00.12345",
        &types
    ));
    assert!(!is_auto_generated_id("my.custom.id", &types));
}

#[test]
fn test_autogen_with_slice_registry() {
    let types: &[&str] = &["Event"];
    assert!(is_auto_generated_id("event.2021-03-04.77", types));
    assert!(!is_auto_generated_id("event.2021-03-04.x", types));
}

#[test]
fn test_normalized_generated_id_loses_its_shape() {
    // The first dot is not an extension separator, so it becomes a hyphen.
    let types = document_types();
    let id = normalize_with_encoding("News_Item.2004-12-24.5", "utf-8").unwrap();
    assert_eq!(id, "news_item-2004-12-24.5");
    assert!(!is_auto_generated_id(&id, &types));
}

// === Charset conversion ===

#[test]
fn test_portal_to_utf8_round_trip() {
    let utf8 = portal_to_utf8(&LatinSite, b"na\xefve", ErrorMode::Strict).unwrap();
    assert_eq!(String::from_utf8(utf8).unwrap(), "naïve");
}
