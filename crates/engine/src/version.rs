//! Version string parsing
//!
//! Turns loosely written version strings (`1`, `2.0b1`, `2.1.3-rc2`,
//! `10 final`) into a [`Version`]. Parsing never fails: anything that does not
//! start with a digit yields `None`, and every numeric component that is
//! missing or unreadable becomes 0.
//!
//! Grammar (anchored at the start, trailing text ignored):
//!
//! ```text
//! major [.] [minor] [.] [patch] [- |space] [alpha|beta|candidate|final|a|b|rc] [serial]
//! ```

use once_cell::sync::Lazy;
use portalkit_core::{ReleaseLevel, Result, Version};
use regex::Regex;
use std::path::Path;
use tracing::debug;

static VERSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)\.?([0-9]*)\.?([0-9]*)[- ]?(alpha|beta|candidate|final|a|b|rc)?([0-9]*)")
        .expect("version pattern is valid")
});

/// Convert text to an integer, or 0 if it is not one
///
/// Surrounding whitespace is ignored. Negative numbers and values that do not
/// fit a `u32` also yield 0.
///
/// ```
/// use portalkit_engine::version::safe_to_int;
///
/// assert_eq!(safe_to_int("42"), 42);
/// assert_eq!(safe_to_int(""), 0);
/// assert_eq!(safe_to_int("x1"), 0);
/// ```
pub fn safe_to_int(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}

/// Parse a version string
///
/// # Example
///
/// ```
/// use portalkit_core::{ReleaseLevel, Version};
/// use portalkit_engine::version::parse_version;
///
/// assert_eq!(
///     parse_version("2.1.3b2"),
///     Some(Version::new(2, 1, 3, ReleaseLevel::Beta, 2))
/// );
/// assert_eq!(parse_version("abc"), None);
/// ```
pub fn parse_version(text: &str) -> Option<Version> {
    let caps = VERSION_RE.captures(text)?;
    let int = |i: usize| caps.get(i).map_or(0, |m| safe_to_int(m.as_str()));

    // The pattern only admits known tags, so an unmatched group means "final".
    let level = caps
        .get(4)
        .and_then(|m| ReleaseLevel::from_tag(m.as_str()))
        .unwrap_or(ReleaseLevel::Final);

    Some(Version::new(int(1), int(2), int(3), level, int(5)))
}

/// Read a version file and parse its content
///
/// The whole file is read and lower-cased before parsing, so `2.0RC1` is
/// understood. Bytes that are not UTF-8 are replaced rather than rejected.
/// Returns `Ok(None)` when the content is not a version.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read.
pub fn read_version_file(path: &Path) -> Result<Option<Version>> {
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes).to_lowercase();
    let version = parse_version(&content);
    debug!(path = %path.display(), ?version, "read version file");
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use portalkit_core::Error;

    fn v(major: u32, minor: u32, patch: u32, level: ReleaseLevel, serial: u32) -> Option<Version> {
        Some(Version::new(major, minor, patch, level, serial))
    }

    #[test]
    fn test_major_only() {
        assert_eq!(parse_version("1"), v(1, 0, 0, ReleaseLevel::Final, 0));
    }

    #[test]
    fn test_full_release() {
        assert_eq!(parse_version("1.2.3"), v(1, 2, 3, ReleaseLevel::Final, 0));
    }

    #[test]
    fn test_beta_with_serial() {
        assert_eq!(parse_version("2.1.3b2"), v(2, 1, 3, ReleaseLevel::Beta, 2));
        assert_eq!(parse_version("2.0b1"), v(2, 0, 0, ReleaseLevel::Beta, 1));
    }

    #[test]
    fn test_rc_without_minor() {
        assert_eq!(
            parse_version("10rc1"),
            v(10, 0, 0, ReleaseLevel::Candidate, 1)
        );
    }

    #[test]
    fn test_full_level_names_pass_through() {
        assert_eq!(parse_version("3.0 alpha2"), v(3, 0, 0, ReleaseLevel::Alpha, 2));
        assert_eq!(parse_version("3.0-beta"), v(3, 0, 0, ReleaseLevel::Beta, 0));
        assert_eq!(
            parse_version("3.0.1candidate4"),
            v(3, 0, 1, ReleaseLevel::Candidate, 4)
        );
        assert_eq!(parse_version("3.0 final"), v(3, 0, 0, ReleaseLevel::Final, 0));
    }

    #[test]
    fn test_alpha_abbreviation() {
        assert_eq!(parse_version("0.9a"), v(0, 9, 0, ReleaseLevel::Alpha, 0));
    }

    #[test]
    fn test_no_version() {
        assert_eq!(parse_version(""), None);
        assert_eq!(parse_version("abc"), None);
        assert_eq!(parse_version("v1.0"), None);
        assert_eq!(parse_version(" 1.0"), None);
    }

    #[test]
    fn test_trailing_text_ignored() {
        assert_eq!(
            parse_version("2.5.1 (unreleased)\n"),
            v(2, 5, 1, ReleaseLevel::Final, 0)
        );
    }

    #[test]
    fn test_uppercase_tag_not_recognized() {
        // Callers lower-case first (the version file reader does).
        assert_eq!(parse_version("2.0RC1"), v(2, 0, 0, ReleaseLevel::Final, 0));
    }

    #[test]
    fn test_overflowing_component_is_zero() {
        assert_eq!(
            parse_version("99999999999.1"),
            v(0, 1, 0, ReleaseLevel::Final, 0)
        );
    }

    #[test]
    fn test_safe_to_int() {
        assert_eq!(safe_to_int("7"), 7);
        assert_eq!(safe_to_int(" 7 "), 7);
        assert_eq!(safe_to_int(""), 0);
        assert_eq!(safe_to_int("-3"), 0);
        assert_eq!(safe_to_int("seven"), 0);
    }

    #[test]
    fn test_display_parses_back() {
        for text in ["1.2.3", "2.1.3b2", "10rc1", "4.0.0a", "1.0 final3"] {
            let parsed = parse_version(text).unwrap();
            assert_eq!(parse_version(&parsed.to_string()), Some(parsed), "{text}");
        }
    }

    #[test]
    fn test_read_version_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("version.txt");
        std::fs::write(&path, "2.5RC3\n").unwrap();

        let version = read_version_file(&path).unwrap();
        assert_eq!(version, v(2, 5, 0, ReleaseLevel::Candidate, 3));
    }

    #[test]
    fn test_read_version_file_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("version.txt");
        std::fs::write(&path, "unknown\n").unwrap();

        assert_eq!(read_version_file(&path).unwrap(), None);
    }

    #[test]
    fn test_read_version_file_not_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("version.txt");
        std::fs::write(&path, b"2.1B3 \xff\xfe build\n").unwrap();
        assert_eq!(
            read_version_file(&path).unwrap(),
            v(2, 1, 0, ReleaseLevel::Beta, 3)
        );
    }

    #[test]
    fn test_read_version_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_version_file(&dir.path().join("nope.txt"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
