//! Detection of machine-generated object ids
//!
//! Sites hand out temporary ids of the form `type.timestamp.random`, e.g.
//! `news_item.2020-01-01T00:00:00.48261`. Such ids are meaningless to users,
//! so titles fall back to a placeholder instead of showing them.
//!
//! An id is considered generated when:
//! - it contains exactly two `.` separators,
//! - the type part (with `_` read as space) is a registered type name,
//!   either as registered or lower-cased,
//! - the timestamp part parses as a date or date-time,
//! - the random part parses as a non-zero float.
//!
//! Detection never fails; anything unparseable is simply "not generated".

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use portalkit_core::limits::AUTO_ID_SEPARATORS;
use portalkit_core::TypeRegistry;
use tracing::trace;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%d %H:%M:%S%z"];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parse the timestamp part of a generated id
///
/// Accepts RFC 3339, `YYYY-MM-DD[Thh:mm[:ss]]` (optionally with a numeric
/// offset) and `YYYY/MM/DD[ hh:mm:ss]`. Offsets are converted to UTC.
///
/// ```
/// use portalkit_engine::autogen::parse_timestamp;
///
/// assert!(parse_timestamp("2020-01-01T00:00:00").is_some());
/// assert!(parse_timestamp("2020-02-30").is_none());
/// ```
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, fmt) {
            return Some(dt.naive_utc());
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt);
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// True if the random part reads as a float other than zero
fn is_random_part(text: &str) -> bool {
    matches!(text.trim().parse::<f64>(), Ok(n) if n != 0.0)
}

/// Check whether `id` was generated by the site
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use portalkit_engine::autogen::is_auto_generated_id;
///
/// let types: HashSet<String> = ["Document".to_string()].into();
/// assert!(is_auto_generated_id("document.2020-01-01T00:00:00.12345", &types));
/// assert!(!is_auto_generated_id("my.custom.id", &types));
/// assert!(!is_auto_generated_id("front-page", &types));
/// ```
pub fn is_auto_generated_id<R: TypeRegistry + ?Sized>(id: &str, registry: &R) -> bool {
    // Most ids are hand-made; reject them before touching the registry.
    if id.matches('.').count() != AUTO_ID_SEPARATORS {
        return false;
    }

    let mut parts = id.splitn(3, '.');
    let (Some(type_part), Some(date_part), Some(random_part)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    let type_name = type_part.replace('_', " ");
    if !registry.has_type(&type_name) {
        trace!(id, type_name = %type_name, "id type is not registered");
        return false;
    }
    if parse_timestamp(date_part).is_none() {
        trace!(id, "id timestamp does not parse");
        return false;
    }
    is_random_part(random_part)
}
