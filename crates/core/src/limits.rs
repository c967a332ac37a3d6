//! Fixed limits and defaults shared by the helpers
//!
//! ## Contract
//!
//! These values mirror what the host framework expects. Changing them changes
//! observable behavior (note truncation, id shapes, default charset).

/// Charset assumed when the site does not configure one
pub const DEFAULT_CHARSET: &str = "utf-8";

/// Combined byte length at which a transaction note is dropped
///
/// A note is written only if `description.len() + note.len()` stays below
/// this value.
pub const MAX_TRANSACTION_NOTE_BYTES: usize = 65535;

/// Longest extension kept verbatim by the string normalizer
pub const MAX_EXTENSION_LEN: usize = 4;

/// Number of `.` separators in an auto-generated id (`type.date.random`)
pub const AUTO_ID_SEPARATORS: usize = 2;

/// Default upper bound of an `IndexIterator`
pub const DEFAULT_INDEX_UPPER: u64 = 100_000;

/// Placeholder shown for items without a title or a meaningful id
pub const EMPTY_TITLE: &str = "[\u{b7}\u{b7}\u{b7}]";

/// Translation domain and message id used for the empty title
pub const EMPTY_TITLE_DOMAIN: &str = "plone";
/// Message id of the empty title placeholder
pub const EMPTY_TITLE_MSGID: &str = "title_unset";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_is_three_middle_dots() {
        assert_eq!(EMPTY_TITLE, "[···]");
        assert_eq!(EMPTY_TITLE.chars().count(), 5);
    }

    #[test]
    fn test_note_limit_fits_u16() {
        assert_eq!(MAX_TRANSACTION_NOTE_BYTES, u16::MAX as usize);
    }
}
