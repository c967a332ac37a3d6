//! Text engine for portalkit
//!
//! This crate holds the text-processing helpers:
//! - version: loose version strings → `Version`
//! - normalize: display text → id-safe strings
//! - autogen: recognizing `type.timestamp.random` ids
//! - charset: site charsets and conversion to/from UTF-8
//! - unicode: ASCII folding used by the normalizer
//!
//! Everything here is synchronous and free of shared state; all functions
//! can be called from any thread.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod autogen;
pub mod charset;
pub mod normalize;
pub mod unicode;
pub mod version;

pub use autogen::{is_auto_generated_id, parse_timestamp};
pub use charset::{portal_to_utf8, site_charset, utf8_to_portal, Charset, ErrorMode};
pub use normalize::{normalize_string, normalize_with_encoding, NormalizeContext, TextInput};
pub use unicode::AsciiFolding;
pub use version::{parse_version, read_version_file, safe_to_int};
