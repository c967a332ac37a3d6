//! portalkit - text helpers for portal sites
//!
//! The helpers a content site needs around ids and versions:
//! turning display text into id-safe strings, reading loosely written
//! version strings, and telling site-generated ids from hand-made ones.
//!
//! # Quick Start
//!
//! ```
//! use std::collections::HashSet;
//! use portalkit::{is_auto_generated_id, normalize_with_encoding, parse_version, Version};
//!
//! assert_eq!(normalize_with_encoding(" Héllo World!! ", "utf-8").unwrap(), "hello-world");
//! assert_eq!(parse_version("1.2.3"), Some(Version::release(1, 2, 3)));
//!
//! let types: HashSet<String> = ["Document".to_string()].into();
//! assert!(is_auto_generated_id("document.2020-01-01T00:00:00.12345", &types));
//! ```
//!
//! # Architecture
//!
//! - `portalkit-core`: `Version`, errors, limits and the service traits
//! - `portalkit-engine`: the string helpers
//! - `portalkit-site`: `portal.toml` and site-level helpers
//!
//! Everything is re-exported here; the crates are also usable on their own.

pub use portalkit_core::*;
pub use portalkit_engine::*;
pub use portalkit_site::*;
