//! Site-level helpers for portalkit
//!
//! Where the engine crate works on plain strings, this crate works on a
//! configured site:
//! - config: `portal.toml` with package home, charset and content types
//! - navtree: assembling navigation trees from unordered catalog results
//! - title: display titles that hide generated ids
//! - types_list, transaction, index_iter, icon, translation: small
//!   helpers used while building and rendering a site

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod icon;
pub mod index_iter;
pub mod navtree;
pub mod title;
pub mod transaction;
pub mod translation;
pub mod types_list;

pub use config::{NavTreeConfig, SiteConfig, CONFIG_FILE_NAME};
pub use icon::{resolve_icon, IconRegistry, ToolIcon};
pub use index_iter::IndexIterator;
pub use navtree::{NavNode, NavTreeResult};
pub use title::{
    empty_title, pretty_title_or_id, site_empty_title, site_title_or_id, ItemSummary,
};
pub use transaction::{transaction_note, TransactionRecord};
pub use translation::lookup_translation_id;
pub use types_list::types_to_list;
