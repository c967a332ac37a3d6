//! Core types and traits for portalkit
//!
//! This crate defines the foundational types used throughout the workspace:
//! - Error: Error type hierarchy
//! - Version / ReleaseLevel: canonical release version tuple
//! - Traits: capability interfaces for framework services
//!   (TypeRegistry, CharsetSource, UnicodeNormalizer, TranslationService,
//!   Transaction, TitledItem, TranslatableItem)
//! - Limits: fixed limits and defaults

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod error;
pub mod limits;
pub mod traits;

// Re-export commonly used types and traits
pub use contract::{ReleaseLevel, Version};
pub use error::{Error, Result};
pub use traits::{
    CharsetSource, TitledItem, Transaction, TranslatableItem, TranslationService,
    TypeRegistry, UnicodeNormalizer,
};
