//! Capability traits for framework services
//!
//! The helpers never look services up implicitly. Whatever a helper needs
//! from the hosting site (its type registry, its charset, a translation
//! service, the current transaction) is passed in as one of these traits.
//!
//! Thread safety: service traits require `Send + Sync` so a single site
//! object can be shared by concurrent callers.

use std::collections::{BTreeSet, HashSet};

/// Registry of known content type names
///
/// Used by the auto-generated-id detector and the listable types helper.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use portalkit_core::traits::TypeRegistry;
///
/// let types: HashSet<String> = ["News Item".to_string()].into();
/// assert!(types.has_type("News Item"));
/// assert!(types.has_type("news item"));
/// assert!(!types.has_type("NEWS ITEM"));
/// ```
pub trait TypeRegistry: Send + Sync {
    /// Registered type names, in registry order
    fn type_names(&self) -> Vec<&str>;

    /// Check a candidate against the registry
    ///
    /// A candidate matches a registered name either exactly or in the name's
    /// lower-cased form. Ids generated by newer sites carry a lower-cased
    /// type, older ones the registered spelling.
    fn has_type(&self, candidate: &str) -> bool {
        self.type_names()
            .into_iter()
            .any(|name| name == candidate || name.to_lowercase() == candidate)
    }
}

impl TypeRegistry for HashSet<String> {
    fn type_names(&self) -> Vec<&str> {
        self.iter().map(String::as_str).collect()
    }

    fn has_type(&self, candidate: &str) -> bool {
        self.contains(candidate) || self.iter().any(|name| name.to_lowercase() == candidate)
    }
}

impl TypeRegistry for BTreeSet<String> {
    fn type_names(&self) -> Vec<&str> {
        self.iter().map(String::as_str).collect()
    }
}

impl TypeRegistry for Vec<String> {
    fn type_names(&self) -> Vec<&str> {
        self.iter().map(String::as_str).collect()
    }
}

impl TypeRegistry for [&str] {
    fn type_names(&self) -> Vec<&str> {
        self.to_vec()
    }
}

impl<T: TypeRegistry + ?Sized> TypeRegistry for &T {
    fn type_names(&self) -> Vec<&str> {
        (**self).type_names()
    }

    fn has_type(&self, candidate: &str) -> bool {
        (**self).has_type(candidate)
    }
}

/// Source of the site's default charset
///
/// Consulted when byte input arrives without an explicit encoding.
pub trait CharsetSource: Send + Sync {
    /// Configured charset label, or `None` if the site has no setting
    fn default_charset(&self) -> Option<&str>;
}

/// Locale-aware folding of text to ASCII-safe equivalents
///
/// Implementations map accented or locale-specific characters to plain
/// ASCII (`é` to `e`, `ß` to `ss`). Case should be preserved.
pub trait UnicodeNormalizer: Send + Sync {
    /// Fold `text`
    fn normalize(&self, text: &str) -> String;
}

/// Message translation
pub trait TranslationService: Send + Sync {
    /// Translate `msgid` in `domain`, falling back to `default`
    fn translate(&self, domain: &str, msgid: &str, default: &str) -> String;
}

/// The transaction a human-readable note is attached to
pub trait Transaction {
    /// Current description, including earlier notes
    fn description(&self) -> &str;

    /// Append a note to the description
    fn note(&mut self, text: &str);
}

/// A content item that may carry a title and an id
///
/// Covers both full objects and catalog summaries.
pub trait TitledItem {
    /// Title, if the item has one
    fn title(&self) -> Option<&str>;

    /// Id, if the item has one
    fn id(&self) -> Option<&str>;
}

/// A container whose default page may have translations
pub trait TranslatableItem {
    /// True if this item is itself a translation of another item
    fn is_translation(&self) -> bool {
        false
    }

    /// Id of the translation of the child `page`
    ///
    /// `None` when the child does not exist, is not translatable, or has no
    /// translation.
    fn child_translation_id(&self, page: &str) -> Option<String>;
}
