//! Display titles for content items

use portalkit_core::limits::{EMPTY_TITLE, EMPTY_TITLE_DOMAIN, EMPTY_TITLE_MSGID};
use portalkit_core::{TitledItem, TranslationService, TypeRegistry};
use portalkit_engine::is_auto_generated_id;
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;

/// Placeholder shown for items without a usable title
///
/// Translated through `translator` when one is given.
pub fn empty_title(translator: Option<&dyn TranslationService>) -> String {
    placeholder(translator, EMPTY_TITLE)
}

/// The site's configured placeholder, translated when a translator is given
pub fn site_empty_title(site: &SiteConfig, translator: Option<&dyn TranslationService>) -> String {
    placeholder(translator, &site.empty_title)
}

fn placeholder(translator: Option<&dyn TranslationService>, default: &str) -> String {
    match translator {
        Some(t) => t.translate(EMPTY_TITLE_DOMAIN, EMPTY_TITLE_MSGID, default),
        None => default.to_string(),
    }
}

/// A non-empty title, else an id that was not generated by the site
fn title_or_id<I, R>(item: &I, registry: &R) -> Option<String>
where
    I: TitledItem + ?Sized,
    R: TypeRegistry + ?Sized,
{
    if let Some(title) = item.title().filter(|t| !t.is_empty()) {
        return Some(title.to_string());
    }
    item.id()
        .filter(|id| !id.is_empty() && !is_auto_generated_id(id, registry))
        .map(str::to_string)
}

/// Best human-readable label for `item`
///
/// Picks, in order: a non-empty title, an id that was not generated by the
/// site, `empty_value`, and finally [`empty_title`].
///
/// ```
/// use std::collections::HashSet;
/// use portalkit_site::title::{pretty_title_or_id, ItemSummary};
///
/// let types: HashSet<String> = ["Document".to_string()].into();
/// let item = ItemSummary::new(None, Some("document.2020-01-01.123"));
/// assert_eq!(pretty_title_or_id(&item, &types, None, None), "[···]");
/// ```
pub fn pretty_title_or_id<I, R>(
    item: &I,
    registry: &R,
    empty_value: Option<&str>,
    translator: Option<&dyn TranslationService>,
) -> String
where
    I: TitledItem + ?Sized,
    R: TypeRegistry + ?Sized,
{
    title_or_id(item, registry).unwrap_or_else(|| match empty_value {
        Some(value) => value.to_string(),
        None => empty_title(translator),
    })
}

/// [`pretty_title_or_id`] against a configured site
///
/// Generated ids are recognized with the site's content types, and the
/// fallback is the site's `empty_title`.
pub fn site_title_or_id<I>(
    item: &I,
    site: &SiteConfig,
    translator: Option<&dyn TranslationService>,
) -> String
where
    I: TitledItem + ?Sized,
{
    title_or_id(item, site).unwrap_or_else(|| site_empty_title(site, translator))
}

/// Title and id of a catalog entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    /// Title
    pub title: Option<String>,
    /// Id
    pub id: Option<String>,
}

impl ItemSummary {
    /// Build a summary from borrowed parts
    pub fn new(title: Option<&str>, id: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_string),
            id: id.map(str::to_string),
        }
    }
}

impl TitledItem for ItemSummary {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
