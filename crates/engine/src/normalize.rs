//! String normalization for ids and file names
//!
//! Pipeline: coerce to text → decode bytes → lowercase + trim
//!           → ASCII folding → split off `.ext` → collapse non-word runs
//!           to `-` → trim `-` → reassemble
//!
//! The result only contains `[a-z0-9_-]`, never starts or ends with `-`, and
//! keeps at most one trailing extension of up to four word characters.
//! Normalizing twice gives the same result as normalizing once.

use crate::charset::{site_charset, Charset, ErrorMode};
use crate::unicode::AsciiFolding;
use once_cell::sync::Lazy;
use portalkit_core::limits::MAX_EXTENSION_LEN;
use portalkit_core::{CharsetSource, Error, Result, UnicodeNormalizer};
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use tracing::debug;

static EXTENSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(.+)\.([A-Za-z0-9_]{{0,{}}})$", MAX_EXTENSION_LEN))
        .expect("extension pattern is valid")
});

static NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("non-word pattern is valid"));

static DEFAULT_FOLDING: AsciiFolding = AsciiFolding::new();

/// Input accepted by [`normalize_string`]
///
/// Text is used as is; bytes are decoded with the context's charset. Any
/// other value can be passed through [`TextInput::debug`], which uses its
/// `Debug` rendering, so normalization never rejects input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInput<'a> {
    /// Already decoded text
    Text(Cow<'a, str>),
    /// Bytes in some charset
    Bytes(Cow<'a, [u8]>),
}

impl<'a> TextInput<'a> {
    /// Textual fallback for values that are not strings
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        TextInput::Text(Cow::Owned(format!("{:?}", value)))
    }
}

impl<'a> From<&'a str> for TextInput<'a> {
    fn from(s: &'a str) -> Self {
        TextInput::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for TextInput<'a> {
    fn from(s: &'a String) -> Self {
        TextInput::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for TextInput<'static> {
    fn from(s: String) -> Self {
        TextInput::Text(Cow::Owned(s))
    }
}

impl<'a> From<&'a [u8]> for TextInput<'a> {
    fn from(b: &'a [u8]) -> Self {
        TextInput::Bytes(Cow::Borrowed(b))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for TextInput<'a> {
    fn from(b: &'a [u8; N]) -> Self {
        TextInput::Bytes(Cow::Borrowed(&b[..]))
    }
}

impl From<Vec<u8>> for TextInput<'static> {
    fn from(b: Vec<u8>) -> Self {
        TextInput::Bytes(Cow::Owned(b))
    }
}

impl<'a> From<Option<&'a str>> for TextInput<'a> {
    /// `None` becomes the text `"None"`, not an empty string.
    fn from(s: Option<&'a str>) -> Self {
        match s {
            Some(s) => TextInput::from(s),
            None => TextInput::debug(&None::<&str>),
        }
    }
}

/// Where the normalizer gets its charset and folding from
///
/// At least one of `encoding` or `site` must be set. An explicit encoding
/// wins over the site's charset; neither is consulted for text input.
///
/// # Example
///
/// ```
/// use portalkit_engine::normalize::{normalize_string, NormalizeContext};
///
/// let ctx = NormalizeContext::with_encoding("utf-8");
/// assert_eq!(normalize_string(" Héllo World!! ", &ctx).unwrap(), "hello-world");
/// ```
#[derive(Clone, Copy, Default)]
pub struct NormalizeContext<'a> {
    encoding: Option<&'a str>,
    site: Option<&'a dyn CharsetSource>,
    unicode: Option<&'a dyn UnicodeNormalizer>,
}

impl<'a> NormalizeContext<'a> {
    /// Context with an explicit encoding
    pub fn with_encoding(encoding: &'a str) -> Self {
        NormalizeContext::default().encoding(encoding)
    }

    /// Context that takes its charset from a site
    pub fn with_site(site: &'a dyn CharsetSource) -> Self {
        NormalizeContext::default().site(site)
    }

    /// Set the explicit encoding
    pub fn encoding(mut self, encoding: &'a str) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Set the site charset source
    pub fn site(mut self, site: &'a dyn CharsetSource) -> Self {
        self.site = Some(site);
        self
    }

    /// Replace the default [`AsciiFolding`]
    pub fn unicode(mut self, unicode: &'a dyn UnicodeNormalizer) -> Self {
        self.unicode = Some(unicode);
        self
    }

    fn charset(&self) -> Result<Charset> {
        match (self.encoding, self.site) {
            (Some(label), _) => Charset::from_label(label),
            (None, Some(site)) => site_charset(site),
            (None, None) => Err(missing_charset()),
        }
    }
}

impl fmt::Debug for NormalizeContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizeContext")
            .field("encoding", &self.encoding)
            .field("site", &self.site.map(|s| s.default_charset()))
            .field("custom_unicode", &self.unicode.is_some())
            .finish()
    }
}

fn missing_charset() -> Error {
    Error::config("either an encoding or a site context must be provided")
}

/// Normalize text into an id-safe string
///
/// # Errors
///
/// - `Error::Config` if the context has neither an encoding nor a site
/// - `Error::UnknownCharset` if byte input names a charset without a codec
///
/// Malformed bytes are decoded lossily rather than rejected.
///
/// # Example
///
/// ```
/// use portalkit_engine::normalize::{normalize_string, NormalizeContext};
///
/// let ctx = NormalizeContext::with_encoding("utf-8");
/// assert_eq!(normalize_string("report.v2.doc", &ctx).unwrap(), "report-v2.doc");
/// ```
pub fn normalize_string<'t>(text: impl Into<TextInput<'t>>, ctx: &NormalizeContext<'_>) -> Result<String> {
    if ctx.encoding.is_none() && ctx.site.is_none() {
        return Err(missing_charset());
    }

    let text: Cow<'t, str> = match text.into() {
        TextInput::Text(text) => text,
        TextInput::Bytes(bytes) => Cow::Owned(decode_lossy(&bytes, ctx.charset()?)),
    };

    let lowered = text.to_lowercase();
    let unicode: &dyn UnicodeNormalizer = match ctx.unicode {
        Some(unicode) => unicode,
        None => &DEFAULT_FOLDING,
    };
    let folded = unicode.normalize(lowered.trim()).to_lowercase();

    Ok(slugify(&folded))
}

/// Normalize with an explicit encoding
///
/// Shorthand for `normalize_string(text, &NormalizeContext::with_encoding(encoding))`.
pub fn normalize_with_encoding<'t>(text: impl Into<TextInput<'t>>, encoding: &str) -> Result<String> {
    normalize_string(text, &NormalizeContext::with_encoding(encoding))
}

fn decode_lossy(bytes: &[u8], charset: Charset) -> String {
    match charset.decode(bytes, ErrorMode::Strict) {
        Ok(text) => text,
        Err(e) => {
            debug!(charset = %charset, error = %e, "replacing undecodable input");
            // Replace mode cannot fail.
            charset
                .decode(bytes, ErrorMode::Replace)
                .unwrap_or_default()
        }
    }
}

/// Split off the extension, hyphenate the base, reassemble.
fn slugify(text: &str) -> String {
    let (base, ext) = match EXTENSION_RE.captures(text) {
        Some(caps) => (
            caps.get(1).map_or("", |m| m.as_str()),
            caps.get(2).map_or("", |m| m.as_str()),
        ),
        None => (text, ""),
    };

    let base = NON_WORD_RE.replace_all(base, "-");
    let base = base.trim_matches('-');

    match (base.is_empty(), ext.is_empty()) {
        (_, true) => base.to_string(),
        (true, false) => ext.to_string(),
        (false, false) => format!("{}.{}", base, ext),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Site(&'static str);

    impl CharsetSource for Site {
        fn default_charset(&self) -> Option<&str> {
            Some(self.0)
        }
    }

    fn norm(text: &str) -> String {
        normalize_with_encoding(text, "utf-8").unwrap()
    }

    #[test]
    fn test_basic() {
        assert_eq!(norm(" Héllo World!! "), "hello-world");
    }

    #[test]
    fn test_extension_preserved() {
        assert_eq!(norm("report.v2.doc"), "report-v2.doc");
        assert_eq!(norm("Photo 1.JPEG"), "photo-1.jpeg");
    }

    #[test]
    fn test_long_suffix_is_not_an_extension() {
        assert_eq!(norm("archive.tar.backup"), "archive-tar-backup");
    }

    #[test]
    fn test_extension_length_limit() {
        let longest = "x".repeat(MAX_EXTENSION_LEN);
        let too_long = "x".repeat(MAX_EXTENSION_LEN + 1);
        assert_eq!(norm(&format!("File.{}", longest)), format!("file.{}", longest));
        assert_eq!(norm(&format!("File.{}", too_long)), format!("file-{}", too_long));
    }

    #[test]
    fn test_trailing_dot() {
        assert_eq!(norm("notes."), "notes");
    }

    #[test]
    fn test_hyphen_runs_collapse() {
        assert_eq!(norm("--a -- b--"), "a-b");
        assert_eq!(norm("a___b"), "a___b");
    }

    #[test]
    fn test_all_symbols() {
        assert_eq!(norm("!!!"), "");
        assert_eq!(norm(""), "");
    }

    #[test]
    fn test_symbols_with_extension_keep_extension() {
        assert_eq!(norm("!!!.txt"), "txt");
    }

    #[test]
    fn test_newline_blocks_extension_split() {
        assert_eq!(norm("a\nb.txt"), "a-b-txt");
    }

    #[test]
    fn test_transliteration_is_lowercased() {
        let out = norm("Ελληνικά");
        assert!(!out.is_empty());
        assert_eq!(out, out.to_lowercase());
    }

    #[test]
    fn test_missing_context_is_config_error() {
        let err = normalize_string("x", &NormalizeContext::default()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_bytes_use_explicit_encoding() {
        let ctx = NormalizeContext::with_encoding("latin-1");
        assert_eq!(normalize_string(b"Caf\xe9 Cr\xe8me", &ctx).unwrap(), "cafe-creme");
    }

    #[test]
    fn test_bytes_use_site_charset() {
        let site = Site("iso-8859-1");
        let ctx = NormalizeContext::with_site(&site);
        assert_eq!(normalize_string(b"\xc9t\xe9", &ctx).unwrap(), "ete");
    }

    #[test]
    fn test_explicit_encoding_wins_over_site() {
        let site = Site("iso-8859-1");
        let ctx = NormalizeContext::with_site(&site).encoding("utf-8");
        // UTF-8 for "é" would read as two Latin-1 characters
        assert_eq!(normalize_string("é".as_bytes(), &ctx).unwrap(), "e");
    }

    #[test]
    fn test_unknown_charset_for_bytes() {
        let ctx = NormalizeContext::with_encoding("ebcdic");
        let err = normalize_string(b"abc", &ctx).unwrap_err();
        assert!(matches!(err, Error::UnknownCharset(_)));
    }

    #[test]
    fn test_text_ignores_charset() {
        // The label is never resolved for text input.
        let ctx = NormalizeContext::with_encoding("ebcdic");
        assert_eq!(normalize_string("Plain Text", &ctx).unwrap(), "plain-text");
    }

    #[test]
    fn test_malformed_bytes_are_coerced() {
        let ctx = NormalizeContext::with_encoding("utf-8");
        assert_eq!(normalize_string(b"ok\xffok", &ctx).unwrap(), "ok-ok");
    }

    #[test]
    fn test_none_input() {
        let ctx = NormalizeContext::with_encoding("utf-8");
        assert_eq!(normalize_string(None::<&str>, &ctx).unwrap(), "none");
    }

    #[test]
    fn test_debug_fallback() {
        let ctx = NormalizeContext::with_encoding("utf-8");
        assert_eq!(normalize_string(TextInput::debug(&42), &ctx).unwrap(), "42");
        assert_eq!(
            normalize_string(TextInput::debug(&vec![1, 2]), &ctx).unwrap(),
            "1-2"
        );
    }

    #[test]
    fn test_custom_unicode_normalizer() {
        struct Stars;
        impl UnicodeNormalizer for Stars {
            fn normalize(&self, text: &str) -> String {
                text.replace('é', "*")
            }
        }
        let ctx = NormalizeContext::with_encoding("utf-8").unicode(&Stars);
        assert_eq!(normalize_string("café au lait", &ctx).unwrap(), "caf-au-lait");
    }

    #[test]
    fn test_locale_folding() {
        let german = AsciiFolding::for_locale("de");
        let ctx = NormalizeContext::with_encoding("utf-8").unicode(&german);
        assert_eq!(normalize_string("Grüße.txt", &ctx).unwrap(), "gruesse.txt");
    }
}
