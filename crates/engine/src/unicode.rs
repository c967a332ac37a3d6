//! ASCII folding of Unicode text
//!
//! Pipeline: locale overrides → NFKD decomposition → drop combining marks
//!           → transliterate what is left → hex code point for the rest
//!
//! Case is preserved. The string normalizer lower-cases afterwards.

use portalkit_core::UnicodeNormalizer;
use std::fmt::Write;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// German spells umlauts out instead of dropping the diaeresis.
const GERMAN: &[(char, &str)] = &[
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('Ä', "Ae"),
    ('Ö', "Oe"),
    ('Ü', "Ue"),
    ('ß', "ss"),
];

/// Danish and Norwegian spell ring and slashed letters out.
const NORDIC: &[(char, &str)] = &[
    ('æ', "ae"),
    ('ø', "oe"),
    ('å', "aa"),
    ('Æ', "Ae"),
    ('Ø', "Oe"),
    ('Å', "Aa"),
];

/// Default [`UnicodeNormalizer`]: folds text to ASCII
///
/// # Example
///
/// ```
/// use portalkit_core::UnicodeNormalizer;
/// use portalkit_engine::unicode::AsciiFolding;
///
/// assert_eq!(AsciiFolding::new().normalize("Crème Brûlée"), "Creme Brulee");
/// assert_eq!(AsciiFolding::for_locale("de").normalize("Müller"), "Mueller");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiFolding {
    overrides: &'static [(char, &'static str)],
}

impl AsciiFolding {
    /// Locale-neutral folding
    pub const fn new() -> Self {
        AsciiFolding { overrides: &[] }
    }

    /// Folding with the spelling conventions of a language
    ///
    /// `lang` is a language tag such as `de`, `de-AT` or `nb_NO`; unknown
    /// languages fall back to locale-neutral folding.
    pub fn for_locale(lang: &str) -> Self {
        let primary = lang
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let overrides = match primary.as_str() {
            "de" => GERMAN,
            "da" | "nb" | "nn" | "no" => NORDIC,
            _ => &[],
        };
        AsciiFolding { overrides }
    }

    fn apply_overrides(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            match self.overrides.iter().find(|(c, _)| *c == ch) {
                Some((_, replacement)) => out.push_str(replacement),
                None => out.push(ch),
            }
        }
        out
    }
}

impl UnicodeNormalizer for AsciiFolding {
    fn normalize(&self, text: &str) -> String {
        let text = if self.overrides.is_empty() {
            text.to_string()
        } else {
            self.apply_overrides(text)
        };

        let mut out = String::with_capacity(text.len());
        for ch in text.nfkd() {
            if ch.is_ascii() {
                out.push(ch);
            } else if is_combining_mark(ch) {
                continue;
            } else {
                match deunicode::deunicode_char(ch) {
                    Some(t) if t.is_ascii() => out.push_str(t),
                    _ => {
                        let _ = write!(out, "{:x}", ch as u32);
                    }
                }
            }
        }
        out
    }
}
