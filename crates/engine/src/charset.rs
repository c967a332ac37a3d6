//! Site charsets
//!
//! A site stores text in one configured charset (UTF-8 unless told
//! otherwise). This module resolves charset labels, decodes byte input for
//! the normalizer and converts between the site charset and UTF-8.
//!
//! Supported charsets: UTF-8, ISO-8859-1 (Latin-1) and US-ASCII.

use portalkit_core::limits::DEFAULT_CHARSET;
use portalkit_core::{CharsetSource, Error, Result};
use std::fmt;

/// What to do with bytes or characters a charset cannot represent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail with `Error::Encoding`
    #[default]
    Strict,
    /// Substitute U+FFFD when decoding, `?` when encoding
    Replace,
    /// Drop the offending input
    Ignore,
}

/// A charset known to the site helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    /// UTF-8
    Utf8,
    /// ISO-8859-1
    Latin1,
    /// US-ASCII
    Ascii,
}

impl Charset {
    /// Resolve a charset label
    ///
    /// Labels are matched case-insensitively; `_` and `-` are interchangeable.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownCharset` for labels without a codec.
    pub fn from_label(label: &str) -> Result<Self> {
        let key = label.trim().to_ascii_lowercase().replace('_', "-");
        match key.as_str() {
            "utf-8" | "utf8" => Ok(Charset::Utf8),
            "iso-8859-1" | "iso8859-1" | "latin-1" | "latin1" | "l1" | "cp819" => {
                Ok(Charset::Latin1)
            }
            "us-ascii" | "ascii" | "646" => Ok(Charset::Ascii),
            _ => Err(Error::UnknownCharset(label.to_string())),
        }
    }

    /// Canonical label
    pub const fn name(&self) -> &'static str {
        match self {
            Charset::Utf8 => "utf-8",
            Charset::Latin1 => "iso-8859-1",
            Charset::Ascii => "us-ascii",
        }
    }

    /// Decode bytes in this charset
    ///
    /// # Errors
    ///
    /// Returns `Error::Encoding` in `Strict` mode when the bytes are invalid.
    pub fn decode(&self, bytes: &[u8], mode: ErrorMode) -> Result<String> {
        match self {
            Charset::Utf8 => decode_utf8(bytes, mode),
            Charset::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
            Charset::Ascii => {
                let mut out = String::with_capacity(bytes.len());
                for (offset, &b) in bytes.iter().enumerate() {
                    if b.is_ascii() {
                        out.push(b as char);
                        continue;
                    }
                    match mode {
                        ErrorMode::Strict => {
                            return Err(Error::encoding(
                                self.name(),
                                format!("byte 0x{:02x} at offset {}", b, offset),
                            ))
                        }
                        ErrorMode::Replace => out.push(char::REPLACEMENT_CHARACTER),
                        ErrorMode::Ignore => {}
                    }
                }
                Ok(out)
            }
        }
    }

    /// Encode text in this charset
    ///
    /// # Errors
    ///
    /// Returns `Error::Encoding` in `Strict` mode when a character has no
    /// representation in the charset.
    pub fn encode(&self, text: &str, mode: ErrorMode) -> Result<Vec<u8>> {
        let limit = match self {
            Charset::Utf8 => return Ok(text.as_bytes().to_vec()),
            Charset::Latin1 => 0xFF,
            Charset::Ascii => 0x7F,
        };

        let mut out = Vec::with_capacity(text.len());
        for (offset, ch) in text.chars().enumerate() {
            let code = ch as u32;
            if code <= limit {
                out.push(code as u8);
                continue;
            }
            match mode {
                ErrorMode::Strict => {
                    return Err(Error::encoding(
                        self.name(),
                        format!("character {:?} at position {}", ch, offset),
                    ))
                }
                ErrorMode::Replace => out.push(b'?'),
                ErrorMode::Ignore => {}
            }
        }
        Ok(out)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn decode_utf8(bytes: &[u8], mode: ErrorMode) -> Result<String> {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    let mut consumed = 0;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                return Ok(out);
            }
            Err(e) => {
                let (valid, after) = rest.split_at(e.valid_up_to());
                // Safe: `valid_up_to` marks the end of a valid prefix.
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());

                if mode == ErrorMode::Strict {
                    return Err(Error::encoding(
                        Charset::Utf8.name(),
                        format!("invalid byte sequence at offset {}", consumed + valid.len()),
                    ));
                }
                if mode == ErrorMode::Replace {
                    out.push(char::REPLACEMENT_CHARACTER);
                }

                match e.error_len() {
                    Some(len) => {
                        consumed += valid.len() + len;
                        rest = &after[len..];
                    }
                    // Truncated sequence at the end of input
                    None => return Ok(out),
                }
            }
        }
    }
}

/// The charset configured by a site, `utf-8` when unset
///
/// # Errors
///
/// Returns `Error::UnknownCharset` if the configured label has no codec.
pub fn site_charset<S: CharsetSource + ?Sized>(site: &S) -> Result<Charset> {
    Charset::from_label(site.default_charset().unwrap_or(DEFAULT_CHARSET))
}

/// Convert text stored in the site charset to UTF-8
///
/// With a UTF-8 site the input is only validated and returned as is.
///
/// # Errors
///
/// `Error::Encoding` in `Strict` mode for undecodable input,
/// `Error::UnknownCharset` for an unsupported site charset.
pub fn portal_to_utf8<S: CharsetSource + ?Sized>(
    site: &S,
    bytes: &[u8],
    mode: ErrorMode,
) -> Result<Vec<u8>> {
    let charset = site_charset(site)?;
    if charset == Charset::Utf8 {
        decode_utf8(bytes, mode)?;
        return Ok(bytes.to_vec());
    }
    Ok(charset.decode(bytes, mode)?.into_bytes())
}

/// Convert UTF-8 text to the site charset
///
/// With a UTF-8 site the input is only validated and returned as is.
///
/// # Errors
///
/// `Error::Encoding` in `Strict` mode for unrepresentable input,
/// `Error::UnknownCharset` for an unsupported site charset.
pub fn utf8_to_portal<S: CharsetSource + ?Sized>(
    site: &S,
    bytes: &[u8],
    mode: ErrorMode,
) -> Result<Vec<u8>> {
    let charset = site_charset(site)?;
    let text = decode_utf8(bytes, mode)?;
    if charset == Charset::Utf8 {
        return Ok(bytes.to_vec());
    }
    charset.encode(&text, mode)
}
