//! Fix for Meta's broken text encoding.
//!
//! Meta exports UTF-8 text as if it were ISO-8859-1: every UTF-8 byte ends up
//! as its own Unicode codepoint in the JSON string. "café" is stored as
//! "cafÃ©". Reversing that means taking every char as a byte and decoding the
//! bytes as UTF-8 again.

use crate::error::{EncodingErrorKind, FbDataError, Result};

/// Re-decodes a mojibake string into proper UTF-8.
///
/// Fails when a char is above U+00FF (the text was never mangled) or when the
/// resulting bytes are not valid UTF-8 (the text was already correct, like a
/// plain "café").
///
/// # Example
///
/// ```rust
/// use fbdata::parsing::fix_mojibake;
///
/// assert_eq!(fix_mojibake("caf\u{c3}\u{a9}").unwrap(), "café");
/// assert_eq!(fix_mojibake("Hello").unwrap(), "Hello");
/// assert!(fix_mojibake("café").is_err());
/// ```
pub fn fix_mojibake(s: &str) -> Result<String> {
    if s.is_ascii() {
        return Ok(s.to_string());
    }

    let mut bytes = Vec::with_capacity(s.len());
    for c in s.chars() {
        let byte = u8::try_from(u32::from(c))
            .map_err(|_| FbDataError::encoding(s, EncodingErrorKind::Codepoint(c)))?;
        bytes.push(byte);
    }

    String::from_utf8(bytes).map_err(|e| FbDataError::encoding(s, EncodingErrorKind::Utf8(e)))
}

/// Applies [`fix_mojibake`] when `fix_encoding` is set, otherwise copies the
/// text as is.
pub fn normalize_text(s: &str, fix_encoding: bool) -> Result<String> {
    if fix_encoding {
        fix_mojibake(s)
    } else {
        Ok(s.to_string())
    }
}

/// Mangles text the way Meta does: one char per UTF-8 byte.
///
/// Inverse of [`fix_mojibake`]; handy for building fixtures.
pub fn to_mojibake(s: &str) -> String {
    s.bytes().map(char::from).collect()
}
