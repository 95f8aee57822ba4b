//! Byte-to-text mapping for header values that are recorded as is.
//!
//! Recorded values are strings, wire values are bytes. Every byte maps to the
//! code point of the same value (ISO-8859-1), so any byte sequence, `obs-text`
//! included, is recorded without loss and written back byte for byte.
//!
//! A recorded string holding a code point above U+00FF cannot come from this
//! mapping. Such a value is written back as its utf-8 bytes.

use std::borrow::Cow;

use encoding_rs::mem;

/// Maps wire bytes to recorded text, one code point per byte.
pub(crate) fn decode(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) if text.is_ascii() => Cow::Borrowed(text),
        _ => {
            let mut text = "\0".repeat(bytes.len() * 2);
            let written = mem::convert_latin1_to_str(bytes, text.as_mut_str());
            text.truncate(written);
            Cow::Owned(text)
        }
    }
}

/// Maps recorded text back to wire bytes.
pub(crate) fn encode(text: &str) -> Vec<u8> {
    if !mem::is_str_latin1(text) {
        return text.as_bytes().to_vec();
    }
    let mut bytes = vec![0; text.len()];
    let written = mem::convert_utf8_to_latin1_lossy(text.as_bytes(), &mut bytes);
    bytes.truncate(written);
    bytes
}
