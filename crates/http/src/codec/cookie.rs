//! Value-safe encoding for `Set-Cookie` values.
//!
//! Cookie values routinely contain commas (`Expires=Thu, 23-Mar-2017 ...`), so
//! joining them with [`MERGE_SEPARATOR`](crate::consts::MERGE_SEPARATOR) would
//! be ambiguous. Each value is turned into a standard base64 token first. The
//! base64 alphabet has neither `,` nor ` `, so a token can never contain the
//! separator and the joined string splits back into exactly the same tokens.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::consts::COOKIE_HEADER_NAME;
use crate::protocol::CookieDecodeError;

/// Returns true if values of `name` go through the cookie codec.
#[inline]
pub(crate) fn is_cookie_header(name: &str) -> bool {
    name == COOKIE_HEADER_NAME
}

/// Encodes one wire value into an opaque token.
///
/// Total and deterministic: the same value always yields the same token.
pub fn encode(value: &str) -> String {
    encode_bytes(value.as_bytes())
}

/// Encodes the raw bytes of one wire value, which need not be utf-8.
pub fn encode_bytes(value: &[u8]) -> String {
    STANDARD.encode(value)
}

/// Decodes a token produced by [`encode`] back into the original value.
///
/// # Errors
///
/// Returns [`CookieDecodeError`] if `token` is not valid padded base64, or if
/// the decoded bytes are not utf-8.
pub fn decode(token: &str) -> Result<String, CookieDecodeError> {
    Ok(String::from_utf8(decode_bytes(token)?)?)
}

/// Decodes a token back into the raw bytes of the wire value.
///
/// # Errors
///
/// Returns [`CookieDecodeError::InvalidBase64`] if `token` is not valid padded base64.
pub fn decode_bytes(token: &str) -> Result<Vec<u8>, CookieDecodeError> {
    Ok(STANDARD.decode(token)?)
}
