//! Expands recorded headers back into wire-level pairs on the playback path.

use tracing::{debug, trace, warn};

use crate::codec::{cookie, latin1};
use crate::consts::MERGE_SEPARATOR;
use crate::protocol::{CodecError, RecordedHeaderMap, WireHeaderSet};

/// Turns a [`RecordedHeaderMap`] back into a [`WireHeaderSet`].
///
/// Each recorded value is split on [`MERGE_SEPARATOR`] only; a bare `,` is
/// left alone. `Set-Cookie` parts are decoded with the cookie codec, every
/// other part is written back one byte per code point, or as utf-8 when it
/// holds a code point above U+00FF.
///
/// For a non-cookie header the round trip only holds when none of its wire
/// values contained [`MERGE_SEPARATOR`]. Such a value comes back as several
/// pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderExpander;

impl HeaderExpander {
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidCookieToken`] naming the header and the
    /// offending token if a `Set-Cookie` part does not decode.
    pub fn expand(&self, recorded: &RecordedHeaderMap) -> Result<WireHeaderSet, CodecError> {
        let mut wire = WireHeaderSet::with_capacity(recorded.len());

        for (name, joined) in recorded.iter() {
            if cookie::is_cookie_header(name) {
                let before = wire.len();
                for token in joined.split(MERGE_SEPARATOR) {
                    let value = cookie::decode_bytes(token).map_err(|e| {
                        warn!(header = name, cause = %e, "failed to decode recorded cookie");
                        CodecError::invalid_cookie_token(name, token, e)
                    })?;
                    wire.append(name, value);
                }
                debug!(header = name, values = wire.len() - before, "decoded cookie values");
            } else {
                wire.extend(joined.split(MERGE_SEPARATOR).map(|part| (name, latin1::encode(part))));
            }
        }

        trace!(recorded_headers = recorded.len(), wire_headers = wire.len(), "expanded headers");
        Ok(wire)
    }
}
