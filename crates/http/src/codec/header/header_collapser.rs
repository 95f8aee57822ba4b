//! Collapses wire-level headers into their recorded form.
//!
//! Runs once per captured message on the recording path. Values sharing a
//! name are joined with [`MERGE_SEPARATOR`] in wire order. `Set-Cookie`
//! values are encoded first so the join stays reversible even when a cookie
//! carries a comma. Every other value is recorded one code point per byte.

use std::borrow::Cow;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::codec::{cookie, latin1};
use crate::consts::MERGE_SEPARATOR;
use crate::protocol::{RecordedHeaderMap, WireHeaderSet};

/// Turns a [`WireHeaderSet`] into a [`RecordedHeaderMap`].
///
/// The output holds exactly one entry per distinct input name. Names are
/// compared case-sensitively, so `Set-Cookie` and `set-cookie` are two groups.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderCollapser;

impl HeaderCollapser {
    pub fn collapse(&self, wire: &WireHeaderSet) -> RecordedHeaderMap {
        let mut groups: IndexMap<&str, Vec<Cow<'_, str>>> = IndexMap::new();

        for (name, value) in wire.iter() {
            let value = if cookie::is_cookie_header(name) { Cow::Owned(cookie::encode_bytes(value)) } else { latin1::decode(value) };
            groups.entry(name).or_default().push(value);
        }

        let recorded: RecordedHeaderMap = groups
            .into_iter()
            .map(|(name, values)| {
                if cookie::is_cookie_header(name) {
                    debug!(header = name, values = values.len(), "encoded cookie values");
                }
                (name, values.join(MERGE_SEPARATOR))
            })
            .collect();

        trace!(wire_headers = wire.len(), recorded_headers = recorded.len(), "collapsed headers");
        recorded
    }
}
