//! Header codec for recording and replaying HTTP traffic
//!
//! This module reconciles the two shapes a header collection takes in a
//! record/replay system: the wire shape, where a name may repeat, and the
//! recorded shape, where every name maps to a single string.
//!
//! # Architecture
//!
//! - Recording path:
//!   - [`HeaderCollapser`]: joins repeated values with the merge separator
//!
//! - Playback path:
//!   - [`HeaderExpander`]: splits the recorded value back into wire values
//!
//! - Shared:
//!   - [`cookie`]: value-safe encoding applied to `Set-Cookie` values only
//!   - `latin1`: byte-per-code-point mapping for every other value
//!
//! # Example
//!
//! ```
//! use flashback_http::codec::{HeaderCollapser, HeaderExpander};
//! use flashback_http::protocol::WireHeaderSet;
//!
//! let mut wire = WireHeaderSet::new();
//! wire.append("Set-Cookie", "a=1; Expires=Thu, 23-Mar-2017 18:01:20 GMT");
//! wire.append("Set-Cookie", "b=2; Path=/");
//! wire.append("Vary", "Accept");
//!
//! let recorded = HeaderCollapser.collapse(&wire);
//! assert_eq!(recorded.len(), 2);
//!
//! let replayed = HeaderExpander.expand(&recorded).unwrap();
//! assert_eq!(replayed, wire);
//! ```
//!
//! # Limitations
//!
//! A non-cookie value that itself contains `", "` is split into several
//! values on replay. Changing the separator or escaping would break existing
//! recordings, so this is left as is.
//!
//! Non-cookie values are recorded one code point per byte, so non-ASCII utf-8
//! shows up as its individual bytes in the recording.

pub mod cookie;
pub(crate) mod header;
mod latin1;

pub use header::HeaderCollapser;
pub use header::HeaderExpander;
