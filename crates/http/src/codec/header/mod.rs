//! Header transcoding between the wire and the recording.
//!
//! # Components
//!
//! - [`HeaderCollapser`]: wire-level headers into recorded headers
//!   - Groups values by name, preserving wire order
//!   - Encodes `Set-Cookie` values before joining
//!
//! - [`HeaderExpander`]: recorded headers into wire-level headers
//!   - Splits on the merge separator
//!   - Decodes `Set-Cookie` tokens after splitting
//!
//! Both are stateless. A single value can be shared freely between threads.

mod header_collapser;
mod header_expander;

pub use header_collapser::HeaderCollapser;
pub use header_expander::HeaderExpander;
