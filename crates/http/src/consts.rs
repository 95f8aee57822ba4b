//! Fixed values shared by the collapse and expand directions.
//!
//! Both values are part of the persisted format: recordings written with one
//! separator can only be replayed with the same separator.

/// Joins the wire values of one header name into a single recorded value,
/// and splits it back on replay.
pub const MERGE_SEPARATOR: &str = ", ";

/// The only header name whose values are passed through the cookie codec.
///
/// Compared case-sensitively.
pub const COOKIE_HEADER_NAME: &str = "Set-Cookie";
