//! Data model shared by the recording and playback paths.
//!
//! - **Headers** ([`header`]): the two header shapes
//!   - [`WireHeaderSet`]: ordered pairs, names may repeat
//!   - [`RecordedHeaderMap`]: one value per name, persisted as a flat object
//!
//! - **Messages** ([`request`], [`response`]): recorded messages and their
//!   conversions to and from `http` crate types
//!   - [`RecordedHttpRequest`]
//!   - [`RecordedHttpResponse`]
//!
//! - **Error Handling** ([`error`])
//!   - [`CodecError`]: top-level error type
//!   - [`CookieDecodeError`]: cookie token decoding errors

mod header;
pub use header::RecordedHeaderMap;
pub use header::WireHeaderSet;

mod request;
pub use request::RecordedHttpRequest;

mod response;
pub use response::RecordedHttpResponse;

mod error;
pub use error::CodecError;
pub use error::CookieDecodeError;
