//! Header codec for an HTTP record/replay system
//!
//! HTTP lets a header name appear several times on the wire, and `Set-Cookie`
//! relies on that heavily. A recording, on the other hand, stores headers as a
//! flat string-to-string mapping so it can be kept as plain key/value data such
//! as a JSON object. This crate converts between the two without losing values,
//! their order, or their bytes.
//!
//! # Features
//!
//! - Reversible merge of repeated header values
//! - Value-safe encoding of `Set-Cookie` values, whose attributes contain commas
//! - Recorded request and response types that serialize with `serde`
//! - Conversions to and from `http::Request` / `http::Response`
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use http::{Response, StatusCode, header};
//! use flashback_http::protocol::RecordedHttpResponse;
//!
//! let response = Response::builder()
//!     .status(StatusCode::OK)
//!     .header(header::SET_COOKIE, "a=1; Expires=Thu, 23-Mar-2017 18:01:20 GMT")
//!     .header(header::SET_COOKIE, "b=2; Path=/")
//!     .body(Bytes::from_static(b"Hello World!"))
//!     .unwrap();
//!
//! // recording path
//! let recorded = RecordedHttpResponse::from_response(&response);
//! assert_eq!(recorded.headers().len(), 1);
//!
//! // playback path
//! let replayed = recorded.into_response().unwrap();
//! let cookies: Vec<_> = replayed.headers().get_all(header::SET_COOKIE).iter().collect();
//! assert_eq!(cookies, vec!["a=1; Expires=Thu, 23-Mar-2017 18:01:20 GMT", "b=2; Path=/"]);
//! ```
//!
//! # Architecture
//!
//! - [`codec`]: the collapser, the expander and the cookie codec
//! - [`protocol`]: header collections, recorded messages and errors
//! - [`consts`]: the merge separator and the cookie header name
//!
//! # Error Handling
//!
//! - [`protocol::CodecError`]: top-level error type
//! - [`protocol::CookieDecodeError`]: a recorded cookie token that does not decode
//!
//! Collapsing never fails. Expanding fails only on a cookie token that was not
//! produced by the cookie codec, and the error names the offending header so
//! the replay pipeline can fail that response instead of serving corrupt data.
//!
//! # Limitations
//!
//! - Only `Set-Cookie`, spelled exactly so, gets the value-safe encoding
//! - A non-cookie value containing `", "` comes back as several values

pub mod codec;
pub mod consts;
pub mod protocol;
