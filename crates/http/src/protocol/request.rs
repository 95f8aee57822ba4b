//! Recorded HTTP request.
//!
//! Built from an `http::Request` on the recording path, and turned back into
//! one when a replayed request has to be matched or re-sent. Method and URI
//! are stored as text; their parsing belongs to the `http` crate.

use bytes::Bytes;
use http::request::Parts;
use http::{Method, Request, Uri};
use serde::{Deserialize, Serialize};

use crate::codec::{HeaderCollapser, HeaderExpander};
use crate::protocol::{CodecError, RecordedHeaderMap, WireHeaderSet};

/// A request as persisted in a recording.
///
/// The body is kept as opaque bytes and is `None` when the request had none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedHttpRequest {
    method: String,
    uri: String,
    headers: RecordedHeaderMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<Bytes>,
}

impl RecordedHttpRequest {
    pub fn new<M: Into<String>, U: Into<String>>(method: M, uri: U, headers: RecordedHeaderMap, body: Option<Bytes>) -> Self {
        Self { method: method.into(), uri: uri.into(), headers, body }
    }

    /// Records an `http` request, collapsing its headers.
    pub fn from_request<B: AsRef<[u8]>>(request: &Request<B>) -> Self {
        Self::record(request.method(), request.uri(), &WireHeaderSet::from(request.headers()), request.body().as_ref())
    }

    /// Records a request split into its head and an already collected body.
    pub fn from_parts(parts: &Parts, body: &[u8]) -> Self {
        Self::record(&parts.method, &parts.uri, &WireHeaderSet::from(&parts.headers), body)
    }

    fn record(method: &Method, uri: &Uri, headers: &WireHeaderSet, body: &[u8]) -> Self {
        Self {
            method: method.as_str().to_owned(),
            uri: uri.to_string(),
            headers: HeaderCollapser.collapse(headers),
            body: (!body.is_empty()).then(|| Bytes::copy_from_slice(body)),
        }
    }

    /// Rebuilds the `http` request, expanding recorded headers.
    ///
    /// # Errors
    ///
    /// Returns an error if the method, the URI or a header cannot be parsed
    /// back, including a `Set-Cookie` token that does not decode.
    pub fn into_request(self) -> Result<Request<Bytes>, CodecError> {
        let method = Method::from_bytes(self.method.as_bytes()).map_err(|e| CodecError::invalid_method(&self.method, e))?;
        let uri = self.uri.parse::<Uri>().map_err(|e| CodecError::invalid_uri(&self.uri, e))?;
        let headers = HeaderExpander.expand(&self.headers)?.to_header_map()?;

        let mut request = Request::new(self.body.unwrap_or_default());
        *request.method_mut() = method;
        *request.uri_mut() = uri;
        *request.headers_mut() = headers;
        Ok(request)
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn headers(&self) -> &RecordedHeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }
}
