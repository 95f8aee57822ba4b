//! Recorded HTTP response.
//!
//! A response is recorded once and served back for every matching replayed
//! request, so [`RecordedHttpResponse::into_response`] is the hot path of
//! playback.

use bytes::Bytes;
use http::response::Parts;
use http::{HeaderMap, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::codec::{HeaderCollapser, HeaderExpander};
use crate::protocol::{CodecError, RecordedHeaderMap, WireHeaderSet};

/// A response as persisted in a recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedHttpResponse {
    status: u16,
    headers: RecordedHeaderMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<Bytes>,
}

impl RecordedHttpResponse {
    pub fn new(status: u16, headers: RecordedHeaderMap, body: Option<Bytes>) -> Self {
        Self { status, headers, body }
    }

    /// Records an `http` response, collapsing its headers.
    pub fn from_response<B: AsRef<[u8]>>(response: &Response<B>) -> Self {
        Self::record(response.status(), response.headers(), response.body().as_ref())
    }

    /// Records a response split into its head and an already collected body.
    pub fn from_parts(parts: &Parts, body: &[u8]) -> Self {
        Self::record(parts.status, &parts.headers, body)
    }

    fn record(status: StatusCode, headers: &HeaderMap, body: &[u8]) -> Self {
        let headers = HeaderCollapser.collapse(&WireHeaderSet::from(headers));
        Self { status: status.as_u16(), headers, body: (!body.is_empty()).then(|| Bytes::copy_from_slice(body)) }
    }

    /// Rebuilds the `http` response to serve on replay.
    ///
    /// Every expanded header pair is appended, so a name recorded with several
    /// values is served with all of them. A missing body becomes an empty one.
    ///
    /// # Errors
    ///
    /// Returns an error if the status code is out of range, a header cannot be
    /// represented, or a `Set-Cookie` token does not decode.
    pub fn into_response(self) -> Result<Response<Bytes>, CodecError> {
        let status = StatusCode::from_u16(self.status).map_err(|e| CodecError::invalid_status(self.status, e))?;
        let wire = HeaderExpander.expand(&self.headers)?;
        let headers = wire.to_header_map()?;
        trace!(status = self.status, headers = wire.len(), "rebuilt recorded response");

        let mut response = Response::new(self.body.unwrap_or_default());
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &RecordedHeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use http::{HeaderValue, header};

    use super::*;
    use crate::codec::header::fixtures::{COOKIES, ENCODED_COOKIES};
    use crate::consts::COOKIE_HEADER_NAME;

    fn recorded_headers(pairs: &[(&str, &str)]) -> RecordedHeaderMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn from_without_body() {
        let headers = recorded_headers(&[("key1", "value1"), ("key2", "value2, value3, value4")]);

        let response = RecordedHttpResponse::new(200, headers, None).into_response().unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get("key1"), Some(&HeaderValue::from_static("value1")));

        let values: Vec<_> = response.headers().get_all("key2").iter().collect();
        assert_eq!(values, vec!["value2", "value3", "value4"]);
        assert!(response.body().is_empty());
    }

    #[test]
    fn from_with_body() {
        let headers = recorded_headers(&[("key1", "value1"), ("key2", "value2,value3,value4")]);

        let response = RecordedHttpResponse::new(200, headers, Some(Bytes::from_static(b"Hello world"))).into_response().unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let values: Vec<_> = response.headers().get_all("key2").iter().collect();
        assert_eq!(values, vec!["value2,value3,value4"]);
        assert_eq!(response.body(), &Bytes::from_static(b"Hello world"));
    }

    #[test]
    fn cookie_header() {
        let headers = recorded_headers(&[("key1", "value1"), (COOKIE_HEADER_NAME, ENCODED_COOKIES)]);

        let response = RecordedHttpResponse::new(200, headers, Some(Bytes::from_static(b"Hello world"))).into_response().unwrap();

        let cookies: Vec<_> = response.headers().get_all(header::SET_COOKIE).iter().collect();
        assert_eq!(cookies, COOKIES.to_vec());
    }

    #[test]
    fn non_cookie_header() {
        let headers = recorded_headers(&[("key1", "value1"), ("Not-Set-Cookie", ENCODED_COOKIES)]);

        let response = RecordedHttpResponse::new(200, headers, None).into_response().unwrap();

        let values: Vec<_> = response.headers().get_all("Not-Set-Cookie").iter().collect();
        assert_eq!(values.len(), 5);
        for cookie in COOKIES {
            assert!(!values.contains(&&HeaderValue::from_static(cookie)));
        }
    }

    #[test]
    fn invalid_cookie_token_fails_the_response() {
        let headers = recorded_headers(&[(COOKIE_HEADER_NAME, "a=1; Path=/")]);

        let error = RecordedHttpResponse::new(200, headers, None).into_response().unwrap_err();

        assert!(matches!(error, CodecError::InvalidCookieToken { name, .. } if name == COOKIE_HEADER_NAME));
    }

    #[test]
    fn invalid_status_is_rejected() {
        let error = RecordedHttpResponse::new(1000, RecordedHeaderMap::new(), None).into_response().unwrap_err();
        assert!(matches!(error, CodecError::InvalidStatus { status: 1000, .. }));
    }

    #[test]
    fn record_then_replay() {
        let original = Response::builder()
            .status(StatusCode::CREATED)
            .header(header::SET_COOKIE, COOKIES[0])
            .header(header::SET_COOKIE, COOKIES[4])
            .header(header::CONTENT_TYPE, "text/plain")
            .body("created")
            .unwrap();

        let recorded = RecordedHttpResponse::from_response(&original);
        assert_eq!(recorded.status(), 201);
        assert_eq!(recorded.headers().get("content-type"), Some("text/plain"));

        let json = serde_json::to_string(&recorded).unwrap();
        let replayed = serde_json::from_str::<RecordedHttpResponse>(&json).unwrap().into_response().unwrap();

        assert_eq!(replayed.status(), StatusCode::CREATED);
        assert_eq!(replayed.headers(), original.headers());
        assert_eq!(replayed.body(), &Bytes::from_static(b"created"));
    }

    #[test]
    fn from_parts_without_body() {
        let (parts, ()) = Response::builder().status(StatusCode::NO_CONTENT).body(()).unwrap().into_parts();

        let recorded = RecordedHttpResponse::from_parts(&parts, &[]);

        assert_eq!(recorded.status(), 204);
        assert!(recorded.headers().is_empty());
        assert_eq!(recorded.body(), None);
    }

    #[test]
    fn record_then_replay_non_utf8_values() {
        let original = Response::builder()
            .status(StatusCode::OK)
            .header(header::SET_COOKIE, HeaderValue::from_bytes(b"name=caf\xe9; Path=/").unwrap())
            .header(header::CONTENT_TYPE, "text/plain")
            .header("x-label", HeaderValue::from_bytes(b"caf\xe9").unwrap())
            .body(Bytes::new())
            .unwrap();

        let recorded = RecordedHttpResponse::from_response(&original);
        assert_eq!(recorded.headers().get(COOKIE_HEADER_NAME), Some("bmFtZT1jYWbpOyBQYXRoPS8="));
        assert_eq!(recorded.headers().get("x-label"), Some("caf\u{e9}"));

        let json = serde_json::to_string(&recorded).unwrap();
        let replayed = serde_json::from_str::<RecordedHttpResponse>(&json).unwrap().into_response().unwrap();

        assert_eq!(replayed.headers(), original.headers());
        assert_eq!(replayed.headers().get(header::SET_COOKIE).unwrap().as_bytes(), b"name=caf\xe9; Path=/");
    }
}
