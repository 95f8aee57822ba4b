use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CookieDecodeError {
    #[error("invalid base64 token: {source}")]
    InvalidBase64 {
        #[from]
        source: base64::DecodeError,
    },

    #[error("decoded token is not utf-8: {source}")]
    InvalidUtf8 {
        #[from]
        source: FromUtf8Error,
    },
}

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("invalid cookie token in header {name}: {value}, cause: {source}")]
    InvalidCookieToken { name: String, value: String, source: CookieDecodeError },

    #[error("invalid header name: {name}, cause: {source}")]
    InvalidHeaderName { name: String, source: http::header::InvalidHeaderName },

    #[error("invalid value for header {name}: {value}, cause: {source}")]
    InvalidHeaderValue { name: String, value: String, source: http::header::InvalidHeaderValue },

    #[error("invalid status code: {status}, cause: {source}")]
    InvalidStatus { status: u16, source: http::status::InvalidStatusCode },

    #[error("invalid http method: {method}, cause: {source}")]
    InvalidMethod { method: String, source: http::method::InvalidMethod },

    #[error("invalid http uri: {uri}, cause: {source}")]
    InvalidUri { uri: String, source: http::uri::InvalidUri },
}

impl CodecError {
    pub fn invalid_cookie_token<N: ToString, V: ToString>(name: N, value: V, source: CookieDecodeError) -> Self {
        Self::InvalidCookieToken { name: name.to_string(), value: value.to_string(), source }
    }

    pub fn invalid_header_name<N: ToString>(name: N, source: http::header::InvalidHeaderName) -> Self {
        Self::InvalidHeaderName { name: name.to_string(), source }
    }

    pub fn invalid_header_value<N: ToString, V: ToString>(name: N, value: V, source: http::header::InvalidHeaderValue) -> Self {
        Self::InvalidHeaderValue { name: name.to_string(), value: value.to_string(), source }
    }

    pub fn invalid_status(status: u16, source: http::status::InvalidStatusCode) -> Self {
        Self::InvalidStatus { status, source }
    }

    pub fn invalid_method<S: ToString>(method: S, source: http::method::InvalidMethod) -> Self {
        Self::InvalidMethod { method: method.to_string(), source }
    }

    pub fn invalid_uri<S: ToString>(uri: S, source: http::uri::InvalidUri) -> Self {
        Self::InvalidUri { uri: uri.to_string(), source }
    }
}
