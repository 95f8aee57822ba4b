//! Header collections on both sides of the recording boundary.
//!
//! - [`WireHeaderSet`] is what the transport sees: an ordered list of
//!   `(name, value)` pairs where a name may repeat. Values are raw bytes.
//! - [`RecordedHeaderMap`] is what gets persisted: one string value per name.
//!
//! Header names are kept exactly as the transport provided them. No case
//! folding or validation happens here.

use http::{HeaderMap, HeaderName, HeaderValue};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::consts::COOKIE_HEADER_NAME;
use crate::protocol::CodecError;

/// Wire-level headers, duplicates allowed, insertion order kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireHeaderSet {
    entries: Vec<(String, Vec<u8>)>,
}

impl WireHeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    /// Appends a pair, never replacing an earlier value of the same name.
    pub fn append<N: Into<String>, V: Into<Vec<u8>>>(&mut self, name: N, value: V) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value.as_slice()))
    }

    /// Returns every value carried under `name`, in wire order.
    ///
    /// The name comparison is case-sensitive.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a [u8]> {
        self.iter().filter(move |(n, _)| *n == name).map(|(_, value)| value)
    }

    /// Returns the distinct header names in the order they were first seen.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|(name, _)| name).collect::<IndexSet<_>>().into_iter().collect()
    }

    pub fn into_vec(self) -> Vec<(String, Vec<u8>)> {
        self.entries
    }

    /// Builds an [`http::HeaderMap`] for handing the headers back to the transport.
    ///
    /// Every pair is appended so repeated names keep all their values.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidHeaderName`] or [`CodecError::InvalidHeaderValue`]
    /// when a pair cannot be represented by the `http` crate.
    pub fn to_header_map(&self) -> Result<HeaderMap, CodecError> {
        let mut map = HeaderMap::with_capacity(self.len());
        for (name, value) in self.iter() {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| CodecError::invalid_header_name(name, e))?;
            let header_value =
                HeaderValue::from_bytes(value).map_err(|e| CodecError::invalid_header_value(name, String::from_utf8_lossy(value), e))?;
            map.append(header_name, header_value);
        }
        Ok(map)
    }
}

impl<N: Into<String>, V: Into<Vec<u8>>> FromIterator<(N, V)> for WireHeaderSet {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<N: Into<String>, V: Into<Vec<u8>>> Extend<(N, V)> for WireHeaderSet {
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.append(name, value);
        }
    }
}

impl IntoIterator for WireHeaderSet {
    type Item = (String, Vec<u8>);
    type IntoIter = std::vec::IntoIter<(String, Vec<u8>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Reads the headers of an `http` message, value bytes untouched.
///
/// `HeaderMap` stores names in lowercase, so `set-cookie` is spelled as
/// [`COOKIE_HEADER_NAME`] to keep it eligible for the cookie codec. All other
/// names keep the lowercase form.
impl From<&HeaderMap> for WireHeaderSet {
    fn from(map: &HeaderMap) -> Self {
        let mut set = Self::with_capacity(map.len());
        for (name, value) in map {
            let name = if *name == http::header::SET_COOKIE { COOKIE_HEADER_NAME } else { name.as_str() };
            set.append(name, value.as_bytes());
        }
        set
    }
}

#[cfg(test)]
impl WireHeaderSet {
    /// Values of `name` as text, for assertions on utf-8 fixtures.
    pub(crate) fn get_all_str<'a>(&'a self, name: &'a str) -> Vec<&'a str> {
        self.get_all(name).map(|value| std::str::from_utf8(value).unwrap()).collect()
    }
}

/// Recorded headers: exactly one value per distinct name.
///
/// Serializes as a flat string-to-string object, keeping the order in which
/// names were inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordedHeaderMap {
    inner: IndexMap<String, String>,
}

impl RecordedHeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning the one previously stored under `name`.
    pub fn insert<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) -> Option<String> {
        self.inner.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for RecordedHeaderMap {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self { inner: iter.into_iter().map(|(name, value)| (name.into(), value.into())).collect() }
    }
}
