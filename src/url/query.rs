//! Ordered query-string parameters with read-modify-write semantics.
//!
//! Pairs are stored in their raw, still-encoded form so that parameters an
//! update does not touch are written back exactly as they were read.

use super::encoding::{decode_component, encode_component};

/// A single `key=value` segment of a query string.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawPair {
    key: String,
    /// `None` for a bare key with no `=`.
    value: Option<String>,
}

/// Query parameters in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<RawPair>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a query string (the part after the first `?`).
    ///
    /// Every segment is kept, including empty ones and any further leading
    /// `?`, so untouched text is written back exactly as it was read.
    pub fn parse(query: &str) -> Self {
        if query.is_empty() {
            return Self::default();
        }

        let pairs = query
            .split('&')
            .map(|segment| {
                let mut kv = segment.splitn(2, '=');
                let key = kv.next().unwrap_or("").to_string();
                let value = kv.next().map(str::to_string);
                RawPair { key, value }
            })
            .collect();

        Self { pairs }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns the decoded value of the first pair with `key`. A bare key
    /// reads as the empty string.
    pub fn get(&self, key: &str) -> Option<String> {
        self.pairs
            .iter()
            .find(|pair| pair.key == key)
            .map(|pair| decode_component(pair.value.as_deref().unwrap_or("")))
    }

    /// Sets `key` to the encoded form of `value`.
    ///
    /// The first existing pair keeps its position; any later duplicates are
    /// dropped. A new key is appended.
    pub fn set(&mut self, key: &str, value: &str) {
        let encoded = encode_component(value);
        match self.pairs.iter().position(|pair| pair.key == key) {
            Some(index) => {
                self.pairs[index].value = Some(encoded);
                let mut seen = 0usize;
                self.pairs.retain(|pair| {
                    if pair.key != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push(RawPair {
                key: key.to_string(),
                value: Some(encoded),
            }),
        }
    }

    /// Removes every pair named `key`. Returns true if anything was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|pair| pair.key != key);
        self.pairs.len() != before
    }

    /// Removes every pair whose key is in `keys`.
    pub fn remove_all(&mut self, keys: &[&str]) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|pair| !keys.contains(&pair.key.as_str()));
        self.pairs.len() != before
    }

    /// Serializes back to a query string (without the leading `?`).
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|pair| match &pair.value {
                Some(value) => format!("{}={}", pair.key, value),
                None => pair.key.clone(),
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}
