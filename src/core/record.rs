//! The record produced by reading a text resource
//!
//! A record is a fixed `body` plus an open map of front matter fields. The
//! `_encoding` field is lifted out into its own slot because it drives the
//! output encoding of a later write.

use crate::core::value::FrontMatterValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key under which the body is stored in front matter and serialized records
pub const BODY_KEY: &str = "body";

/// Key under which an output encoding override is stored
pub const ENCODING_KEY: &str = "_encoding";

/// Front matter fields and body of a text resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedRecord {
    #[serde(flatten)]
    metadata: BTreeMap<String, FrontMatterValue>,
    #[serde(default)]
    body: String,
    #[serde(rename = "_encoding", default, skip_serializing_if = "Option::is_none")]
    encoding: Option<String>,
}

impl ParsedRecord {
    /// Create a record from front matter fields and a body.
    ///
    /// A `body` entry in `metadata` is dropped; the `body` argument wins.
    pub fn new(mut metadata: BTreeMap<String, FrontMatterValue>, body: impl Into<String>) -> Self {
        metadata.remove(BODY_KEY);
        Self {
            metadata,
            body: body.into(),
            encoding: None,
        }
    }

    /// Create a record with only a body
    pub fn body_only(body: impl Into<String>) -> Self {
        Self::new(BTreeMap::new(), body)
    }

    /// Set the `_encoding` slot; empty labels clear it
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        let encoding = encoding.into();
        self.encoding = (!encoding.is_empty()).then_some(encoding);
        self
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_body(self) -> String {
        self.body
    }

    /// Encoding override carried by the record, if any
    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref().filter(|e| !e.is_empty())
    }

    /// Front matter fields other than `body` and a lifted `_encoding`
    pub fn metadata(&self) -> &BTreeMap<String, FrontMatterValue> {
        &self.metadata
    }

    /// Get a front matter field by name
    pub fn get(&self, key: &str) -> Option<&FrontMatterValue> {
        self.metadata.get(key)
    }

    pub fn has_metadata(&self) -> bool {
        !self.metadata.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_record_has_empty_body() {
        let record = ParsedRecord::default();
        assert_eq!(record.body(), "");
        assert_eq!(record.encoding(), None);
        assert!(!record.has_metadata());
    }

    #[test]
    fn test_new_drops_body_from_metadata() {
        let mut metadata = BTreeMap::new();
        metadata.insert("body".to_string(), FrontMatterValue::string("inline"));
        metadata.insert("title".to_string(), FrontMatterValue::string("X"));

        let record = ParsedRecord::new(metadata, "trailing");
        assert_eq!(record.body(), "trailing");
        assert!(record.get("body").is_none());
        assert_eq!(record.get("title").unwrap().as_string(), Some("X"));
    }

    #[test]
    fn test_empty_encoding_is_ignored() {
        let record = ParsedRecord::body_only("x").with_encoding("");
        assert_eq!(record.encoding(), None);

        let record = record.with_encoding("latin1");
        assert_eq!(record.encoding(), Some("latin1"));
        assert_eq!(record.into_body(), "x");
    }

    #[test]
    fn test_serializes_flat() {
        let mut metadata = BTreeMap::new();
        metadata.insert("title".to_string(), FrontMatterValue::string("Hello"));
        let record = ParsedRecord::new(metadata, "Text").with_encoding("utf8");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "title": "Hello", "body": "Text", "_encoding": "utf8" })
        );
    }

    #[test]
    fn test_deserializes_flat() {
        let record: ParsedRecord =
            serde_yaml::from_str("title: Hello\nbody: Text\n_encoding: ascii\n").unwrap();
        assert_eq!(record.body(), "Text");
        assert_eq!(record.encoding(), Some("ascii"));
        assert_eq!(record.get("title").unwrap().as_string(), Some("Hello"));
        assert_eq!(record.metadata().len(), 1);
    }
}
