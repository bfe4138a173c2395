//! Splitting front matter from the body of a text resource
//!
//! A resource may open with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: An interesting muse...
//! ---
//! Space is shaped!
//! ```
//!
//! Three shapes are recognised. A well-fenced block yields its YAML fields
//! plus the text after the closing fence as the body. A document that opens
//! with `---` but never closes it is all front matter, and its body is empty
//! unless the YAML itself declares one. Anything else is body only.
//!
//! The work is done by small stages, each a plain function of its inputs:
//! `locate` finds the sections, `parse_metadata` reads the YAML,
//! `take_inline_body` pulls out a `body:` field, `apply_trailing_body` lets
//! trailing text win over it, and `finish` assembles the record.

use crate::core::record::{ParsedRecord, BODY_KEY, ENCODING_KEY};
use crate::core::value::FrontMatterValue;
use crate::error::{Result, TextModeError};
use log::trace;
use regex::Regex;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::sync::LazyLock;

const FENCE: &str = "---";

/// `---`, one or more characters, then a line that is exactly `---`.
/// `^`/`$` match at every line boundary, including `\r\n` and bare `\r`.
static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?msR)^---(.+?)^---$").expect("fence pattern is valid"));

/// Split `source` into front matter fields and body.
///
/// With `parse_frontmatter` off the whole (trimmed) source is the body.
/// The returned record always has a string body, possibly empty.
///
/// ```
/// let record = textmode::split("---\ntitle: Hello\n---\nWorld", true).unwrap();
/// assert_eq!(record.get("title").unwrap().as_string(), Some("Hello"));
/// assert_eq!(record.body(), "World");
/// ```
pub fn split(source: &str, parse_frontmatter: bool) -> Result<ParsedRecord> {
    if !parse_frontmatter {
        trace!("front matter parsing disabled");
        return Ok(ParsedRecord::body_only(trim_text(source)));
    }

    let Some(sections) = locate(source) else {
        trace!("no front matter fence");
        return Ok(ParsedRecord::body_only(trim_text(source)));
    };

    let mut metadata = parse_metadata(sections.front_matter)?;
    let inline_body = take_inline_body(&mut metadata);
    let body = apply_trailing_body(inline_body, sections.trailing);
    Ok(finish(metadata, body))
}

/// Trim whitespace and byte-order marks from both ends
pub(crate) fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Front matter text and the candidate body that follows it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Sections<'a> {
    /// Trimmed YAML text, possibly empty
    pub front_matter: &'a str,
    /// Untrimmed text after the closing fence; empty when there is none
    pub trailing: &'a str,
}

/// Find the front matter sections, or `None` when `source` does not open with a fence
pub(crate) fn locate(source: &str) -> Option<Sections<'_>> {
    if !source.starts_with(FENCE) {
        return None;
    }

    let fenced = FENCED_BLOCK
        .captures(source)
        .and_then(|caps| Some((caps.get(0)?, caps.get(1)?)));

    let sections = match fenced {
        Some((whole, inner)) => {
            trace!("fenced front matter ends at byte {}", whole.end());
            Sections {
                front_matter: trim_text(inner.as_str()),
                trailing: &source[whole.end()..],
            }
        }
        None => {
            trace!("front matter has no closing fence, treating the rest as YAML");
            Sections {
                front_matter: trim_text(&source[FENCE.len()..]),
                trailing: "",
            }
        }
    };
    Some(sections)
}

/// Parse front matter text into a field map.
///
/// Empty text and a null document give an empty map. Anything other than a
/// mapping at the top level is malformed.
pub(crate) fn parse_metadata(text: &str) -> Result<BTreeMap<String, FrontMatterValue>> {
    if text.is_empty() {
        return Ok(BTreeMap::new());
    }

    let mut document = serde_yaml::from_str::<Value>(text).map_err(TextModeError::yaml)?;
    document.apply_merge().map_err(TextModeError::yaml)?;

    match document {
        Value::Mapping(mapping) => mapping
            .into_iter()
            .map(|(key, value)| Ok((field_name(key)?, FrontMatterValue::new(value))))
            .collect(),
        Value::Null => Ok(BTreeMap::new()),
        other => Err(TextModeError::malformed_front_matter(format!(
            "expected a mapping, found {}",
            kind_of(&other)
        ))),
    }
}

fn field_name(key: Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(_) | Value::Bool(_) | Value::Null => {
            Ok(FrontMatterValue::new(key).to_natural_string())
        }
        other => Err(TextModeError::malformed_front_matter(format!(
            "field names must be scalars, found {}",
            kind_of(&other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Remove a `body` field from the map, coercing non-string values to text.
/// A null `body` counts as absent.
pub(crate) fn take_inline_body(
    metadata: &mut BTreeMap<String, FrontMatterValue>,
) -> Option<String> {
    match metadata.remove(BODY_KEY)? {
        value if value.is_null() => None,
        value => Some(value.to_natural_string()),
    }
}

/// Trailing text, once trimmed, replaces the inline body unless it is empty
pub(crate) fn apply_trailing_body(inline_body: Option<String>, trailing: &str) -> Option<String> {
    match trim_text(trailing) {
        "" => inline_body,
        text => Some(text.to_string()),
    }
}

/// Build the record, lifting `_encoding` out of the fields.
///
/// The field is always removed. A truthy value becomes the record's encoding
/// in its natural string form; `false`, `0`, `""` and null leave it unset.
pub(crate) fn finish(
    mut metadata: BTreeMap<String, FrontMatterValue>,
    body: Option<String>,
) -> ParsedRecord {
    let encoding = metadata
        .remove(ENCODING_KEY)
        .filter(FrontMatterValue::is_truthy)
        .map(|value| value.to_natural_string())
        .filter(|label| !label.is_empty());

    let record = ParsedRecord::new(metadata, body.unwrap_or_default());
    match encoding {
        Some(label) => record.with_encoding(label),
        None => record,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const WITH_FRONT_MATTER: &str = "\
---
title: Lorem Ipsum!
description: Lorem ipsum dolor sit amet, consectetur adipiscing elit.
---

Lorem ipsum!";

    fn title(record: &ParsedRecord) -> Option<&str> {
        record.get("title").and_then(FrontMatterValue::as_string)
    }

    #[test]
    fn test_empty_source() {
        let record = split("", true).unwrap();
        assert_eq!(record.body(), "");
        assert!(!record.has_metadata());
    }

    #[test]
    fn test_source_without_front_matter() {
        let record = split("no frontmatter here", true).unwrap();
        assert_eq!(record, ParsedRecord::body_only("no frontmatter here"));

        let record = split("\nLorem ipsum!\n\n", true).unwrap();
        assert_eq!(record.body(), "Lorem ipsum!");
    }

    #[test]
    fn test_parses_front_matter() {
        let record = split(WITH_FRONT_MATTER, true).unwrap();
        assert_eq!(title(&record), Some("Lorem Ipsum!"));
        assert_eq!(
            record.get("description").unwrap().as_string(),
            Some("Lorem ipsum dolor sit amet, consectetur adipiscing elit.")
        );
        assert_eq!(record.body(), "Lorem ipsum!");
    }

    #[test]
    fn test_parsing_disabled_keeps_fences_in_body() {
        let record = split(WITH_FRONT_MATTER, false).unwrap();
        assert_eq!(record.body(), WITH_FRONT_MATTER);
        assert!(!record.has_metadata());

        let record = split("  ---\nx: 1\n  ", false).unwrap();
        assert_eq!(record.body(), "---\nx: 1");
    }

    #[test]
    fn test_unterminated_fence_is_all_front_matter() {
        let record = split("---\ntitle: X", true).unwrap();
        assert_eq!(title(&record), Some("X"));
        assert_eq!(record.body(), "");
    }

    #[test]
    fn test_inline_body_with_closing_fence() {
        let record = split("---\nbody: Foo!\n---", true).unwrap();
        assert_eq!(record.body(), "Foo!");
        assert!(record.get("body").is_none());
    }

    #[test]
    fn test_inline_body_without_closing_fence() {
        let record = split("---\nbody: Foo!\n", true).unwrap();
        assert_eq!(record.body(), "Foo!");
    }

    #[test]
    fn test_trailing_text_beats_inline_body() {
        let record = split("---\nbody: inline\n---\ntrailing", true).unwrap();
        assert_eq!(record.body(), "trailing");

        let record = split("---\nbody: inline\n---", true).unwrap();
        assert_eq!(record.body(), "inline");

        let record = split("---\nbody: inline\n---\n  \n", true).unwrap();
        assert_eq!(record.body(), "inline");
    }

    #[test]
    fn test_non_string_inline_body_is_coerced() {
        assert_eq!(split("---\nbody: 42\n---", true).unwrap().body(), "42");
        assert_eq!(split("---\nbody: 2.5\n---", true).unwrap().body(), "2.5");
        assert_eq!(split("---\nbody: false\n---", true).unwrap().body(), "false");
        assert_eq!(split("---\nbody: [a, b]\n---", true).unwrap().body(), "a,b");
    }

    #[test]
    fn test_null_inline_body_becomes_empty() {
        assert_eq!(split("---\nbody:\n---", true).unwrap().body(), "");
        assert_eq!(
            split("---\nbody: ~\n---\nafter", true).unwrap().body(),
            "after"
        );
    }

    #[test]
    fn test_trims_body_around_front_matter() {
        let record = split("---\ntitle: Lorem Ipsum!\n---\n\nLorem ipsum!\n\n", true).unwrap();
        assert_eq!(record.body(), "Lorem ipsum!");
    }

    #[test]
    fn test_empty_front_matter() {
        let record = split("---\n---\nBody", true).unwrap();
        assert!(!record.has_metadata());
        assert_eq!(record.body(), "Body");

        let record = split("---\n\n---", true).unwrap();
        assert_eq!(record, ParsedRecord::default());

        let record = split("---", true).unwrap();
        assert_eq!(record, ParsedRecord::default());
    }

    #[test]
    fn test_comment_only_front_matter_is_empty() {
        let record = split("---\n# just a note\n---\nBody", true).unwrap();
        assert!(!record.has_metadata());
        assert_eq!(record.body(), "Body");
    }

    #[test]
    fn test_crlf_line_endings() {
        let record = split("---\r\ntitle: X\r\n---\r\nBody\r\n", true).unwrap();
        assert_eq!(title(&record), Some("X"));
        assert_eq!(record.body(), "Body");
    }

    #[test]
    fn test_closing_fence_must_be_whole_line() {
        // "----" is not a closing fence, so everything is front matter
        assert_eq!(
            locate("---\ntitle: X\n----\n"),
            Some(Sections {
                front_matter: "title: X\n----",
                trailing: ""
            })
        );

        let record = split("---\ntitle: X\n---\nBody\n---\nMore", true).unwrap();
        assert_eq!(title(&record), Some("X"));
        assert_eq!(record.body(), "Body\n---\nMore");
    }

    #[test]
    fn test_leading_whitespace_disables_front_matter() {
        let record = split(" ---\ntitle: X\n---\nBody", true).unwrap();
        assert!(!record.has_metadata());
        assert_eq!(record.body(), "---\ntitle: X\n---\nBody");
    }

    #[test]
    fn test_front_matter_encoding_is_lifted() {
        let record = split("---\n_encoding: ascii\ntitle: X\n---\nBody", true).unwrap();
        assert_eq!(record.encoding(), Some("ascii"));
        assert!(record.get("_encoding").is_none());
        assert_eq!(title(&record), Some("X"));

        let record = split("---\n_encoding: 7\n---", true).unwrap();
        assert_eq!(record.encoding(), Some("7"));
        assert!(record.get("_encoding").is_none());
    }

    #[test]
    fn test_falsy_front_matter_encoding_is_dropped() {
        for source in [
            "---\n_encoding: false\n---\nBody",
            "---\n_encoding: 0\n---\nBody",
            "---\n_encoding: ''\n---\nBody",
            "---\n_encoding:\n---\nBody",
        ] {
            let record = split(source, true).unwrap();
            assert_eq!(record.encoding(), None, "splitting {:?}", source);
            assert!(!record.has_metadata(), "splitting {:?}", source);
        }
    }

    #[test]
    fn test_merge_keys_are_resolved() {
        let source = "---\nbase: &b {x: 1}\nderived:\n  <<: *b\n  y: 2\n---";
        let record = split(source, true).unwrap();
        let derived = record.get("derived").unwrap().as_inner();
        let expected: Value = serde_yaml::from_str("{x: 1, y: 2}").unwrap();
        assert_eq!(derived, &expected);
    }

    #[test]
    fn test_scalar_keys_become_strings() {
        let record = split("---\n1: one\ntrue: yes\n---", true).unwrap();
        assert_eq!(record.get("1").unwrap().as_string(), Some("one"));
        assert_eq!(record.get("true").unwrap().as_string(), Some("yes"));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let err = split("---\ntitle: [unclosed\n---\nBody", true).unwrap_err();
        assert!(matches!(
            err,
            TextModeError::MalformedFrontMatter { source: Some(_), .. }
        ));
    }

    #[test]
    fn test_non_mapping_front_matter_is_an_error() {
        let err = split("---\njust a string\n---\nBody", true).unwrap_err();
        assert!(matches!(
            err,
            TextModeError::MalformedFrontMatter { source: None, .. }
        ));

        assert!(split("---\n- a\n- b\n---", true).is_err());
        assert!(split("---\n[a, b]: c\n---", true).is_err());
    }

    #[test]
    fn test_locate_shapes() {
        assert_eq!(locate("Body"), None);
        assert_eq!(
            locate("---\na: 1\n---\nBody"),
            Some(Sections {
                front_matter: "a: 1",
                trailing: "\nBody"
            })
        );
        assert_eq!(
            locate("---\na: 1\n"),
            Some(Sections {
                front_matter: "a: 1",
                trailing: ""
            })
        );
    }

    #[test]
    fn test_apply_trailing_body() {
        assert_eq!(apply_trailing_body(None, "  \n"), None);
        assert_eq!(
            apply_trailing_body(Some("inline".into()), "\n text \n"),
            Some("text".to_string())
        );
        assert_eq!(
            apply_trailing_body(Some("inline".into()), ""),
            Some("inline".to_string())
        );
    }

    #[test]
    fn test_keys_and_trailing_text_survive() {
        let source = "---\nauthor: Ada\ntags: [x, y]\ncount: 3\n---\n# Heading\n\nText.\n";
        let record = split(source, true).unwrap();
        assert_eq!(record.get("author").unwrap().as_string(), Some("Ada"));
        assert_eq!(record.get("count").unwrap().as_int(), Some(3));
        assert!(record.get("tags").is_some());
        assert_eq!(record.body(), "# Heading\n\nText.");
    }

    #[test]
    fn test_trim_text_strips_bom() {
        assert_eq!(trim_text("\u{feff} body \n"), "body");
    }
}
