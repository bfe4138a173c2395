//! Caller-supplied configuration for reading and writing a resource

use crate::error::{Result, TextModeError};
use serde::{Deserialize, Serialize};

/// Encoding used when nothing else names one
pub const DEFAULT_ENCODING: &str = "utf8";

/// How a kind of resource is read and written.
///
/// Deserializes from configuration using the keys `encoding` and
/// `parseFrontmatter`; both are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_frontmatter: Option<bool>,
}

impl ResourceType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    pub fn with_parse_frontmatter(mut self, parse: bool) -> Self {
        self.parse_frontmatter = Some(parse);
        self
    }

    /// Load a resource type from YAML (or JSON) text
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        // An empty document means "all defaults"
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(TextModeError::InvalidConfig)
    }

    /// Whether front matter should be parsed (defaults to `true`)
    pub fn parses_frontmatter(&self) -> bool {
        self.parse_frontmatter.unwrap_or(true)
    }
}

/// Whether front matter should be parsed for an optional resource type
pub fn resolve_parse_frontmatter(resource_type: Option<&ResourceType>) -> bool {
    resource_type.map_or(true, ResourceType::parses_frontmatter)
}
