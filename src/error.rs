//! Error types for the textmode library
//!
//! Every failure surfaces to the caller unchanged: I/O errors keep their
//! underlying cause, malformed front matter keeps the YAML parser's error.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum TextModeError {
    /// File missing, unreadable or unwritable
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Front matter that could not be parsed into a mapping
    #[error("Malformed front matter: {reason}")]
    MalformedFrontMatter {
        reason: String,
        #[source]
        source: Option<serde_yaml::Error>,
    },

    /// Encoding label that no codec answers to
    #[error("Unknown encoding: {label}")]
    UnknownEncoding { label: String },

    /// Configuration text that does not describe a valid object
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[source] serde_yaml::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TextModeError>;

impl TextModeError {
    /// Create a new I/O error for the given path
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a malformed front matter error from a YAML parser failure
    pub fn yaml(source: serde_yaml::Error) -> Self {
        Self::MalformedFrontMatter {
            reason: source.to_string(),
            source: Some(source),
        }
    }

    /// Create a malformed front matter error for a shape problem
    pub fn malformed_front_matter(reason: impl Into<String>) -> Self {
        Self::MalformedFrontMatter {
            reason: reason.into(),
            source: None,
        }
    }

    /// Create a new unknown encoding error
    pub fn unknown_encoding(label: impl Into<String>) -> Self {
        Self::UnknownEncoding {
            label: label.into(),
        }
    }

    /// Check if this error is caused by a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
