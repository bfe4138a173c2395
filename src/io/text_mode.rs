//! Reading and writing text resource files
//!
//! A read decodes the file, splits off its front matter and records which
//! encoding a later write should use. A write persists only the body; front
//! matter is never written back.

use crate::core::resource_type::resolve_parse_frontmatter;
use crate::core::{resolve_encoding, split, ParsedRecord, ResourceType, TextEncoding};
use crate::error::Result;
use crate::io::storage::{FsStorage, Storage};
use log::debug;
use std::path::Path;
use std::sync::Arc;

/// Mode for reading and writing text resource files
#[derive(Debug, Clone)]
pub struct TextMode {
    storage: Arc<dyn Storage>,
}

impl TextMode {
    /// Name the mode is registered under
    pub const NAME: &'static str = "text";

    /// Create a text mode backed by the local file system
    pub fn new() -> Self {
        Self::with_storage(Arc::new(FsStorage::new()))
    }

    /// Create a text mode backed by custom storage
    pub fn with_storage(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Split front matter and body out of `source`.
    ///
    /// `None` for `parse_frontmatter` means `true`.
    pub fn read_string(
        &self,
        source: &str,
        parse_frontmatter: Option<bool>,
    ) -> Result<ParsedRecord> {
        split(source, parse_frontmatter.unwrap_or(true))
    }

    /// Read and parse the file at `path`.
    ///
    /// The returned record's encoding is the one named by its front matter,
    /// or failing that the one the file was read with.
    pub async fn read_file(
        &self,
        path: impl AsRef<Path>,
        resource_type: Option<&ResourceType>,
    ) -> Result<ParsedRecord> {
        let path = path.as_ref();
        let parse_frontmatter = resolve_parse_frontmatter(resource_type);
        let label = resolve_encoding(resource_type);
        let encoding = TextEncoding::for_label(&label)?;

        let source = self.storage.read_text(path, encoding).await?;
        let record = split(&source, parse_frontmatter)?;

        let output_encoding = record.encoding().map(str::to_owned).unwrap_or(label);
        debug!(
            "Read {} ({} metadata fields, output encoding {})",
            path.display(),
            record.metadata().len(),
            output_encoding
        );
        Ok(record.with_encoding(output_encoding))
    }

    /// Write the body of `resource` to `path`, replacing what is there.
    ///
    /// A missing resource writes an empty file. The record's own encoding
    /// takes precedence over the resource type's.
    pub async fn write_file(
        &self,
        path: impl AsRef<Path>,
        resource: Option<&ParsedRecord>,
        resource_type: Option<&ResourceType>,
    ) -> Result<()> {
        let path = path.as_ref();
        let empty = ParsedRecord::default();
        let resource = resource.unwrap_or(&empty);

        let label = match resource.encoding() {
            Some(label) => label.to_string(),
            None => resolve_encoding(resource_type),
        };
        let encoding = TextEncoding::for_label(&label)?;

        self.storage
            .write_text(path, resource.body(), encoding)
            .await
    }
}

impl Default for TextMode {
    fn default() -> Self {
        Self::new()
    }
}
