//! Interchangeable content handlers

use crate::core::{ParsedRecord, ResourceType};
use crate::error::Result;
use crate::io::TextMode;
use async_trait::async_trait;
use std::fmt;
use std::path::Path;

/// A handler that reads resource files into records and writes them back
#[async_trait]
pub trait Mode: Send + Sync + fmt::Debug {
    /// Name the mode answers to in a registry
    fn name(&self) -> &str;

    /// Read the file at `path` into a record
    async fn read_file(
        &self,
        path: &Path,
        resource_type: Option<&ResourceType>,
    ) -> Result<ParsedRecord>;

    /// Write `resource` to `path`
    async fn write_file(
        &self,
        path: &Path,
        resource: Option<&ParsedRecord>,
        resource_type: Option<&ResourceType>,
    ) -> Result<()>;
}

#[async_trait]
impl Mode for TextMode {
    fn name(&self) -> &str {
        TextMode::NAME
    }

    async fn read_file(
        &self,
        path: &Path,
        resource_type: Option<&ResourceType>,
    ) -> Result<ParsedRecord> {
        TextMode::read_file(self, path, resource_type).await
    }

    async fn write_file(
        &self,
        path: &Path,
        resource: Option<&ParsedRecord>,
        resource_type: Option<&ResourceType>,
    ) -> Result<()> {
        TextMode::write_file(self, path, resource, resource_type).await
    }
}
