//! Where text resources are read from and written to
//!
//! [`Storage`] is the seam between the text mode and the outside world. The
//! default [`FsStorage`] talks to the local file system through `tokio::fs`.

use crate::core::TextEncoding;
use crate::error::{Result, TextModeError};
use async_trait::async_trait;
use log::debug;
use std::fmt;
use std::path::Path;

/// Whole-file text reads and writes
#[async_trait]
pub trait Storage: Send + Sync + fmt::Debug {
    /// Read the file at `path` fully and decode it
    async fn read_text(&self, path: &Path, encoding: TextEncoding) -> Result<String>;

    /// Encode `text` and replace the contents of the file at `path`
    async fn write_text(&self, path: &Path, text: &str, encoding: TextEncoding) -> Result<()>;
}

/// Local file system storage
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStorage;

impl FsStorage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Storage for FsStorage {
    async fn read_text(&self, path: &Path, encoding: TextEncoding) -> Result<String> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| TextModeError::io(path, e))?;
        debug!(
            "Read {} bytes from {} as {}",
            bytes.len(),
            path.display(),
            encoding.name()
        );
        Ok(encoding.decode(&bytes))
    }

    async fn write_text(&self, path: &Path, text: &str, encoding: TextEncoding) -> Result<()> {
        let bytes = encoding.encode(text);
        debug!(
            "Writing {} bytes to {} as {}",
            bytes.len(),
            path.display(),
            encoding.name()
        );
        tokio::fs::write(path, bytes)
            .await
            .map_err(|e| TextModeError::io(path, e))
    }
}
