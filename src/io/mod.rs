//! File I/O for text resources
//!
//! - `storage`: the read/write seam and its file system implementation
//! - `text_mode`: reading records from files and writing bodies back

pub mod storage;
pub mod text_mode;

pub use storage::{FsStorage, Storage};
pub use text_mode::TextMode;

/// Convenience functions for common operations
pub mod convenience {
    use super::*;
    use crate::core::{ParsedRecord, ResourceType};
    use crate::error::Result;
    use std::path::Path;

    /// Read a record from a file with the default text mode
    pub async fn read_file<P: AsRef<Path>>(
        path: P,
        resource_type: Option<&ResourceType>,
    ) -> Result<ParsedRecord> {
        TextMode::new().read_file(path, resource_type).await
    }

    /// Write a record's body to a file with the default text mode
    pub async fn write_file<P: AsRef<Path>>(
        path: P,
        resource: Option<&ParsedRecord>,
        resource_type: Option<&ResourceType>,
    ) -> Result<()> {
        TextMode::new().write_file(path, resource, resource_type).await
    }
}
