//! Core library types for text resources with front matter
//!
//! - `splitter`: separating front matter from the body
//! - `record`: the record a read produces
//! - `value`: wrapper for YAML values found in front matter
//! - `encoding`: picking and applying a text encoding
//! - `resource_type`: caller configuration for reads and writes

pub mod encoding;
pub mod record;
pub mod resource_type;
pub mod splitter;
pub mod value;

pub use encoding::{resolve_encoding, TextEncoding};
pub use record::ParsedRecord;
pub use resource_type::ResourceType;
pub use splitter::split;
pub use value::FrontMatterValue;
