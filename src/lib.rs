//! textmode: reading and writing text resources with YAML front matter
//!
//! A text resource may open with a YAML block fenced by `---` lines. Reading
//! one produces a [`ParsedRecord`]: the front matter fields plus a `body`
//! that is always present. Writing one persists only the body, in the
//! encoding the record or its resource type asks for.
//!
//! # Quick Start
//!
//! ## Splitting a string
//!
//! ```rust
//! use textmode::{split, Result};
//!
//! fn main() -> Result<()> {
//!     let record = split("---\ntitle: An interesting muse...\n---\nSpace is shaped!", true)?;
//!     assert_eq!(record.get("title").unwrap().as_string(), Some("An interesting muse..."));
//!     assert_eq!(record.body(), "Space is shaped!");
//!
//!     // The body field is always present
//!     let record = split("---\ntitle: An example without main body", true)?;
//!     assert_eq!(record.body(), "");
//!     Ok(())
//! }
//! ```
//!
//! ## Reading and writing files
//!
//! ```rust,no_run
//! use textmode::{ResourceType, TextMode, Result};
//!
//! async fn copy_body() -> Result<()> {
//!     let mode = TextMode::new();
//!     let resource_type = ResourceType::new().with_encoding("latin1");
//!
//!     let record = mode.read_file("page.md", Some(&resource_type)).await?;
//!     mode.write_file("page.html", Some(&record), None).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Registering into an environment
//!
//! ```rust
//! use textmode::{setup, Environment};
//!
//! let mut env = Environment::new();
//! setup(&mut env, None);
//! assert!(env.modes.has("text"));
//! ```
//!
//! # Architecture
//!
//! - [`core`](crate::core): splitting, records, values, encodings and resource types
//! - [`io`]: storage and the [`TextMode`] file reader/writer
//! - [`plugin`]: the [`Mode`] trait, [`Environment`] and [`setup`]
//! - [`error`]: the [`TextModeError`] type

// Public API exports
pub use crate::error::{Result, TextModeError};

// Core types
pub use crate::core::{
    resolve_encoding, split, FrontMatterValue, ParsedRecord, ResourceType, TextEncoding,
};

// IO types
pub use crate::io::{FsStorage, Storage, TextMode};

// Plugin types
pub use crate::plugin::{setup, Environment, Mode, ModeRegistry, PluginOptions};

pub mod core;
pub mod error;
pub mod io;
pub mod plugin;

pub use crate::io::convenience;
