//! Installing the text mode into a host environment

pub mod environment;
pub mod mode;

pub use environment::{Environment, ModeRegistry};
pub use mode::Mode;

use crate::error::{Result, TextModeError};
use crate::io::TextMode;
use log::info;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Plugin options.
///
/// Nothing is configurable yet; unknown keys are accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginOptions {}

impl PluginOptions {
    /// Load options from YAML (or JSON) text
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(TextModeError::InvalidConfig)
    }
}

/// Register a new text mode in `env` under the name `"text"`
pub fn setup(env: &mut Environment, options: Option<PluginOptions>) {
    let _options = options.unwrap_or_default();
    env.modes.set(TextMode::NAME, Arc::new(TextMode::new()));
    info!("Text mode registered as '{}'", TextMode::NAME);
}
