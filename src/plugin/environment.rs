//! The host environment modes are installed into

use crate::plugin::mode::Mode;
use log::debug;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Named collection of modes
#[derive(Debug, Default, Clone)]
pub struct ModeRegistry {
    modes: BTreeMap<String, Arc<dyn Mode>>,
}

impl ModeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mode under `name`.
    ///
    /// Returns the mode previously registered under that name, if any.
    pub fn set(&mut self, name: impl Into<String>, mode: Arc<dyn Mode>) -> Option<Arc<dyn Mode>> {
        let name = name.into();
        debug!("Registering mode '{}'", name);
        self.modes.insert(name, mode)
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Mode>> {
        self.modes.get(name).cloned()
    }

    pub fn has(&self, name: &str) -> bool {
        self.modes.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn Mode>> {
        self.modes.remove(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        self.modes.keys().cloned().collect()
    }
}

/// A project environment that plugins register into
#[derive(Debug, Default, Clone)]
pub struct Environment {
    pub modes: ModeRegistry,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }
}
