use std::collections::HashMap;

use crate::ports::EnvSource;

/// Fixed environment for tests.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Environment carrying every input of the dual-architecture cask.
    pub fn release(version: &str, arm: &str, intel: &str) -> Self {
        Self::new().with("VERSION", version).with("SHA_ARM", arm).with("SHA_INTEL", intel)
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
