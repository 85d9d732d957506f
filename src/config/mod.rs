use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod defaults;
pub mod manager;
pub mod validation;

pub use manager::ConfigManager;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub merge_base: String,
    pub origin: String,
    pub ignore_branches: Vec<String>,
}

/// One configuration file. Keys it leaves out keep the value of the layer
/// below it.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub merge_base: Option<String>,
    pub origin: Option<String>,
    pub ignore_branches: Option<Vec<String>>,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Json(e) => write!(f, "JSON error: {}", e),
            ConfigError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::Io(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Json(error)
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    /// Overrides every key `layer` sets.
    pub fn apply(&mut self, layer: ConfigLayer) {
        if let Some(merge_base) = layer.merge_base {
            self.merge_base = merge_base;
        }
        if let Some(origin) = layer.origin {
            self.origin = origin;
        }
        if let Some(ignore_branches) = layer.ignore_branches {
            self.ignore_branches = ignore_branches;
        }
    }

    pub fn ignored_set(&self) -> HashSet<String> {
        self.ignore_branches.iter().cloned().collect()
    }
}
