use super::defaults::{default_config, get_config_file_path, REPOSITORY_CONFIG_FILE};
use super::{Config, ConfigLayer, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct ConfigManager;

impl ConfigManager {
    /// Config files consulted for `repo_root`, lowest precedence first.
    ///
    /// An explicit path replaces the user-wide and per-repository lookup.
    pub fn config_sources(repo_root: &Path, explicit: Option<&Path>) -> Vec<PathBuf> {
        if let Some(path) = explicit {
            return vec![path.to_path_buf()];
        }

        let mut sources = Vec::new();
        if let Some(global) = get_config_file_path() {
            sources.push(global);
        }
        sources.push(repo_root.join(REPOSITORY_CONFIG_FILE));
        sources
    }

    /// The sources for `repo_root` that exist on disk and will be applied.
    pub fn existing_sources(repo_root: &Path, explicit: Option<&Path>) -> Vec<PathBuf> {
        Self::config_sources(repo_root, explicit)
            .into_iter()
            .filter(|path| path.exists())
            .collect()
    }

    pub fn load(repo_root: &Path, explicit: Option<&Path>) -> Result<Config> {
        let sources = Self::config_sources(repo_root, explicit);

        // An explicitly requested file must exist.
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("config file not found: {}", path.display()),
                )
                .into());
            }
        }

        Self::load_from_sources(&sources)
    }

    /// Defaults overlaid with every existing file in `sources`, in order.
    pub fn load_from_sources(sources: &[PathBuf]) -> Result<Config> {
        let mut config = default_config();

        for path in sources.iter().filter(|path| path.exists()) {
            log::debug!("Applying config file: {}", path.display());
            config.apply(Self::load_layer(path)?);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn load_layer(path: &Path) -> Result<ConfigLayer> {
        let content = fs::read_to_string(path)?;
        let layer: ConfigLayer = serde_json::from_str(&content)?;
        Ok(layer)
    }
}
