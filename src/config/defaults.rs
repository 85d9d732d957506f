use super::Config;
use std::path::PathBuf;

pub const REPOSITORY_CONFIG_FILE: &str = ".git-spruce.json";

pub fn default_config() -> Config {
    Config {
        merge_base: "main".to_string(),
        origin: "origin".to_string(),
        ignore_branches: vec![
            "develop".to_string(),
            "main".to_string(),
            "master".to_string(),
        ],
    }
}

pub fn get_default_config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "git-spruce")
        .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
}

/// The user-wide config file, if a home directory can be determined.
pub fn get_config_file_path() -> Option<PathBuf> {
    // Allow environment variable override for config path (used in tests)
    if let Ok(config_path) = std::env::var("GIT_SPRUCE_CONFIG_PATH") {
        return Some(PathBuf::from(config_path));
    }

    get_default_config_dir().map(|dir| dir.join("config.json"))
}
