use super::{Config, ConfigError, Result};
use crate::core::git::GitValidator;

pub fn validate_config(config: &Config) -> Result<()> {
    if config.merge_base.trim().is_empty() {
        return Err(ConfigError::Validation(
            "merge_base cannot be empty".to_string(),
        ));
    }

    if config.origin.trim().is_empty() {
        return Err(ConfigError::Validation("origin cannot be empty".to_string()));
    }

    GitValidator::validate_merge_base(&config.merge_base)
        .map_err(|e| ConfigError::Validation(format!("merge_base: {}", e)))?;

    GitValidator::validate_remote_name(&config.origin)
        .map_err(|e| ConfigError::Validation(format!("origin: {}", e)))?;

    if config.ignore_branches.iter().any(|b| b.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "ignore_branches cannot contain empty names".to_string(),
        ));
    }

    Ok(())
}
