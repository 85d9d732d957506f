pub mod commands;
pub mod parser;

#[cfg(test)]
mod tests;

pub use parser::Cli;

use crate::config::{Config, ConfigManager};
use crate::core::git::GitRepository;
use crate::utils::Result;
use commands::clean::CleanOptions;
use std::path::Path;

pub fn execute_command(cli: Cli) -> Result<()> {
    let repo_path = cli.repo.clone().unwrap_or_default();
    let repo = GitRepository::open(&repo_path)?;

    let config = resolve_config(&cli, &repo.root)?;

    if cli.show_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    for path in ConfigManager::existing_sources(&repo.root, cli.config.as_deref()) {
        println!("Using config file: {}", path.display());
    }

    commands::clean::execute(&repo, &config, CleanOptions::from(&cli))?;
    Ok(())
}

/// Loads the layered config files and applies command-line overrides.
pub fn resolve_config(cli: &Cli, repo_root: &Path) -> Result<Config> {
    let mut config = ConfigManager::load(repo_root, cli.config.as_deref())?;

    if let Some(merge_base) = &cli.merge_base {
        config.merge_base = merge_base.clone();
    }
    if let Some(origin) = &cli.origin {
        config.origin = origin.clone();
    }
    for branch in &cli.ignore {
        if !config.ignore_branches.contains(branch) {
            config.ignore_branches.push(branch.clone());
        }
    }

    config.validate()?;
    log::debug!("Resolved configuration: {:?}", config);
    Ok(config)
}
