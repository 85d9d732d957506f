#[cfg(test)]
mod cli_tests {
    use crate::cli::parser::*;
    use crate::cli::resolve_config;
    use crate::config::defaults::REPOSITORY_CONFIG_FILE;
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["git-spruce"]).unwrap();
        assert!(cli.repo.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.prune);
        assert!(!cli.force);
        assert!(!cli.yes_all);
        assert!(!cli.dry_run);
        assert!(!cli.show_config);
        assert!(!cli.verbose);
        assert!(cli.ignore.is_empty());
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["git-spruce", "-p", "-f", "-y", "-v"]).unwrap();
        assert!(cli.prune);
        assert!(cli.force);
        assert!(cli.yes_all);
        assert!(cli.verbose);
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from([
            "git-spruce",
            "--prune",
            "--force",
            "--yes-all",
            "--dry-run",
            "--repo",
            "/tmp/project",
            "--config",
            "spruce.json",
        ])
        .unwrap();
        assert!(cli.prune);
        assert!(cli.force);
        assert!(cli.yes_all);
        assert!(cli.dry_run);
        assert_eq!(cli.repo, Some(PathBuf::from("/tmp/project")));
        assert_eq!(cli.config, Some(PathBuf::from("spruce.json")));
    }

    #[test]
    fn test_config_overrides() {
        let cli = Cli::try_parse_from([
            "git-spruce",
            "--merge-base",
            "develop",
            "--origin",
            "upstream",
            "--ignore",
            "release",
            "--ignore",
            "staging",
        ])
        .unwrap();
        assert_eq!(cli.merge_base, Some("develop".to_string()));
        assert_eq!(cli.origin, Some("upstream".to_string()));
        assert_eq!(cli.ignore, vec!["release", "staging"]);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["git-spruce", "--delete-everything"]).is_err());
    }

    #[test]
    fn test_resolve_config_applies_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("spruce.json");
        std::fs::write(&config_path, r#"{"merge_base": "trunk", "ignore_branches": ["trunk"]}"#)
            .unwrap();

        let cli = Cli::try_parse_from([
            "git-spruce",
            "--config",
            config_path.to_str().unwrap(),
            "--origin",
            "upstream",
            "--ignore",
            "release",
            "--ignore",
            "trunk",
        ])
        .unwrap();

        let config = resolve_config(&cli, temp_dir.path()).unwrap();
        assert_eq!(config.merge_base, "trunk");
        assert_eq!(config.origin, "upstream");
        assert_eq!(config.ignore_branches, vec!["trunk", "release"]);
    }

    #[test]
    fn test_resolve_config_rejects_invalid_override() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(REPOSITORY_CONFIG_FILE);
        std::fs::write(&config_path, "{}").unwrap();

        let cli = Cli::try_parse_from([
            "git-spruce",
            "--config",
            config_path.to_str().unwrap(),
            "--merge-base",
            "bad name",
        ])
        .unwrap();

        assert!(resolve_config(&cli, temp_dir.path()).is_err());
    }
}
