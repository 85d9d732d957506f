use crate::utils::error::{Result, SpruceError};
use std::path::{Path, PathBuf};
use std::process::Command;

const LOCAL_BRANCH_PREFIX: &str = "refs/heads/";

#[derive(Debug, Clone)]
pub struct GitRepository {
    pub root: PathBuf,
}

impl GitRepository {
    /// Opens the repository that contains `path`.
    ///
    /// An empty path means the current working directory.
    pub fn open(path: &Path) -> Result<Self> {
        let path = if path.as_os_str().is_empty() {
            std::env::current_dir().map_err(|e| {
                SpruceError::git_operation(format!("Failed to get current directory: {}", e))
            })?
        } else {
            path.to_path_buf()
        };

        if !path.is_dir() {
            return Err(SpruceError::not_a_repository(path.display().to_string()));
        }

        let output = Command::new("git")
            .current_dir(&path)
            .args(["rev-parse", "--show-toplevel"])
            .output()
            .map_err(|e| SpruceError::git_operation(format!("Failed to execute git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            log::debug!("rev-parse --show-toplevel failed: {}", stderr.trim());
            return Err(SpruceError::not_a_repository(path.display().to_string()));
        }

        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let root = PathBuf::from(root);

        log::debug!("Opened repository at {}", root.display());
        Ok(Self { root })
    }

    /// Local branch names in the order `for-each-ref` yields them.
    pub fn list_local_branches(&self) -> Result<Vec<String>> {
        let output = execute_git_command(
            self,
            &["for-each-ref", "--format=%(refname)", LOCAL_BRANCH_PREFIX],
        )?;

        Ok(output
            .lines()
            .filter_map(|line| line.trim().strip_prefix(LOCAL_BRANCH_PREFIX))
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Exact lookup of a fully qualified reference. Never fails: anything other
    /// than a positive answer from git is `false`.
    pub fn reference_exists(&self, full_ref: &str) -> bool {
        matches!(
            execute_git_command_with_exit_code(self, &["show-ref", "--verify", "--quiet", full_ref]),
            Ok(GitExit { code: Some(0), .. })
        )
    }

    /// The checked-out branch, or `None` when HEAD is detached.
    pub fn get_current_branch(&self) -> Result<Option<String>> {
        let exit = execute_git_command_with_exit_code(self, &["symbolic-ref", "--quiet", "HEAD"])?;

        match exit.code {
            Some(0) => Ok(exit
                .stdout
                .strip_prefix(LOCAL_BRANCH_PREFIX)
                .map(str::to_string)),
            Some(1) => Ok(None),
            _ => Err(SpruceError::git_operation(format!(
                "Failed to read HEAD: {}",
                exit.stderr
            ))),
        }
    }

    /// Whether `ancestor` is reachable from `descendant`, equal commits included.
    pub fn is_ancestor(&self, ancestor: &str, descendant: &str) -> Result<bool> {
        let exit = execute_git_command_with_exit_code(
            self,
            &["merge-base", "--is-ancestor", ancestor, descendant],
        )?;

        match exit.code {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            code => Err(SpruceError::git_operation(format!(
                "merge-base --is-ancestor {} {} exited with {:?}: {}",
                ancestor, descendant, code, exit.stderr
            ))),
        }
    }

    /// Fetches from `remote`. Runs attached to the terminal so credential
    /// prompts reach the user.
    pub fn fetch(&self, remote: &str, prune: bool) -> Result<()> {
        let mut args = vec!["fetch"];
        if prune {
            args.push("--prune");
        }
        args.push(remote);

        execute_git_command_with_status(self, &args)
    }
}

/// Raw result of a git invocation whose exit code carries meaning.
#[derive(Debug, Clone)]
pub struct GitExit {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

pub fn execute_git_command(repo: &GitRepository, args: &[&str]) -> Result<String> {
    let exit = execute_git_command_with_exit_code(repo, args)?;

    if exit.code != Some(0) {
        return Err(SpruceError::git_operation(format!(
            "Git command failed ({}): {}",
            args.join(" "),
            exit.stderr
        )));
    }

    Ok(exit.stdout)
}

pub fn execute_git_command_with_exit_code(repo: &GitRepository, args: &[&str]) -> Result<GitExit> {
    log::debug!("git {}", args.join(" "));

    let output = Command::new("git")
        .current_dir(&repo.root)
        .args(args)
        .output()
        .map_err(|e| SpruceError::git_operation(format!("Failed to execute git: {}", e)))?;

    Ok(GitExit {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}

pub fn execute_git_command_with_status(repo: &GitRepository, args: &[&str]) -> Result<()> {
    log::debug!("git {}", args.join(" "));

    let status = Command::new("git")
        .current_dir(&repo.root)
        .args(args)
        .status()
        .map_err(|e| SpruceError::git_operation(format!("Failed to execute git: {}", e)))?;

    if !status.success() {
        return Err(SpruceError::git_operation(format!(
            "Git command failed: {}",
            args.join(" ")
        )));
    }

    Ok(())
}
