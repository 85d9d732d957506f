pub mod mock_git;

pub mod test_helpers {
    use crate::core::git::GitRepository;
    use std::fs;
    use std::path::Path;
    use std::process::Command;
    use tempfile::TempDir;

    fn git(dir: &Path, args: &[&str]) {
        let output = Command::new("git")
            .current_dir(dir)
            .args(args)
            .output()
            .expect("Failed to execute git");
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    fn init_repo(repo_path: &Path) {
        git(repo_path, &["init", "--initial-branch=main"]);
        git(repo_path, &["config", "user.name", "Test User"]);
        git(repo_path, &["config", "user.email", "test@example.com"]);
        git(repo_path, &["config", "commit.gpgsign", "false"]);

        fs::write(repo_path.join("README.md"), "# Test Repository")
            .expect("Failed to write README");

        git(repo_path, &["add", "README.md"]);
        git(repo_path, &["commit", "-m", "Initial commit"]);
    }

    /// Repository on `main` with a single commit.
    pub fn setup_test_repo() -> (TempDir, GitRepository) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        init_repo(temp_dir.path());

        let repo = GitRepository::open(temp_dir.path()).expect("Failed to open repo");
        (temp_dir, repo)
    }

    /// Like [`setup_test_repo`], with a bare `origin` that has `main` pushed.
    pub fn setup_test_repo_with_remote() -> (TempDir, TempDir, GitRepository) {
        let remote_dir = TempDir::new().expect("Failed to create remote dir");
        git(remote_dir.path(), &["init", "--bare", "--initial-branch=main"]);

        let (temp_dir, repo) = setup_test_repo();
        let remote_path = remote_dir.path().to_string_lossy().to_string();
        run_git(&repo, &["remote", "add", "origin", &remote_path]);
        run_git(&repo, &["push", "origin", "main"]);

        (remote_dir, temp_dir, repo)
    }

    pub fn run_git(repo: &GitRepository, args: &[&str]) {
        git(&repo.root, args);
    }

    /// Creates `name` at the current HEAD without switching to it.
    pub fn create_branch(repo: &GitRepository, name: &str) {
        run_git(repo, &["branch", name]);
    }

    /// Creates `branch` from the current HEAD with one extra commit, then
    /// switches back to the previous branch.
    pub fn commit_on_branch(repo: &GitRepository, branch: &str, file: &str) {
        run_git(repo, &["checkout", "-b", branch]);
        fs::write(repo.root.join(file), format!("{}\n", branch)).expect("Failed to write file");
        run_git(repo, &["add", file]);
        run_git(repo, &["commit", "-m", &format!("Commit on {}", branch)]);
        run_git(repo, &["checkout", "-"]);
    }
}
