use crate::utils::error::Result;

pub mod branch;
pub mod repository;
pub mod validation;

pub use branch::{BranchManager, Deletion};
pub use repository::GitRepository;
pub use validation::GitValidator;

/// Repository access the branch pipeline depends on.
pub trait GitOperations {
    fn list_local_branches(&self) -> Result<Vec<String>>;
    fn reference_exists(&self, full_ref: &str) -> bool;
    fn current_branch(&self) -> Result<Option<String>>;
    fn is_ancestor(&self, ancestor: &str, descendant: &str) -> Result<bool>;
    fn delete_branch(&self, name: &str, force: bool) -> Result<()>;
}

impl GitOperations for GitRepository {
    fn list_local_branches(&self) -> Result<Vec<String>> {
        GitRepository::list_local_branches(self)
    }

    fn reference_exists(&self, full_ref: &str) -> bool {
        GitRepository::reference_exists(self, full_ref)
    }

    fn current_branch(&self) -> Result<Option<String>> {
        self.get_current_branch()
    }

    fn is_ancestor(&self, ancestor: &str, descendant: &str) -> Result<bool> {
        GitRepository::is_ancestor(self, ancestor, descendant)
    }

    fn delete_branch(&self, name: &str, force: bool) -> Result<()> {
        let flag = if force { "-D" } else { "-d" };
        repository::execute_git_command(self, &["branch", flag, name]).map(|_| ())
    }
}

/// Full reference name of a local branch.
pub fn local_ref(branch: &str) -> String {
    format!("refs/heads/{}", branch)
}

/// Full reference name of a remote-tracking branch.
pub fn remote_tracking_ref(remote: &str, branch: &str) -> String {
    format!("refs/remotes/{}/{}", remote, branch)
}
