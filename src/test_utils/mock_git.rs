use crate::core::git::{local_ref, GitOperations};
use crate::utils::{Result, SpruceError};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;

/// In-memory repository for exercising the branch pipeline without git.
#[derive(Default)]
pub struct MockGit {
    branches: RefCell<Vec<String>>,
    refs: RefCell<HashSet<String>>,
    ancestors: HashSet<(String, String)>,
    unmerged: HashSet<String>,
    current: Option<String>,
    fail_enumeration: bool,
    fail_ancestry: bool,
    ancestry_checks: Cell<usize>,
    delete_calls: RefCell<Vec<(String, bool)>>,
}

impl MockGit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Local branches; each also becomes an existing `refs/heads/*` ref.
    pub fn with_branches(self, names: &[&str]) -> Self {
        for name in names {
            self.branches.borrow_mut().push(name.to_string());
            self.refs.borrow_mut().insert(local_ref(name));
        }
        self
    }

    pub fn with_refs(self, refs: &[&str]) -> Self {
        self.refs
            .borrow_mut()
            .extend(refs.iter().map(|r| r.to_string()));
        self
    }

    pub fn with_ancestor(mut self, ancestor: &str, descendant: &str) -> Self {
        self.ancestors
            .insert((ancestor.to_string(), descendant.to_string()));
        self
    }

    /// Branches a safe delete refuses.
    pub fn with_unmerged(mut self, names: &[&str]) -> Self {
        self.unmerged.extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn with_current(mut self, name: &str) -> Self {
        self.current = Some(name.to_string());
        self
    }

    pub fn failing_enumeration(mut self) -> Self {
        self.fail_enumeration = true;
        self
    }

    pub fn failing_ancestry(mut self) -> Self {
        self.fail_ancestry = true;
        self
    }

    pub fn ancestry_checks(&self) -> usize {
        self.ancestry_checks.get()
    }

    pub fn delete_calls(&self) -> Vec<(String, bool)> {
        self.delete_calls.borrow().clone()
    }

    pub fn has_branch(&self, name: &str) -> bool {
        self.branches.borrow().iter().any(|b| b == name)
    }
}

impl GitOperations for MockGit {
    fn list_local_branches(&self) -> Result<Vec<String>> {
        if self.fail_enumeration {
            return Err(SpruceError::git_operation("for-each-ref failed"));
        }
        Ok(self.branches.borrow().clone())
    }

    fn reference_exists(&self, full_ref: &str) -> bool {
        self.refs.borrow().contains(full_ref)
    }

    fn current_branch(&self) -> Result<Option<String>> {
        Ok(self.current.clone())
    }

    fn is_ancestor(&self, ancestor: &str, descendant: &str) -> Result<bool> {
        self.ancestry_checks.set(self.ancestry_checks.get() + 1);

        if self.fail_ancestry {
            return Err(SpruceError::git_operation("merge-base exited with 128"));
        }

        Ok(ancestor == descendant
            || self
                .ancestors
                .contains(&(ancestor.to_string(), descendant.to_string())))
    }

    fn delete_branch(&self, name: &str, force: bool) -> Result<()> {
        self.delete_calls
            .borrow_mut()
            .push((name.to_string(), force));

        if self.current.as_deref() == Some(name) {
            return Err(SpruceError::git_operation(format!(
                "Cannot delete branch '{}' checked out",
                name
            )));
        }

        if !self.has_branch(name) {
            return Err(SpruceError::git_operation(format!(
                "branch '{}' not found",
                name
            )));
        }

        if !force && self.unmerged.contains(name) {
            return Err(SpruceError::git_operation(format!(
                "The branch '{}' is not fully merged",
                name
            )));
        }

        self.branches.borrow_mut().retain(|b| b != name);
        self.refs.borrow_mut().remove(&local_ref(name));
        Ok(())
    }
}
