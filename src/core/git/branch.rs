use super::validation::GitValidator;
use super::GitOperations;
use crate::utils::error::{Result, SpruceError};

/// How a branch was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    /// `git branch -d` accepted the deletion.
    Safe,
    /// The safe delete was refused and `git branch -D` removed it.
    Forced,
}

impl Deletion {
    pub fn is_forced(&self) -> bool {
        matches!(self, Deletion::Forced)
    }
}

pub struct BranchManager<'a> {
    git: &'a dyn GitOperations,
}

impl<'a> BranchManager<'a> {
    pub fn new(git: &'a dyn GitOperations) -> Self {
        Self { git }
    }

    /// Deletes `name` with a safe delete, retrying with a forced delete only
    /// when `allow_force` is set. The checked-out branch is never deleted.
    pub fn delete_branch(&self, name: &str, allow_force: bool) -> Result<Deletion> {
        GitValidator::validate_branch_argument(name)?;

        if self.git.current_branch()?.as_deref() == Some(name) {
            return Err(SpruceError::checked_out_branch(name));
        }

        let safe_error = match self.git.delete_branch(name, false) {
            Ok(()) => {
                log::debug!("Deleted branch {}", name);
                return Ok(Deletion::Safe);
            }
            Err(e) => e,
        };

        if !allow_force {
            return Err(safe_error);
        }

        log::debug!(
            "Safe delete of {} refused ({}), retrying with force",
            name,
            safe_error
        );

        self.git.delete_branch(name, true)?;
        log::debug!("Force deleted branch {}", name);
        Ok(Deletion::Forced)
    }
}
