use crate::core::git::{local_ref, GitOperations};

/// Names treated as interchangeable default bases, in lookup order.
const DEFAULT_BASE_ALIASES: [&str; 2] = ["master", "main"];

/// Decides whether branches are contained in the configured merge base.
pub struct MergeDetector<'a> {
    git: &'a dyn GitOperations,
    merge_base: &'a str,
}

impl<'a> MergeDetector<'a> {
    pub fn new(git: &'a dyn GitOperations, merge_base: &'a str) -> Self {
        Self { git, merge_base }
    }

    /// Candidate references for the configured base, in lookup order.
    fn base_candidates(&self) -> Vec<String> {
        if DEFAULT_BASE_ALIASES.contains(&self.merge_base) {
            DEFAULT_BASE_ALIASES.iter().map(|name| local_ref(name)).collect()
        } else if self.merge_base.starts_with("refs/") {
            vec![self.merge_base.to_string()]
        } else {
            vec![local_ref(self.merge_base)]
        }
    }

    /// The first candidate base reference that exists.
    pub fn resolve_base(&self) -> Option<String> {
        self.base_candidates()
            .into_iter()
            .find(|candidate| self.git.reference_exists(candidate))
    }

    /// True iff the tip of `branch_name` is the base tip or in its history.
    ///
    /// A missing base and a failed ancestry check both count as not merged.
    pub fn is_merged(&self, branch_name: &str) -> bool {
        let Some(base) = self.resolve_base() else {
            log::debug!(
                "Merge base {} not found, treating {} as not merged",
                self.merge_base,
                branch_name
            );
            return false;
        };

        match self.git.is_ancestor(&local_ref(branch_name), &base) {
            Ok(merged) => merged,
            Err(e) => {
                log::debug!("Ancestry check for {} failed: {}", branch_name, e);
                false
            }
        }
    }
}
