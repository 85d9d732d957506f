use crate::core::git::{remote_tracking_ref, GitOperations};
use crate::utils::error::Result;
use std::collections::HashSet;

/// A local branch as seen at enumeration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitBranch {
    pub name: String,
    /// The remote-tracking counterpart no longer exists.
    pub is_gone: bool,
}

/// Produces the candidate branches for a cleanup run.
pub struct BranchClassifier<'a> {
    git: &'a dyn GitOperations,
}

impl<'a> BranchClassifier<'a> {
    pub fn new(git: &'a dyn GitOperations) -> Self {
        Self { git }
    }

    /// Local branches minus `ignored`, each annotated with whether
    /// `refs/remotes/{origin}/{name}` is missing.
    ///
    /// An enumeration failure is returned as-is; a run cannot continue
    /// without a branch list.
    pub fn load_branches(&self, ignored: &HashSet<String>, origin: &str) -> Result<Vec<GitBranch>> {
        let names = self.git.list_local_branches()?;

        let mut seen = HashSet::new();
        let mut branches = Vec::new();

        for name in names {
            if ignored.contains(&name) {
                log::debug!("Ignoring branch {}", name);
                continue;
            }

            if !seen.insert(name.clone()) {
                continue;
            }

            let is_gone = !self.git.reference_exists(&remote_tracking_ref(origin, &name));
            branches.push(GitBranch { name, is_gone });
        }

        Ok(branches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mock_git::MockGit;
    use crate::test_utils::test_helpers::*;
    use crate::utils::SpruceError;

    fn ignored(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_ignored_branches_are_never_emitted() {
        let git = MockGit::new()
            .with_branches(&["main", "develop", "master", "tmp/a", "tmp/b"])
            .with_refs(&["refs/remotes/origin/main", "refs/remotes/origin/tmp/a"]);
        let classifier = BranchClassifier::new(&git);

        let branches = classifier
            .load_branches(&ignored(&["main", "master", "develop"]), "origin")
            .unwrap();

        let names: Vec<_> = branches.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["tmp/a", "tmp/b"]);
    }

    #[test]
    fn test_ignore_match_is_exact_and_case_sensitive() {
        let git = MockGit::new().with_branches(&["Main", "main-old", "main"]);
        let classifier = BranchClassifier::new(&git);

        let branches = classifier
            .load_branches(&ignored(&["main"]), "origin")
            .unwrap();

        let names: Vec<_> = branches.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Main", "main-old"]);
    }

    #[test]
    fn test_gone_status_follows_remote_tracking_ref() {
        let git = MockGit::new()
            .with_branches(&["tracked", "untracked"])
            .with_refs(&["refs/remotes/upstream/tracked", "refs/remotes/origin/untracked"]);
        let classifier = BranchClassifier::new(&git);

        let branches = classifier.load_branches(&HashSet::new(), "upstream").unwrap();

        assert_eq!(
            branches,
            vec![
                GitBranch {
                    name: "tracked".to_string(),
                    is_gone: false
                },
                GitBranch {
                    name: "untracked".to_string(),
                    is_gone: true
                },
            ]
        );
    }

    #[test]
    fn test_duplicates_are_emitted_once() {
        let git = MockGit::new().with_branches(&["dup", "dup", "other"]);
        let classifier = BranchClassifier::new(&git);

        let branches = classifier.load_branches(&HashSet::new(), "origin").unwrap();
        assert_eq!(branches.len(), 2);
    }

    #[test]
    fn test_enumeration_failure_propagates() {
        let git = MockGit::new().failing_enumeration();
        let classifier = BranchClassifier::new(&git);

        let result = classifier.load_branches(&HashSet::new(), "origin");
        assert!(matches!(result, Err(SpruceError::GitOperation { .. })));
    }

    #[test]
    fn test_load_branches_from_real_repository() {
        let (_remote_dir, _temp_dir, repo) = setup_test_repo_with_remote();
        create_branch(&repo, "pushed");
        run_git(&repo, &["push", "origin", "pushed"]);
        create_branch(&repo, "local-only");

        let classifier = BranchClassifier::new(&repo);
        let mut branches = classifier
            .load_branches(&ignored(&["main", "master", "develop"]), "origin")
            .unwrap();
        branches.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(
            branches,
            vec![
                GitBranch {
                    name: "local-only".to_string(),
                    is_gone: true
                },
                GitBranch {
                    name: "pushed".to_string(),
                    is_gone: false
                },
            ]
        );
    }
}
