use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::git::{BranchManager, Deletion, GitOperations, GitRepository};
use crate::core::{BranchClassifier, GitBranch, MergeDetector};
use crate::utils::Result;

pub mod interaction;
pub mod reporter;

use interaction::{BranchConfirmer, TerminalConfirmer};
use reporter::CleanupReporter;

/// Run switches that come from the command line rather than config files.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanOptions {
    pub force: bool,
    pub yes_all: bool,
    pub dry_run: bool,
    pub prune: bool,
}

impl From<&Cli> for CleanOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            force: cli.force,
            yes_all: cli.yes_all,
            dry_run: cli.dry_run,
            prune: cli.prune,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchOutcome {
    Removed(Deletion),
    Declined,
    ConfirmationFailed(String),
    DeleteFailed(String),
    NotMerged,
    /// Merged, left in place because of `--dry-run`.
    WouldRemove,
}

impl BranchOutcome {
    pub fn is_merged(&self) -> bool {
        !matches!(self, BranchOutcome::NotMerged)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchReport {
    pub branch: GitBranch,
    pub outcome: BranchOutcome,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub merged: usize,
    pub not_merged: usize,
    pub removed: usize,
    pub gone: usize,
}

impl RunSummary {
    pub fn record(&mut self, report: &BranchReport) {
        if report.outcome.is_merged() {
            self.merged += 1;
        } else {
            self.not_merged += 1;
        }
        if matches!(report.outcome, BranchOutcome::Removed(_)) {
            self.removed += 1;
        }
        if report.branch.is_gone {
            self.gone += 1;
        }
    }
}

pub fn execute(repo: &GitRepository, config: &Config, options: CleanOptions) -> Result<RunSummary> {
    if options.prune {
        println!("Fetching {} with --prune", config.origin);
        if let Err(e) = repo.fetch(&config.origin, true) {
            log::warn!("Fetch from {} failed, using local state: {}", config.origin, e);
        }
    }

    let confirmer = TerminalConfirmer::new();
    let reporter = CleanupReporter::new();

    let cleaner = BranchCleaner::new(repo, config, options);
    let summary = cleaner.run(&confirmer, |report| reporter.show_branch(report))?;

    reporter.show_summary(&summary);
    Ok(summary)
}

/// Walks every candidate branch through detection, confirmation and removal.
pub struct BranchCleaner<'a> {
    git: &'a dyn GitOperations,
    config: &'a Config,
    options: CleanOptions,
}

impl<'a> BranchCleaner<'a> {
    pub fn new(git: &'a dyn GitOperations, config: &'a Config, options: CleanOptions) -> Self {
        Self {
            git,
            config,
            options,
        }
    }

    /// Fails only when the branch list cannot be read. Per-branch failures
    /// end up in that branch's report.
    pub fn run<F>(&self, confirmer: &dyn BranchConfirmer, mut on_report: F) -> Result<RunSummary>
    where
        F: FnMut(&BranchReport),
    {
        let detector = MergeDetector::new(self.git, &self.config.merge_base);
        if detector.resolve_base().is_none() {
            log::warn!(
                "Merge base '{}' does not exist, no branch will be reported as merged",
                self.config.merge_base
            );
        }

        let classifier = BranchClassifier::new(self.git);
        let branches =
            classifier.load_branches(&self.config.ignored_set(), &self.config.origin)?;

        let remover = BranchManager::new(self.git);
        let mut summary = RunSummary::default();

        for branch in branches {
            let outcome = self.process_branch(&branch, &detector, &remover, confirmer);
            let report = BranchReport { branch, outcome };

            summary.record(&report);
            on_report(&report);
        }

        Ok(summary)
    }

    fn process_branch(
        &self,
        branch: &GitBranch,
        detector: &MergeDetector<'_>,
        remover: &BranchManager<'_>,
        confirmer: &dyn BranchConfirmer,
    ) -> BranchOutcome {
        if !detector.is_merged(&branch.name) {
            return BranchOutcome::NotMerged;
        }

        if self.options.dry_run {
            return BranchOutcome::WouldRemove;
        }

        if !self.options.yes_all {
            match confirmer.confirm_removal(&branch.name) {
                Ok(true) => {}
                Ok(false) => return BranchOutcome::Declined,
                Err(e) => {
                    log::error!("Confirmation for {} failed: {}", branch.name, e);
                    return BranchOutcome::ConfirmationFailed(e.to_string());
                }
            }
        }

        match remover.delete_branch(&branch.name, self.options.force) {
            Ok(deletion) => BranchOutcome::Removed(deletion),
            Err(e) => {
                log::warn!("Failed to delete {}: {}", branch.name, e);
                BranchOutcome::DeleteFailed(e.to_string())
            }
        }
    }
}
