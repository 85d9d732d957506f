use super::{BranchOutcome, BranchReport, RunSummary};

pub struct CleanupReporter;

impl CleanupReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn show_branch(&self, report: &BranchReport) {
        println!("{}", format_branch_line(report));
    }

    pub fn show_summary(&self, summary: &RunSummary) {
        println!();
        print!("{}", render_summary_table(summary));
    }
}

impl Default for CleanupReporter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn format_branch_line(report: &BranchReport) -> String {
    let name = &report.branch.name;
    let gone = if report.branch.is_gone { " (gone)" } else { "" };

    match &report.outcome {
        BranchOutcome::Removed(deletion) if deletion.is_forced() => {
            format!("✅ Branch force deleted: {}{}", name, gone)
        }
        BranchOutcome::Removed(_) => format!("✅ Branch deleted: {}{}", name, gone),
        BranchOutcome::WouldRemove => format!("🧹 Would remove merged branch: {}{}", name, gone),
        BranchOutcome::Declined => format!("⚠️  Branch not removed: {}{}", name, gone),
        BranchOutcome::ConfirmationFailed(error) => {
            format!("❌ Could not confirm removal of [{}]: {}", name, error)
        }
        BranchOutcome::DeleteFailed(error) => {
            format!("❌ Error deleting branch [{}]: {}", name, error)
        }
        BranchOutcome::NotMerged => format!("   Branch is not merged: {}{}", name, gone),
    }
}

/// Boxed one-row table of the run counters.
pub fn render_summary_table(summary: &RunSummary) -> String {
    let headers = ["Merged", "Not merged", "Removed", "Gone"];
    let values = [
        summary.merged.to_string(),
        summary.not_merged.to_string(),
        summary.removed.to_string(),
        summary.gone.to_string(),
    ];

    let widths: Vec<usize> = headers
        .iter()
        .zip(values.iter())
        .map(|(header, value)| header.chars().count().max(value.chars().count()))
        .collect();

    let border = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}\n", left, segments.join(mid), right)
    };
    let row = |cells: Vec<&str>| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!(" {:<width$} ", cell, width = width))
            .collect();
        format!("│{}│\n", padded.join("│"))
    };

    let mut table = String::new();
    table.push_str(&border("┌", "┬", "┐"));
    table.push_str(&row(headers.to_vec()));
    table.push_str(&border("├", "┼", "┤"));
    table.push_str(&row(values.iter().map(String::as_str).collect()));
    table.push_str(&border("└", "┴", "┘"));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::git::Deletion;
    use crate::core::GitBranch;

    fn report(name: &str, is_gone: bool, outcome: BranchOutcome) -> BranchReport {
        BranchReport {
            branch: GitBranch {
                name: name.to_string(),
                is_gone,
            },
            outcome,
        }
    }

    #[test]
    fn test_branch_lines() {
        assert_eq!(
            format_branch_line(&report("tmp/a", false, BranchOutcome::Removed(Deletion::Safe))),
            "✅ Branch deleted: tmp/a"
        );
        assert_eq!(
            format_branch_line(&report("tmp/b", true, BranchOutcome::Removed(Deletion::Forced))),
            "✅ Branch force deleted: tmp/b (gone)"
        );
        assert_eq!(
            format_branch_line(&report("tmp/c", false, BranchOutcome::NotMerged)),
            "   Branch is not merged: tmp/c"
        );
        assert!(format_branch_line(&report(
            "tmp/d",
            false,
            BranchOutcome::DeleteFailed("not fully merged".to_string())
        ))
        .contains("[tmp/d]: not fully merged"));
    }

    #[test]
    fn test_summary_table() {
        let summary = RunSummary {
            merged: 3,
            not_merged: 12,
            removed: 2,
            gone: 1,
        };

        let table = render_summary_table(&summary);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "│ Merged │ Not merged │ Removed │ Gone │");
        assert_eq!(lines[3], "│ 3      │ 12         │ 2       │ 1    │");
        assert!(lines[0].starts_with('┌') && lines[0].ends_with('┐'));
        assert!(lines[4].starts_with('└') && lines[4].ends_with('┘'));
    }

    #[test]
    fn test_reporter_prints_without_panicking() {
        let reporter = CleanupReporter::new();
        reporter.show_branch(&report("tmp/a", false, BranchOutcome::Declined));
        reporter.show_summary(&RunSummary::default());
    }
}
