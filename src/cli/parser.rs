use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "git-spruce")]
#[command(about = "Removes branches that have been merged to the configured merge base branch")]
#[command(
    version,
    long_about = "Removes local branches that have been merged to the configured merge base branch.

Configuration is read from the user config file and from .git-spruce.json in the
repository root, in that order. Keys: merge_base, origin, ignore_branches."
)]
pub struct Cli {
    /// Path of the git repository to spruce (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// Config file to use instead of the user and repository config files
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fetch from the remote with --prune before checking branches
    #[arg(long, short = 'p', help = "Runs git fetch --prune before checking branches")]
    pub prune: bool,

    /// Force delete merged branches that git refuses to delete safely
    #[arg(long, short, help = "Runs git branch -D when git branch -d refuses")]
    pub force: bool,

    /// Remove all merged branches without asking
    #[arg(
        long,
        short = 'y',
        help = "No confirmation for each branch, removes all detected branches"
    )]
    pub yes_all: bool,

    /// Only report what would be removed
    #[arg(long, help = "Only show which branches would be removed")]
    pub dry_run: bool,

    /// Branch the other branches must be merged into
    #[arg(long, value_name = "BRANCH")]
    pub merge_base: Option<String>,

    /// Remote whose tracking refs decide whether a branch is gone
    #[arg(long, value_name = "REMOTE")]
    pub origin: Option<String>,

    /// Additional branch to leave alone (repeatable)
    #[arg(long = "ignore", value_name = "BRANCH")]
    pub ignore: Vec<String>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub show_config: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}
