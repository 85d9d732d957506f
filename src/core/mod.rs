pub mod classifier;
pub mod git;
pub mod merge;

pub use classifier::{BranchClassifier, GitBranch};
pub use merge::MergeDetector;
