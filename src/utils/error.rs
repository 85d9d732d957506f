use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpruceError {
    #[error("Not a git repository: {path}")]
    NotARepository { path: String },

    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    #[error("Cannot delete branch '{branch}': it is currently checked out")]
    CheckedOutBranch { branch: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid branch name: {name} - {reason}")]
    InvalidBranchName { name: String, reason: String },

    #[error("Confirmation failed: {message}")]
    Prompt { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpruceError>;

impl SpruceError {
    pub fn not_a_repository(path: impl Into<String>) -> Self {
        Self::NotARepository { path: path.into() }
    }

    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }

    pub fn checked_out_branch(branch: impl Into<String>) -> Self {
        Self::CheckedOutBranch {
            branch: branch.into(),
        }
    }

    pub fn invalid_branch_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBranchName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }
}

impl From<crate::config::ConfigError> for SpruceError {
    fn from(error: crate::config::ConfigError) -> Self {
        Self::Config {
            message: error.to_string(),
        }
    }
}
