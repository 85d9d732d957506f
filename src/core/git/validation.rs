use crate::utils::error::{Result, SpruceError};
use regex::Regex;

/// Centralized Git-related validation utilities
pub struct GitValidator;

impl GitValidator {
    /// Validate a Git branch name according to Git's naming rules
    pub fn validate_branch_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(SpruceError::invalid_branch_name(name, "name cannot be empty"));
        }

        if name.len() > 250 {
            return Err(SpruceError::invalid_branch_name(name, "name too long"));
        }

        let invalid_patterns = [
            r"^-",                 // Starts with -
            r"/$",                 // Ends with /
            r"\.$",                // Ends with .
            r"\.lock$",            // Ends with .lock
            r"[ \t]",              // Contains whitespace
            r"[\x00-\x1f\x7f]",    // Contains control characters
            r"~|\^|:|\\|\*|\?|\[", // Contains special Git characters
            r"^@$",                // Exactly "@"
            r"/\.",                // Contains "/."
            r"\.\.",               // Contains ".."
            r"//",                 // Contains "//"
            r"@\{",                // Contains "@{"
        ];

        for pattern in invalid_patterns {
            let regex = Regex::new(pattern).map_err(|e| {
                SpruceError::git_operation(format!("Regex error: {}", e))
            })?;
            if regex.is_match(name) {
                return Err(SpruceError::invalid_branch_name(
                    name,
                    "contains invalid characters or patterns",
                ));
            }
        }

        if name.starts_with("refs/") {
            return Err(SpruceError::invalid_branch_name(
                name,
                "branch name cannot start with 'refs/'",
            ));
        }

        Ok(())
    }

    /// Guard for a name passed to git as a branch argument. Names listed by
    /// git already satisfy git's own rules, so only option injection is refused.
    pub fn validate_branch_argument(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(SpruceError::invalid_branch_name(name, "name cannot be empty"));
        }
        if name.starts_with('-') {
            return Err(SpruceError::invalid_branch_name(
                name,
                "name cannot start with '-'",
            ));
        }
        Ok(())
    }

    /// Validate a merge base setting: a branch name or a fully qualified ref.
    pub fn validate_merge_base(name: &str) -> Result<()> {
        match name.strip_prefix("refs/") {
            Some(rest) => Self::validate_branch_name(rest),
            None => Self::validate_branch_name(name),
        }
    }

    /// Remote names follow the same component rules as branch names, minus `/`.
    pub fn validate_remote_name(name: &str) -> Result<()> {
        Self::validate_branch_name(name)?;
        if name.contains('/') {
            return Err(SpruceError::invalid_branch_name(
                name,
                "remote name cannot contain '/'",
            ));
        }
        Ok(())
    }
}
