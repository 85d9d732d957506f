use crate::utils::{Result, SpruceError};
use dialoguer::Confirm;

/// Yes/no decision on removing a merged branch.
pub trait BranchConfirmer {
    fn confirm_removal(&self, branch: &str) -> Result<bool>;
}

/// Asks on the terminal.
pub struct TerminalConfirmer;

impl TerminalConfirmer {
    pub fn new() -> Self {
        Self
    }

    fn is_non_interactive() -> bool {
        std::env::var("GIT_SPRUCE_NON_INTERACTIVE").is_ok()
            || std::env::var("CI").is_ok()
            || !atty::is(atty::Stream::Stdin)
    }
}

impl Default for TerminalConfirmer {
    fn default() -> Self {
        Self::new()
    }
}

impl BranchConfirmer for TerminalConfirmer {
    fn confirm_removal(&self, branch: &str) -> Result<bool> {
        if Self::is_non_interactive() {
            return Err(SpruceError::prompt(
                "cannot ask for confirmation in non-interactive mode. Use --yes-all to remove merged branches without confirmation.",
            ));
        }

        Confirm::new()
            .with_prompt(format!("Branch {} is merged. Remove it?", branch))
            .default(false)
            .interact()
            .map_err(|e| SpruceError::prompt(format!("error reading user input: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_interactive_confirmation_fails() {
        // Test runners never attach a terminal to stdin.
        if atty::is(atty::Stream::Stdin) {
            return;
        }

        let confirmer = TerminalConfirmer::new();
        let result = confirmer.confirm_removal("tmp/a");
        assert!(matches!(result, Err(SpruceError::Prompt { .. })));
        assert!(result.unwrap_err().to_string().contains("--yes-all"));
    }
}
