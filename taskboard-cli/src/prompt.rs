//! Answering delete confirmations

use crate::error::CliResult;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use tracing::debug;

/// How delete confirmations are answered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmPolicy {
    /// Ask on the terminal; decline when there is none
    #[default]
    Prompt,
    /// Always confirm
    Yes,
    /// Always decline
    No,
}

impl ConfirmPolicy {
    /// Answer `question`
    pub fn confirm(self, question: &str) -> CliResult<bool> {
        match self {
            Self::Yes => Ok(true),
            Self::No => Ok(false),
            Self::Prompt => {
                if !(std::io::stdin().is_terminal() && std::io::stderr().is_terminal()) {
                    debug!(question, "no terminal to ask on, declining");
                    return Ok(false);
                }
                let confirmed = dialoguer::Confirm::new()
                    .with_prompt(question)
                    .default(false)
                    .interact()?;
                Ok(confirmed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_answers() {
        assert!(ConfirmPolicy::Yes.confirm("Delete?").unwrap());
        assert!(!ConfirmPolicy::No.confirm("Delete?").unwrap());
    }

    #[test]
    fn test_policy_from_config_value() {
        let policy: ConfirmPolicy = serde_json::from_str("\"yes\"").unwrap();
        assert_eq!(policy, ConfirmPolicy::Yes);
        assert_eq!(ConfirmPolicy::default(), ConfirmPolicy::Prompt);
    }
}
