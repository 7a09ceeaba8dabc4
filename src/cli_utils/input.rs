use crate::cli_utils::{CliError, CliResult};
use dialoguer::Input as DialoguerInput;

/// Input utilities
pub struct Input;

impl Input {
    /// Get a string from user input
    pub fn get_string(prompt: &str) -> CliResult<String> {
        Ok(DialoguerInput::<String>::new().with_prompt(prompt).interact_text()?)
    }

    /// Get an optional string; empty input means "not supplied"
    pub fn get_optional_string(prompt: &str) -> CliResult<Option<String>> {
        let input: String = DialoguerInput::new()
            .with_prompt(format!("{} (optional)", prompt))
            .allow_empty(true)
            .interact_text()?;

        Ok(non_empty(input))
    }

    /// Get an expense id
    pub fn get_id(prompt: &str) -> CliResult<u64> {
        let input: String = DialoguerInput::new().with_prompt(prompt).interact_text()?;

        parse_id(&input)
    }
}

fn non_empty(input: String) -> Option<String> {
    if input.trim().is_empty() {
        None
    } else {
        Some(input)
    }
}

fn parse_id(input: &str) -> CliResult<u64> {
    input
        .trim()
        .parse::<u64>()
        .map_err(|_| CliError::ValidationError("Invalid id, expected a positive integer".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty("Food".to_string()), Some("Food".to_string()));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(" 12 ").unwrap(), 12);
        assert!(parse_id("-1").is_err());
        assert!(parse_id("abc").is_err());
    }
}
