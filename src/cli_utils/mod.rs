// Shared helpers for the interactive expenses CLI
pub mod formatting;
pub mod input;
pub mod menu;

pub use formatting::{format_expense_table, format_summary};
pub use input::Input;
pub use menu::{ExpenseAction, Menu};

use crate::error::StoreError;

/// Result type for CLI operations
pub type CliResult<T> = std::result::Result<T, CliError>;

/// CLI error type
#[derive(Debug)]
pub enum CliError {
    StoreError(String),
    ValidationError(String),
    NotFound(String),
    IoError(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::StoreError(msg) => write!(f, "Store error: {}", msg),
            CliError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            CliError::NotFound(msg) => write!(f, "Not found: {}", msg),
            CliError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError(err.to_string())
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::IoError(err.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) | StoreError::BackupSourceMissing => {
                CliError::NotFound(err.to_string())
            }
            e if e.is_validation() => CliError::ValidationError(e.to_string()),
            e => CliError::StoreError(e.to_string()),
        }
    }
}

/// Confirm a dangerous operation
pub fn confirm(message: &str) -> CliResult<bool> {
    use dialoguer::Confirm;
    Ok(Confirm::new().with_prompt(message).interact()?)
}

/// Print a success message
pub fn print_success(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("✓ {}", message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("ℹ {}", message).bright_cyan());
}

/// Print an error message
pub fn print_error(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("✗ {}", message).red());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_conversion() {
        assert!(matches!(
            CliError::from(StoreError::EmptyNote),
            CliError::ValidationError(_)
        ));
        assert!(matches!(
            CliError::from(StoreError::NotFound(2)),
            CliError::NotFound(_)
        ));
        assert!(matches!(
            CliError::from(StoreError::BackupSourceMissing),
            CliError::NotFound(_)
        ));
    }
}
