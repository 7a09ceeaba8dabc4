//! Error types for expense store operations.
//!
//! Validation errors are raised before any mutation happens, so a rejected
//! operation never leaves the backing store partially written. The HTTP layer
//! maps these onto status codes in `api::error`.

use thiserror::Error;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A required payload field was absent
    #[error("Missing data: {0}")]
    MissingField(&'static str),

    /// Amount could not be read as a number
    #[error("Invalid amount")]
    InvalidAmount,

    /// Amount parsed but was zero or negative
    #[error("Amount must be positive")]
    NonPositiveAmount,

    #[error("Invalid date, expected YYYY-MM-DD")]
    InvalidDate,

    #[error("Note cannot be empty")]
    EmptyNote,

    #[error("Expense {0} not found")]
    NotFound(u64),

    /// The largest stored id leaves no room for another
    #[error("No expense ids left to assign")]
    IdSpaceExhausted,

    /// Backup requested before anything was ever written
    #[error("No data file to back up")]
    BackupSourceMissing,

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// True for errors caused by the caller's input rather than the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StoreError::MissingField(_)
                | StoreError::InvalidAmount
                | StoreError::NonPositiveAmount
                | StoreError::InvalidDate
                | StoreError::EmptyNote
        )
    }
}
