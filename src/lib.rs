// Public library interface for expense-tracker
pub mod api;
pub mod cli_utils;
pub mod error;
pub mod expenses;
pub mod storage;
pub mod utils;
