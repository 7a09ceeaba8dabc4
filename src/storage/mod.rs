//! Backing store abstraction for the expense collection.
//!
//! Every operation reads the full collection with `load` and, when it
//! mutates, writes the full collection back with `save`. Nothing is cached
//! between calls.

pub mod file;
pub mod memory;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

use serde_json::Value;

use crate::error::StoreResult;
use crate::expenses::db_types::Expense;

pub trait ExpenseStorage: Send + Sync {
    /// Read the whole collection.
    ///
    /// A missing or unparsable backing store yields an empty collection.
    fn load(&self) -> StoreResult<Vec<Expense>>;

    /// Replace the whole collection.
    fn save(&self, expenses: &[Expense]) -> StoreResult<()>;

    /// Copy the current backing store verbatim to the backup location,
    /// overwriting any earlier backup.
    ///
    /// Fails with `StoreError::BackupSourceMissing` if nothing has been
    /// written yet.
    fn backup(&self) -> StoreResult<String>;
}

/// Parse stored bytes into the collection.
///
/// Content that is not a JSON array yields an empty collection. Inside a
/// readable array, entries that do not fit the `Expense` shape are skipped
/// one by one so the remaining records survive the next save.
pub(crate) fn parse_collection(raw: &[u8], source: &str) -> Vec<Expense> {
    let entries = match serde_json::from_slice::<Vec<Value>>(raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Ignoring unreadable expense data in {}: {}", source, e);
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Expense>(entry) {
            Ok(expense) => Some(expense),
            Err(e) => {
                tracing::warn!("Skipping malformed expense #{} in {}: {}", index, source, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_utf8_bytes_parse_empty() {
        assert!(parse_collection(&[0xff, 0xfe, 0x00, 0x5b], "test").is_empty());
    }

    #[test]
    fn test_malformed_entry_skipped_individually() {
        let raw = br#"[
            {"id": 1, "amount": 5.0, "date": "2024-01-01", "note": "ok", "category": "A"},
            {"id": 2, "amount": 6.0, "date": "2024-01-02", "note": null, "category": "A"},
            {"id": 3, "amount": 7.0, "date": "2024-01-03", "note": "fine"}
        ]"#;

        let ids: Vec<u64> = parse_collection(raw, "test").iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_non_array_parses_empty() {
        assert!(parse_collection(br#"{"id": 1}"#, "test").is_empty());
    }
}
