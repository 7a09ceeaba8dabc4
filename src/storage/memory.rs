use std::sync::Mutex;

use super::{ExpenseStorage, parse_collection};
use crate::error::{StoreError, StoreResult};
use crate::expenses::db_types::Expense;

/// In-memory storage that keeps the serialized text of the last save,
/// mirroring what the file backend would hold on disk.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    data: Mutex<Option<String>>,
    backup: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw text, valid or not
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            data: Mutex::new(Some(raw.into())),
            backup: Mutex::new(None),
        }
    }

    pub fn with_expenses(expenses: &[Expense]) -> StoreResult<Self> {
        let storage = Self::new();
        storage.save(expenses)?;
        Ok(storage)
    }

    /// Raw text of the current backup, if one was taken
    pub fn backup_contents(&self) -> Option<String> {
        lock(&self.backup).clone()
    }

    pub fn raw_contents(&self) -> Option<String> {
        lock(&self.data).clone()
    }
}

// Writers replace the whole string, so a poisoned slot still holds a complete value.
fn lock(slot: &Mutex<Option<String>>) -> std::sync::MutexGuard<'_, Option<String>> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ExpenseStorage for MemoryStorage {
    fn load(&self) -> StoreResult<Vec<Expense>> {
        Ok(match lock(&self.data).as_deref() {
            Some(raw) => parse_collection(raw.as_bytes(), "memory"),
            None => Vec::new(),
        })
    }

    fn save(&self, expenses: &[Expense]) -> StoreResult<()> {
        let json_string = serde_json::to_string_pretty(expenses)?;
        *lock(&self.data) = Some(json_string);
        Ok(())
    }

    fn backup(&self) -> StoreResult<String> {
        let current = lock(&self.data)
            .clone()
            .ok_or(StoreError::BackupSourceMissing)?;
        *lock(&self.backup) = Some(current);
        Ok("memory".to_string())
    }
}
