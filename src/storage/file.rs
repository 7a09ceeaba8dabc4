use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{ExpenseStorage, parse_collection};
use crate::error::{StoreError, StoreResult};
use crate::expenses::db_types::Expense;

/// Expense collection persisted as a single pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    data_file: PathBuf,
    backup_file: PathBuf,
    atomic_writes: bool,
}

impl JsonFileStorage {
    pub fn new(data_file: impl Into<PathBuf>, backup_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            backup_file: backup_file.into(),
            atomic_writes: false,
        }
    }

    /// Write through a temp file and rename it over the data file, so a crash
    /// mid-write cannot truncate the collection.
    pub fn with_atomic_writes(mut self, enabled: bool) -> Self {
        self.atomic_writes = enabled;
        self
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn backup_file(&self) -> &Path {
        &self.backup_file
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .data_file
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "data.json".into());
        name.push(".tmp");
        self.data_file.with_file_name(name)
    }
}

impl ExpenseStorage for JsonFileStorage {
    fn load(&self) -> StoreResult<Vec<Expense>> {
        let raw = match fs::read(&self.data_file) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(parse_collection(&raw, &self.data_file.display().to_string()))
    }

    fn save(&self, expenses: &[Expense]) -> StoreResult<()> {
        let json_string = serde_json::to_string_pretty(expenses)?;

        if self.atomic_writes {
            let temp = self.temp_path();
            fs::write(&temp, json_string)?;
            rename_with_fallback(&temp, &self.data_file)?;
        } else {
            fs::write(&self.data_file, json_string)?;
        }

        tracing::debug!(
            "Wrote {} expenses to {}",
            expenses.len(),
            self.data_file.display()
        );
        Ok(())
    }

    fn backup(&self) -> StoreResult<String> {
        if !self.data_file.exists() {
            return Err(StoreError::BackupSourceMissing);
        }

        let bytes = fs::copy(&self.data_file, &self.backup_file)?;
        tracing::info!(
            "Backed up {} ({} bytes) to {}",
            self.data_file.display(),
            bytes,
            self.backup_file.display()
        );

        Ok(self.backup_file.display().to_string())
    }
}

/// Rename `temp_path` onto `destination`, removing the destination first on
/// platforms where rename refuses to replace an existing file.
fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample(id: u64, amount: f64) -> Expense {
        Expense {
            id,
            amount,
            date: "2024-03-01".to_string(),
            note: "coffee".to_string(),
            category: "Food".to_string(),
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("data.json"), dir.path().join("b.json"));

        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_file_loads_empty() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data.json");
        fs::write(&data, "{ not json").unwrap();

        let storage = JsonFileStorage::new(&data, dir.path().join("b.json"));
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data.json");
        fs::write(&data, r#"{"id": 1}"#).unwrap();

        let storage = JsonFileStorage::new(&data, dir.path().join("b.json"));
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_non_utf8_file_loads_empty() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data.json");
        fs::write(&data, [0xff, 0xfe, 0x00, 0x5b]).unwrap();

        let storage = JsonFileStorage::new(&data, dir.path().join("b.json"));
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_add_keeps_records_next_to_malformed_entry() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data.json");
        fs::write(
            &data,
            r#"[
                {"id": 1, "amount": 3.0, "date": "2024-01-02", "note": "bus", "category": "Travel"},
                {"id": 2, "amount": 4.0, "date": "2024-01-03", "note": null, "category": "Travel"}
            ]"#,
        )
        .unwrap();

        let storage = JsonFileStorage::new(&data, dir.path().join("b.json"));
        let created = crate::expenses::operations::add_expense(
            &storage,
            crate::expenses::db_types::CreateExpenseInput {
                amount: Some(serde_json::json!(5)),
                date: Some("2024-01-04".to_string()),
                note: Some("lunch".to_string()),
                category: None,
            },
        )
        .unwrap();

        assert_eq!(created.id, 2);
        let ids: Vec<u64> = storage.load().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("data.json"), dir.path().join("b.json"));

        storage.save(&[sample(1, 4.5), sample(2, 10.0)]).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded, vec![sample(1, 4.5), sample(2, 10.0)]);
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("data.json"), dir.path().join("b.json"));

        storage.save(&[sample(1, 4.5), sample(2, 10.0)]).unwrap();
        storage.save(&[sample(3, 1.0)]).unwrap();

        assert_eq!(storage.load().unwrap(), vec![sample(3, 1.0)]);
    }

    #[test]
    fn test_legacy_record_without_category() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data.json");
        fs::write(
            &data,
            r#"[{"id": 7, "amount": 3.0, "date": "2024-01-02", "note": "bus"}]"#,
        )
        .unwrap();

        let storage = JsonFileStorage::new(&data, dir.path().join("b.json"));
        let loaded = storage.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].category, "Uncategorized");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data.json");
        let storage = JsonFileStorage::new(&data, dir.path().join("b.json")).with_atomic_writes(true);

        storage.save(&[sample(1, 2.0)]).unwrap();
        storage.save(&[sample(1, 2.0), sample(2, 3.0)]).unwrap();

        assert!(!dir.path().join("data.json.tmp").exists());
        assert_eq!(storage.load().unwrap().len(), 2);
    }

    #[test]
    fn test_backup_copies_verbatim() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data.json");
        let backup = dir.path().join("backup.json");
        fs::write(&backup, "stale").unwrap();

        let storage = JsonFileStorage::new(&data, &backup);
        storage.save(&[sample(1, 2.0)]).unwrap();
        storage.backup().unwrap();

        assert_eq!(
            fs::read_to_string(&data).unwrap(),
            fs::read_to_string(&backup).unwrap()
        );
    }

    #[test]
    fn test_backup_without_data_file() {
        let dir = tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("data.json"), dir.path().join("b.json"));

        assert!(matches!(
            storage.backup(),
            Err(StoreError::BackupSourceMissing)
        ));
    }
}
