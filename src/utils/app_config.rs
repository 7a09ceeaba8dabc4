use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use crate::storage::{ExpenseStorage, JsonFileStorage};

/// Where the expense collection and its backup live
#[derive(Args, Debug, Clone)]
pub struct StorageConfig {
    /// JSON file holding the expense collection
    #[arg(long, env = "DATA_FILE", default_value = "data.json")]
    pub data_file: PathBuf,

    /// Fixed location overwritten by each backup
    #[arg(long, env = "BACKUP_FILE", default_value = "data_backup.json")]
    pub backup_file: PathBuf,

    /// Write through a temp file and rename instead of truncating in place
    #[arg(long, env = "ATOMIC_WRITES", default_value_t = false)]
    pub atomic_writes: bool,
}

impl StorageConfig {
    pub fn build(&self) -> JsonFileStorage {
        JsonFileStorage::new(&self.data_file, &self.backup_file)
            .with_atomic_writes(self.atomic_writes)
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub storage: Arc<dyn ExpenseStorage>,
}

impl AppConfig {
    pub fn new(storage: Arc<dyn ExpenseStorage>) -> Self {
        Self { storage }
    }

    pub fn from_storage_config(config: &StorageConfig) -> Result<Self> {
        if let Some(parent) = config.data_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                anyhow::bail!("Data directory {} does not exist", parent.display());
            }
        }

        tracing::info!(
            "Using expense data file {} (backup: {}, atomic writes: {})",
            config.data_file.display(),
            config.backup_file.display(),
            config.atomic_writes
        );

        Ok(Self::new(Arc::new(config.build())))
    }
}
