pub mod disk;
pub mod memory;

use crate::core::config::AppConfig;
use anyhow::{Context, Result};
use disk::FjallRateStore;

/// Opens the persistent rate store under the configured data path.
pub fn open(config: &AppConfig) -> Result<FjallRateStore> {
    let path = config.data_path()?.join("store");
    FjallRateStore::open(&path, &config.store.table, &config.store.index)
        .with_context(|| format!("Failed to open rate store at {}", path.display()))
}
