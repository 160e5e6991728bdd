//! Opening the note store.
//!
//! All commands share one SQLite file. The path is resolved by
//! [`Config::database_path`]:
//! 1. CTXMEM_DATABASE_PATH environment variable
//! 2. `storage.database_path` in the config file
//! 3. `<data_dir>/ctxmem.db`

use anyhow::{Context, Result};
use ctxmem_core::db::SqliteKv;
use ctxmem_core::{NoteStore, SystemClock};
use std::sync::Arc;
use tracing::debug;

use crate::config::Config;

/// Open (creating if needed) the note store for this invocation.
pub fn open_store(config: &Config) -> Result<Arc<NoteStore>> {
    let path = config.database_path();
    debug!(path = %path.display(), "Opening note database");

    let kv = SqliteKv::open_path(&path)
        .with_context(|| format!("Failed to open database at {}", path.display()))?;
    kv.ping().context("Database is not usable")?;

    Ok(Arc::new(NoteStore::new(Arc::new(kv), Arc::new(SystemClock))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;
    use tempfile::tempdir;

    #[test]
    fn test_open_store_persists_between_opens() {
        let temp = tempdir().expect("Failed to create temp dir");
        let config = Config {
            storage: StorageConfig {
                database_path: Some(temp.path().join("nested").join("notes.db")),
            },
            ..Config::default()
        };
        // An explicit env override would point elsewhere.
        if std::env::var("CTXMEM_DATABASE_PATH").is_ok() {
            return;
        }

        let store = open_store(&config).unwrap();
        store.record_file_access("/a.rs").unwrap();
        drop(store);

        let reopened = open_store(&config).unwrap();
        assert!(reopened.last_access("/a.rs").unwrap().is_some());
    }
}
