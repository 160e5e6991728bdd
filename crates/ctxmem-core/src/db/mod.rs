//! Key-value persistence for ctxmem.
//!
//! The note store keeps two opaque JSON values in a host key-value facility.
//! This module defines that facility and ships two backends:
//!
//! - [`SqliteKv`]: a single `kv` table in a SQLite file (feature `db`)
//! - [`MemoryKv`]: a process-local map, for tests and ephemeral hosts
//!
//! Values are wrapped in a version envelope (`{"version": 1, "data": ...}`);
//! bare values written before the envelope existed are still accepted.

#[cfg(feature = "db")]
mod sqlite;

#[cfg(feature = "db")]
pub use sqlite::SqliteKv;

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

/// Current envelope version.
pub const STORAGE_VERSION: u32 = 1;

/// Host key-value facility.
///
/// Implementations only move strings; the store owns the encoding.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory backend.
#[derive(Debug, Default)]
pub struct MemoryKv {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().map_err(|_| Error::LockPoisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().map_err(|_| Error::LockPoisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T: ?Sized> {
    version: u32,
    data: &'a T,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Stored<T> {
    Versioned { version: u32, data: T },
    Legacy(T),
}

/// Encode a value inside the current envelope.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(&EnvelopeRef {
        version: STORAGE_VERSION,
        data: value,
    })?)
}

/// Decode an enveloped or legacy value.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T> {
    match serde_json::from_str::<Stored<T>>(raw) {
        Ok(Stored::Versioned { version, data }) => {
            if version > STORAGE_VERSION {
                return Err(Error::UnsupportedVersion {
                    found: version,
                    supported: STORAGE_VERSION,
                });
            }
            Ok(data)
        }
        Ok(Stored::Legacy(data)) => Ok(data),
        // Untagged errors are opaque; retry as a bare value to surface the real cause.
        Err(_) => Ok(serde_json::from_str::<T>(raw)?),
    }
}

/// Read `key`, falling back to `T::default()` when absent.
pub fn load_or_default<T>(kv: &dyn KeyValueStore, key: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match kv.get(key)? {
        Some(raw) => decode(&raw),
        None => Ok(T::default()),
    }
}

/// Encode and write `value` under `key`.
pub fn save<T: Serialize + ?Sized>(kv: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    kv.set(key, &encode(value)?)
}
