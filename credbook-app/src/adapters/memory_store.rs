//! In-memory blob store.
//!
//! Backs the account store for tests and ephemeral sessions; nothing
//! survives the process.

use std::collections::HashMap;
use std::sync::Mutex;

use credbook_core::error::{CoreError, CoreResult};
use credbook_core::traits::BlobStore;

/// Blob store backed by a plain in-memory map.
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> CoreResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.data
            .lock()
            .map_err(|_| CoreError::StorageError("memory store lock poisoned".to_string()))
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> CoreResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
