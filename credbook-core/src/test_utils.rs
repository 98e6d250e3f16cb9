//! Test helper module
//!
//! Provides a mock blob store with fault injection and factory helpers.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{CoreError, CoreResult};
use crate::services::AccountStore;
use crate::traits::BlobStore;
use crate::types::{AccountType, Label, NewAccount};

/// In-memory blob store with injectable read/write failures.
pub struct MockBlobStore {
    data: Mutex<HashMap<String, String>>,
    /// If `Some`, `read` returns this as a `StorageError`
    read_error: Mutex<Option<String>>,
    /// If `Some`, `write` returns this as a `StorageError`
    write_error: Mutex<Option<String>>,
}

impl MockBlobStore {
    pub fn new() -> Self {
        Self {
            data: Mutex::new(HashMap::new()),
            read_error: Mutex::new(None),
            write_error: Mutex::new(None),
        }
    }

    /// Seed a blob directly, bypassing the `BlobStore` trait.
    pub fn insert(&self, key: &str, value: &str) {
        self.data
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    /// What is currently stored under `key`, if anything.
    pub fn stored(&self, key: &str) -> Option<String> {
        self.data.lock().unwrap().get(key).cloned()
    }

    pub fn set_read_error(&self, error: Option<String>) {
        *self.read_error.lock().unwrap() = error;
    }

    pub fn set_write_error(&self, error: Option<String>) {
        *self.write_error.lock().unwrap() = error;
    }
}

impl BlobStore for MockBlobStore {
    fn read(&self, key: &str) -> CoreResult<Option<String>> {
        if let Some(msg) = self.read_error.lock().unwrap().clone() {
            return Err(CoreError::StorageError(msg));
        }
        Ok(self.data.lock().unwrap().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> CoreResult<()> {
        if let Some(msg) = self.write_error.lock().unwrap().clone() {
            return Err(CoreError::StorageError(msg));
        }
        self.insert(key, value);
        Ok(())
    }
}

/// Fresh store on an empty mock backend, plus a handle to the backend.
pub fn create_test_store() -> (AccountStore, Arc<MockBlobStore>) {
    let backend = Arc::new(MockBlobStore::new());
    let store = AccountStore::new(Arc::clone(&backend) as Arc<dyn BlobStore>);
    (store, backend)
}

/// A representative local account for `login`.
pub fn test_new_account(login: &str) -> NewAccount {
    NewAccount {
        label: vec![Label::new("work")],
        kind: AccountType::Local,
        login: login.to_string(),
        password: Some("secret".to_string()),
    }
}
