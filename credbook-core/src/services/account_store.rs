//! Account store: sole owner of the account collection.
//!
//! Holds the in-memory list, applies CRUD operations to it, and mirrors
//! every mutation to the injected [`BlobStore`] under a fixed key.
//! Persistence is best-effort: the in-memory state is authoritative and a
//! failed write never fails the operation that triggered it.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::BlobStore;
use crate::types::{Account, AccountUpdate, NewAccount};

/// Fixed blob-store key the whole collection is persisted under
pub const STORAGE_KEY: &str = "accounts-storage";

/// The account store
pub struct AccountStore {
    accounts: Vec<Account>,
    backend: Arc<dyn BlobStore>,
}

impl AccountStore {
    /// Create a store backed by `backend`, loading the persisted
    /// collection if one exists.
    ///
    /// A missing, unreadable, or structurally incompatible blob falls back
    /// to an empty collection; construction itself never fails.
    #[must_use]
    pub fn new(backend: Arc<dyn BlobStore>) -> Self {
        let accounts = Self::load(backend.as_ref());
        Self { accounts, backend }
    }

    fn load(backend: &dyn BlobStore) -> Vec<Account> {
        match backend.read(STORAGE_KEY).and_then(|blob| {
            blob.map_or_else(|| Ok(Vec::new()), |json| Self::decode(&json))
        }) {
            Ok(accounts) => accounts,
            Err(e) => {
                log::error!("Failed to load accounts, starting empty: {e}");
                Vec::new()
            }
        }
    }

    fn decode(json: &str) -> CoreResult<Vec<Account>> {
        serde_json::from_str(json).map_err(|e| CoreError::SerializationError(e.to_string()))
    }

    fn encode(accounts: &[Account]) -> CoreResult<String> {
        serde_json::to_string(accounts).map_err(|e| CoreError::SerializationError(e.to_string()))
    }

    /// Serialize the whole collection and overwrite the stored blob.
    ///
    /// Failures are logged and swallowed; callers still report success.
    fn persist(&self) {
        let result = Self::encode(&self.accounts)
            .and_then(|json| self.backend.write(STORAGE_KEY, &json));
        if let Err(e) = result {
            log::error!("Failed to persist accounts, in-memory state unaffected: {e}");
        }
    }

    // ===== Read operations =====

    /// Read-only view of the full collection, in insertion order.
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Number of accounts in the collection
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// `true` when the collection holds no accounts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Get an account by ID (linear scan).
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.id == id)
    }

    // ===== Mutations =====

    /// Create an account from `new` and append it to the collection.
    ///
    /// The ID is generated here (UUID v4) and returned; callers never
    /// supply one.
    pub fn add(&mut self, new: NewAccount) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.accounts.push(Account {
            id: id.clone(),
            label: new.label,
            kind: new.kind,
            login: new.login,
            password: new.password,
        });
        self.persist();
        id
    }

    /// Seed a fresh record for subsequent editing: no tags, `Local`,
    /// empty login, empty (but set) password. Returns the new ID.
    pub fn create_empty(&mut self) -> String {
        self.add(NewAccount::empty())
    }

    /// Apply a partial update to the account with `id`.
    ///
    /// Only fields present in `update` change; `id` never does. The
    /// password is doubly optional: `Some(None)` clears it, the outer
    /// `None` leaves it untouched.
    pub fn update(&mut self, id: &str, update: AccountUpdate) -> CoreResult<()> {
        let account = self
            .accounts
            .iter_mut()
            .find(|acc| acc.id == id)
            .ok_or_else(|| CoreError::AccountNotFound(id.to_string()))?;

        if let Some(label) = update.label {
            account.label = label;
        }
        if let Some(kind) = update.kind {
            account.kind = kind;
        }
        if let Some(login) = update.login {
            account.login = login;
        }
        if let Some(password) = update.password {
            account.password = password;
        }

        self.persist();
        Ok(())
    }

    /// Remove the account with `id` from the collection.
    pub fn remove(&mut self, id: &str) -> CoreResult<()> {
        let idx = self
            .accounts
            .iter()
            .position(|acc| acc.id == id)
            .ok_or_else(|| CoreError::AccountNotFound(id.to_string()))?;
        self.accounts.remove(idx);
        self.persist();
        Ok(())
    }
}
