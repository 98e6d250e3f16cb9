//! Platform-agnostic application bootstrap for Credbook.
//!
//! Provides `AppState` (the wired-up account store) and `AppStateBuilder`
//! (adapter injection). Frontends construct this once at startup; tests
//! inject a [`MemoryStore`] or a [`FileStore`] in a temp directory.

use std::sync::Arc;

use credbook_core::error::CoreResult;
use credbook_core::services::AccountStore;
use credbook_core::traits::BlobStore;

pub mod adapters;

pub use adapters::{FileStore, MemoryStore};

/// Application state: owns the account store.
pub struct AppState {
    /// The account store
    pub account_store: AccountStore,
}

/// Builder for [`AppState`] with storage adapter injection.
///
/// Without an explicit backend, accounts are persisted under the platform
/// data directory via [`FileStore`].
#[derive(Default)]
pub struct AppStateBuilder {
    backend: Option<Arc<dyn BlobStore>>,
}

impl AppStateBuilder {
    /// Create a builder with no backend override.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject a specific storage backend.
    #[must_use]
    pub fn with_backend(mut self, backend: Arc<dyn BlobStore>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Build the application state, loading any persisted accounts.
    ///
    /// Fails only when no backend was injected and the platform has no
    /// data directory to default to.
    pub fn build(self) -> CoreResult<AppState> {
        let backend = match self.backend {
            Some(backend) => backend,
            None => {
                let dir = FileStore::default_dir()?;
                log::debug!("using file-backed account storage at {}", dir.display());
                Arc::new(FileStore::new(dir)) as Arc<dyn BlobStore>
            }
        };
        Ok(AppState {
            account_store: AccountStore::new(backend),
        })
    }
}
