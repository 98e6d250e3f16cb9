//! Storage backend abstract trait

use crate::error::CoreResult;

/// Key-value blob storage capability.
///
/// The store never touches the platform's storage directly; callers inject
/// an implementation of this trait instead.
///
/// Platform implementations:
/// - `FileStore` (credbook-app): one JSON file per key on disk
/// - `MemoryStore` (credbook-app): in-memory map, for tests and
///   ephemeral sessions
pub trait BlobStore: Send + Sync {
    /// Read the blob stored under `key`.
    ///
    /// # Returns
    /// * `Ok(Some(value))` - the key exists
    /// * `Ok(None)` - the key is absent (not an error)
    fn read(&self, key: &str) -> CoreResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous blob.
    fn write(&self, key: &str, value: &str) -> CoreResult<()>;
}
