//! File-backed blob store.
//!
//! Each key is persisted as one JSON file under a base directory
//! (`<base>/<key>.json`). A missing file is "key absent", not an error,
//! so a fresh profile directory behaves like an empty store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use credbook_core::error::{CoreError, CoreResult};
use credbook_core::traits::BlobStore;

/// Directory name under the platform data dir
const APP_DIR_NAME: &str = "credbook";

/// Blob store persisting each key to a file on disk.
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `base_dir`.
    ///
    /// The directory is created lazily on the first write, so
    /// construction never touches the filesystem.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Platform default base directory: `<data_dir>/credbook`.
    pub fn default_dir() -> CoreResult<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| {
                CoreError::StorageError("no platform data directory available".to_string())
            })
    }

    /// Directory this store reads and writes under.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileStore {
    fn read(&self, key: &str) -> CoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::StorageError(format!("read {key}: {e}"))),
        }
    }

    fn write(&self, key: &str, value: &str) -> CoreResult<()> {
        fs::create_dir_all(&self.base_dir)
            .map_err(|e| CoreError::StorageError(format!("create {}: {e}", self.base_dir.display())))?;
        fs::write(self.path_for(key), value)
            .map_err(|e| CoreError::StorageError(format!("write {key}: {e}")))
    }
}
