//! Local key-value storage for the persisted snapshot.
//!
//! [`FileStorage`] keeps each key in `<dir>/<key>.json` and writes through a
//! temp file in the same directory followed by a rename, so a crash mid-write
//! leaves the previous value intact. [`MemoryStorage`] backs tests and hosts
//! without a writable data directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Errors raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Keys become file names, so only `[A-Za-z0-9._-]` is allowed.
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    #[error("storage I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage lock poisoned")]
    Poisoned,
}

/// String values addressed by key.
pub trait KeyValueStorage: Send + Sync {
    /// The stored value, or `None` when the key was never set or was removed.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Whether `key` is usable as a storage key.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key != "."
        && key != ".."
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

// ── File backend ─────────────────────────────────────────────────────────────

/// One JSON file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// The directory is created lazily on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if !is_valid_key(key) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;
        write_atomic(&path, value.as_bytes()).map_err(|source| StorageError::Io { path, source })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}

/// Write `bytes` to `<path>.tmp` then rename it over `path`.
///
/// On any error the temp file is removed and `path` is left unchanged.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();
    let tmp_path = path.with_file_name(format!("{file_name}.tmp"));

    if let Err(e) = std::fs::write(&tmp_path, bytes) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e);
    }

    std::fs::rename(&tmp_path, path).inspect_err(|_| {
        let _ = std::fs::remove_file(&tmp_path);
    })
}

// ── Memory backend ───────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Return a unique temporary directory path for each test.
    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "portfolio_storage_{name}_{}",
            uuid::Uuid::new_v4()
        ))
    }

    #[test]
    fn key_validation_rejects_path_like_keys() {
        assert!(is_valid_key("portfolio-data"));
        assert!(is_valid_key("portfolio_data.v2"));
        assert!(!is_valid_key(""));
        assert!(!is_valid_key(".."));
        assert!(!is_valid_key("../escape"));
        assert!(!is_valid_key("a/b"));
        assert!(!is_valid_key("with space"));
    }

    #[test]
    fn file_storage_set_get_remove() {
        let dir = temp_dir("roundtrip");
        let storage = FileStorage::new(&dir);

        assert_eq!(storage.get("portfolio-data").expect("get"), None);
        storage.set("portfolio-data", "{\"projects\":[]}").expect("set");
        assert_eq!(
            storage.get("portfolio-data").expect("get").as_deref(),
            Some("{\"projects\":[]}")
        );
        assert!(dir.join("portfolio-data.json").exists());
        assert!(!dir.join("portfolio-data.json.tmp").exists());

        storage.remove("portfolio-data").expect("remove");
        assert_eq!(storage.get("portfolio-data").expect("get"), None);
        storage.remove("portfolio-data").expect("removing twice is fine");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn file_storage_overwrites_previous_value() {
        let dir = temp_dir("overwrite");
        let storage = FileStorage::new(&dir);
        storage.set("k", "first").expect("set");
        storage.set("k", "second").expect("set");
        assert_eq!(storage.get("k").expect("get").as_deref(), Some("second"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn file_storage_rejects_invalid_key() {
        let storage = FileStorage::new(temp_dir("invalid"));
        let err = storage.set("../x", "v").expect_err("invalid key");
        assert!(matches!(err, StorageError::InvalidKey(_)));
    }

    #[test]
    fn memory_storage_behaves_like_a_map() {
        let storage = MemoryStorage::new();
        storage.set("a", "1").expect("set");
        assert_eq!(storage.get("a").expect("get").as_deref(), Some("1"));
        storage.remove("a").expect("remove");
        assert_eq!(storage.get("a").expect("get"), None);
    }

    #[test]
    fn arc_wrapper_shares_entries() {
        let shared = Arc::new(MemoryStorage::new());
        let handle: Box<dyn KeyValueStorage> = Box::new(Arc::clone(&shared));
        handle.set("k", "v").expect("set");
        assert_eq!(shared.get("k").expect("get").as_deref(), Some("v"));
    }
}
