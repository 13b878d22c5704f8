//! # Key-Value Persistence
//!
//! String-valued storage the session store sits on. Two backends:
//!
//! - [`FileStore`]: a JSON object file. Every write replaces the whole file through a
//!   temporary sibling and a rename, so a multi-key write lands together or not at all.
//!   A file that no longer parses fails reads; the next write moves it aside and
//!   starts from an empty object.
//! - [`MemoryStore`]: process-local map for tests and ephemeral runs.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::{Mutex, RwLock};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("storage file is not a JSON object: {0}")]
    Format(#[from] serde_json::Error),

    #[error("storage is read-only")]
    ReadOnly,
}

/// String key/value persistence.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write every pair in one operation.
    fn set_many(&self, entries: &[(&str, String)]) -> Result<(), StorageError>;

    /// Remove every key in one operation; missing keys are not an error.
    fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError>;

    fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.set_many(&[(key, value)])
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.remove_many(&[key])
    }
}

type Entries = BTreeMap<String, String>;

/// JSON-object file store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Entries, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Entries::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn persist(&self, entries: &Entries) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, serde_json::to_string_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut Entries)) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock();
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(StorageError::Format(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Storage file is corrupt, starting over");
                self.set_aside();
                Entries::new()
            }
            Err(e) => return Err(e),
        };
        apply(&mut entries);
        self.persist(&entries)
    }

    /// Keep an unreadable file next to the store as `<name>.corrupt`.
    fn set_aside(&self) {
        let mut aside = self.path.clone().into_os_string();
        aside.push(".corrupt");
        if let Err(e) = fs::rename(&self.path, PathBuf::from(aside)) {
            tracing::warn!(error = %e, "Could not move the corrupt storage file aside");
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set_many(&self, pairs: &[(&str, String)]) -> Result<(), StorageError> {
        self.update(|entries| {
            for (key, value) in pairs {
                entries.insert((*key).to_string(), value.clone());
            }
        })
    }

    fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        self.update(|entries| {
            for key in keys {
                entries.remove(*key);
            }
        })
    }
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<Entries>,
    read_only: RwLock<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with [`StorageError::ReadOnly`].
    pub fn set_read_only(&self, read_only: bool) {
        *self.read_only.write() = read_only;
    }

    /// Write a raw value, bypassing the read-only flag.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries.write().insert(key.to_string(), value.to_string());
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if *self.read_only.read() {
            Err(StorageError::ReadOnly)
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set_many(&self, pairs: &[(&str, String)]) -> Result<(), StorageError> {
        self.check_writable()?;
        let mut entries = self.entries.write();
        for (key, value) in pairs {
            entries.insert((*key).to_string(), value.clone());
        }
        Ok(())
    }

    fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        self.check_writable()?;
        let mut entries = self.entries.write();
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get("token").unwrap(), None);
    }

    #[test]
    fn test_file_store_set_many_persists_together() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let store = FileStore::new(&path);

        store
            .set_many(&[("token", "abc".into()), ("expiration", "42".into())])
            .unwrap();

        // A second handle over the same file sees both keys
        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("token").unwrap().as_deref(), Some("abc"));
        assert_eq!(reopened.get("expiration").unwrap().as_deref(), Some("42"));
        assert!(!dir.path().join("nested").join("storage.json.tmp").exists());
    }

    #[test]
    fn test_file_store_remove_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("storage.json"));
        store
            .set_many(&[("token", "abc".into()), ("theme", "light".into())])
            .unwrap();

        store.remove_many(&["token", "user"]).unwrap();

        assert_eq!(store.get("token").unwrap(), None);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "[1, 2").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.get("token"), Err(StorageError::Format(_))));
    }

    #[test]
    fn test_file_store_write_recovers_from_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{"token": "abc""#).unwrap();
        let store = FileStore::new(&path);

        store
            .set_many(&[("token", "fresh".into()), ("expiration", "42".into())])
            .unwrap();
        store.remove_many(&["expiration"]).unwrap();

        assert_eq!(store.get("token").unwrap().as_deref(), Some("fresh"));
        assert_eq!(store.get("expiration").unwrap(), None);
        assert!(dir.path().join("storage.json.corrupt").exists());
    }

    #[test]
    fn test_memory_store_read_only_blocks_writes() {
        let store = MemoryStore::new();
        store.set_read_only(true);
        assert!(matches!(store.set("token", "x".into()), Err(StorageError::ReadOnly)));
        assert_eq!(store.get("token").unwrap(), None);
    }
}
