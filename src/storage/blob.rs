//! Attachment blob stores
//!
//! A blob store is a flat key-value container of raw bytes scoped to one
//! logical database and version. The durable implementation keeps one file
//! per key under `<root>/<database>/v<version>/<store>/`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use tracing::debug;

use super::file_io::write_atomic;
use crate::error::{OnboardError, OnboardResult};

/// Key of the company logo slot
pub const COMPANY_LOGO_KEY: &str = "companyLogo";

/// Object store holding logos
pub const LOGO_STORE: &str = "logos";

/// Key-value storage for binary attachments
pub trait BlobStore: Send + Sync {
    /// Store `blob` under `key`, replacing any previous value
    fn put(&self, key: &str, blob: &[u8]) -> OnboardResult<()>;

    /// Fetch the bytes stored under `key`
    fn get(&self, key: &str) -> OnboardResult<Option<Vec<u8>>>;

    /// Remove `key`; returns whether anything was stored
    fn delete(&self, key: &str) -> OnboardResult<bool>;
}

/// Keys become file names, so only a conservative alphabet is accepted
fn check_key(key: &str) -> OnboardResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(OnboardError::Storage(format!("Invalid blob key '{}'", key)))
    }
}

fn unavailable(action: &str, path: &Path, err: std::io::Error) -> OnboardError {
    OnboardError::StorageUnavailable(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Blob store backed by one file per key
#[derive(Debug)]
pub struct FileBlobStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileBlobStore {
    /// Open (creating if needed) an object store inside a database
    ///
    /// Opening an existing store leaves its contents untouched.
    pub fn open(
        root: impl AsRef<Path>,
        database: &str,
        version: u32,
        store: &str,
    ) -> OnboardResult<Self> {
        check_key(database)?;
        check_key(store)?;

        let dir = root
            .as_ref()
            .join(database)
            .join(format!("v{}", version))
            .join(store);
        fs::create_dir_all(&dir).map_err(|e| unavailable("open blob store", &dir, e))?;
        debug!(dir = %dir.display(), "opened blob store");

        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    /// Directory holding this store's blobs
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds (or would hold) `key`
    pub fn blob_path(&self, key: &str) -> OnboardResult<PathBuf> {
        check_key(key)?;
        Ok(self.dir.join(format!("{}.bin", key)))
    }
}

impl BlobStore for FileBlobStore {
    fn put(&self, key: &str, blob: &[u8]) -> OnboardResult<()> {
        let path = self.blob_path(key)?;
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| OnboardError::Storage("Blob store lock poisoned".into()))?;
        write_atomic(&path, blob).map_err(|e| unavailable("write", &path, e))?;
        debug!(key, bytes = blob.len(), "stored blob");
        Ok(())
    }

    fn get(&self, key: &str) -> OnboardResult<Option<Vec<u8>>> {
        let path = self.blob_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(unavailable("read", &path, e)),
        }
    }

    fn delete(&self, key: &str) -> OnboardResult<bool> {
        let path = self.blob_path(key)?;
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| OnboardError::Storage("Blob store lock poisoned".into()))?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(unavailable("delete", &path, e)),
        }
    }
}

/// Session-only blob store
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn put(&self, key: &str, blob: &[u8]) -> OnboardResult<()> {
        check_key(key)?;
        self.blobs
            .write()
            .map_err(|_| OnboardError::Storage("Blob store lock poisoned".into()))?
            .insert(key.to_string(), blob.to_vec());
        Ok(())
    }

    fn get(&self, key: &str) -> OnboardResult<Option<Vec<u8>>> {
        check_key(key)?;
        Ok(self
            .blobs
            .read()
            .map_err(|_| OnboardError::Storage("Blob store lock poisoned".into()))?
            .get(key)
            .cloned())
    }

    fn delete(&self, key: &str) -> OnboardResult<bool> {
        check_key(key)?;
        Ok(self
            .blobs
            .write()
            .map_err(|_| OnboardError::Storage("Blob store lock poisoned".into()))?
            .remove(key)
            .is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open(root: &Path) -> FileBlobStore {
        FileBlobStore::open(root, "CompanyFormDB", 1, LOGO_STORE).unwrap()
    }

    #[test]
    fn test_round_trip_through_fresh_handle() {
        let temp_dir = TempDir::new().unwrap();
        let logo = vec![0x89, b'P', b'N', b'G', 0, 1, 2, 255];

        open(temp_dir.path()).put(COMPANY_LOGO_KEY, &logo).unwrap();

        let reopened = open(temp_dir.path());
        assert_eq!(reopened.get(COMPANY_LOGO_KEY).unwrap(), Some(logo));
    }

    #[test]
    fn test_reopen_does_not_wipe() {
        let temp_dir = TempDir::new().unwrap();
        let store = open(temp_dir.path());
        store.put(COMPANY_LOGO_KEY, b"logo").unwrap();

        for _ in 0..3 {
            open(temp_dir.path());
        }
        assert_eq!(store.get(COMPANY_LOGO_KEY).unwrap(), Some(b"logo".to_vec()));
    }

    #[test]
    fn test_missing_key_is_none() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(open(temp_dir.path()).get(COMPANY_LOGO_KEY).unwrap(), None);
    }

    #[test]
    fn test_versions_are_separate() {
        let temp_dir = TempDir::new().unwrap();
        open(temp_dir.path()).put(COMPANY_LOGO_KEY, b"v1").unwrap();

        let v2 = FileBlobStore::open(temp_dir.path(), "CompanyFormDB", 2, LOGO_STORE).unwrap();
        assert_eq!(v2.get(COMPANY_LOGO_KEY).unwrap(), None);
    }

    #[test]
    fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let store = open(temp_dir.path());
        store.put(COMPANY_LOGO_KEY, b"logo").unwrap();

        assert!(store.delete(COMPANY_LOGO_KEY).unwrap());
        assert!(!store.delete(COMPANY_LOGO_KEY).unwrap());
        assert_eq!(store.get(COMPANY_LOGO_KEY).unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = open(temp_dir.path());
        let err = store.put("../escape", b"x").unwrap_err();
        assert!(matches!(err, OnboardError::Storage(_)));
        assert!(!err.is_storage_unavailable());
    }

    #[test]
    fn test_unwritable_root_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, b"file").unwrap();

        let err = FileBlobStore::open(&blocker, "CompanyFormDB", 1, LOGO_STORE).unwrap_err();
        assert!(err.is_storage_unavailable());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryBlobStore::new();
        store.put(COMPANY_LOGO_KEY, b"abc").unwrap();
        assert_eq!(store.get(COMPANY_LOGO_KEY).unwrap(), Some(b"abc".to_vec()));
        assert!(store.delete(COMPANY_LOGO_KEY).unwrap());
        assert_eq!(store.get(COMPANY_LOGO_KEY).unwrap(), None);
    }
}
