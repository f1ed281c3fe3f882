//! Blob store that survives storage outages
//!
//! Wraps a durable store and falls back to memory for the rest of the
//! session the first time the durable store reports it is unavailable.
//! Attachments then live only as long as the process.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use super::blob::{BlobStore, FileBlobStore, MemoryBlobStore, LOGO_STORE};
use crate::config::{OnboardPaths, Settings};
use crate::error::{OnboardError, OnboardResult};

pub struct ResilientBlobStore {
    primary: Option<Box<dyn BlobStore>>,
    fallback: MemoryBlobStore,
    degraded: AtomicBool,
}

impl ResilientBlobStore {
    /// Wrap a durable store
    pub fn new(primary: Box<dyn BlobStore>) -> Self {
        Self {
            primary: Some(primary),
            fallback: MemoryBlobStore::new(),
            degraded: AtomicBool::new(false),
        }
    }

    /// A store that never touches disk
    pub fn in_memory() -> Self {
        Self {
            primary: None,
            fallback: MemoryBlobStore::new(),
            degraded: AtomicBool::new(true),
        }
    }

    /// Open the configured logo store, degrading to memory when it cannot be opened
    pub fn open(paths: &OnboardPaths, settings: &Settings) -> Self {
        if !settings.persist_attachments {
            info!("attachment persistence disabled; keeping attachments in memory");
            return Self::in_memory();
        }

        match FileBlobStore::open(
            paths.blob_dir(),
            &settings.blob_database,
            settings.blob_version,
            LOGO_STORE,
        ) {
            Ok(store) => Self::new(Box::new(store)),
            Err(e) => {
                warn!(error = %e, "attachment storage unavailable; keeping attachments in memory");
                Self::in_memory()
            }
        }
    }

    /// Whether attachments are currently memory-only
    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::SeqCst)
    }

    fn durable(&self) -> Option<&dyn BlobStore> {
        if self.is_degraded() {
            None
        } else {
            self.primary.as_deref()
        }
    }

    fn degrade(&self, err: &OnboardError) {
        if !self.degraded.swap(true, Ordering::SeqCst) {
            warn!(error = %err, "attachment storage failed; continuing in memory for this session");
        }
    }
}

impl BlobStore for ResilientBlobStore {
    fn put(&self, key: &str, blob: &[u8]) -> OnboardResult<()> {
        if let Some(primary) = self.durable() {
            match primary.put(key, blob) {
                Err(e) if e.is_storage_unavailable() => self.degrade(&e),
                result => return result,
            }
        }
        self.fallback.put(key, blob)
    }

    fn get(&self, key: &str) -> OnboardResult<Option<Vec<u8>>> {
        if let Some(primary) = self.durable() {
            match primary.get(key) {
                Err(e) if e.is_storage_unavailable() => self.degrade(&e),
                result => return result,
            }
        }
        self.fallback.get(key)
    }

    fn delete(&self, key: &str) -> OnboardResult<bool> {
        if let Some(primary) = self.durable() {
            match primary.delete(key) {
                Err(e) if e.is_storage_unavailable() => self.degrade(&e),
                result => return result,
            }
        }
        self.fallback.delete(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::blob::COMPANY_LOGO_KEY;
    use tempfile::TempDir;

    /// Durable store whose disk has gone away
    struct UnavailableStore;

    impl BlobStore for UnavailableStore {
        fn put(&self, _key: &str, _blob: &[u8]) -> OnboardResult<()> {
            Err(OnboardError::StorageUnavailable("quota exceeded".into()))
        }

        fn get(&self, _key: &str) -> OnboardResult<Option<Vec<u8>>> {
            Err(OnboardError::StorageUnavailable("quota exceeded".into()))
        }

        fn delete(&self, _key: &str) -> OnboardResult<bool> {
            Err(OnboardError::StorageUnavailable("quota exceeded".into()))
        }
    }

    #[test]
    fn test_failure_degrades_to_memory() {
        let store = ResilientBlobStore::new(Box::new(UnavailableStore));
        assert!(!store.is_degraded());

        store.put(COMPANY_LOGO_KEY, b"logo").unwrap();
        assert!(store.is_degraded());
        assert_eq!(store.get(COMPANY_LOGO_KEY).unwrap(), Some(b"logo".to_vec()));
    }

    #[test]
    fn test_read_failure_degrades_without_error() {
        let store = ResilientBlobStore::new(Box::new(UnavailableStore));
        assert_eq!(store.get(COMPANY_LOGO_KEY).unwrap(), None);
        assert!(store.is_degraded());
    }

    #[test]
    fn test_bad_key_is_not_swallowed() {
        let store = ResilientBlobStore::in_memory();
        assert!(store.put("a/b", b"x").is_err());
    }

    #[test]
    fn test_open_uses_durable_store() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();

        ResilientBlobStore::open(&paths, &settings)
            .put(COMPANY_LOGO_KEY, b"persisted")
            .unwrap();

        let reopened = ResilientBlobStore::open(&paths, &settings);
        assert!(!reopened.is_degraded());
        assert_eq!(
            reopened.get(COMPANY_LOGO_KEY).unwrap(),
            Some(b"persisted".to_vec())
        );
    }

    #[test]
    fn test_open_honours_persistence_setting() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            persist_attachments: false,
            ..Settings::default()
        };

        let store = ResilientBlobStore::open(&paths, &settings);
        assert!(store.is_degraded());
        store.put(COMPANY_LOGO_KEY, b"x").unwrap();
        assert!(!paths.blob_dir().exists());
    }

    #[test]
    fn test_open_degrades_when_root_is_blocked() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::create_dir_all(paths.data_dir()).unwrap();
        std::fs::write(paths.blob_dir(), b"not a directory").unwrap();

        let store = ResilientBlobStore::open(&paths, &Settings::default());
        assert!(store.is_degraded());
    }
}
