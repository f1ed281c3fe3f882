//! Detached attachment writes
//!
//! Navigation never waits for an attachment to be persisted. A write is
//! spawned on its own thread and the caller gets a [`PendingWrite`] handle
//! it may poll, join, or keep around until shutdown.
//!
//! Writes to the same key land in the order they were spawned. Each spawn
//! takes the next generation for its key; a worker that finishes after a
//! newer generation has already been committed drops its bytes.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

use tracing::{debug, info, warn};

use super::blob::BlobStore;
use crate::error::{OnboardError, OnboardResult};

/// Handle to an attachment write running in the background
#[derive(Debug)]
pub struct PendingWrite {
    key: String,
    generation: u64,
    handle: JoinHandle<OnboardResult<()>>,
}

impl PendingWrite {
    /// Blob key being written
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Position of this write among writes to the same key
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the write has settled (successfully or not)
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the write settles and return its outcome
    pub fn wait(self) -> OnboardResult<()> {
        self.handle
            .join()
            .map_err(|_| OnboardError::Storage(format!("Writer for '{}' panicked", self.key)))?
    }
}

#[derive(Debug, Default)]
struct Generations {
    issued: HashMap<String, u64>,
    committed: HashMap<String, u64>,
}

/// Spawns background writes into one blob store, ordered per key
#[derive(Clone)]
pub struct BlobWriter {
    store: Arc<dyn BlobStore>,
    generations: Arc<Mutex<Generations>>,
}

impl BlobWriter {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            store,
            generations: Arc::new(Mutex::new(Generations::default())),
        }
    }

    /// Store the writes land in
    pub fn store(&self) -> &Arc<dyn BlobStore> {
        &self.store
    }

    /// Read `source` and store it under `key` on a background thread
    ///
    /// The file is read on the worker, so the caller only ever holds the path.
    /// If a later spawn for the same key commits first, this write is dropped.
    pub fn spawn_put(&self, key: &str, source: PathBuf) -> PendingWrite {
        let key = key.to_string();
        let generation = self.next_generation(&key);
        let worker_key = key.clone();
        let store = Arc::clone(&self.store);
        let generations = Arc::clone(&self.generations);

        let handle = thread::spawn(move || {
            let result = fs::read(&source)
                .map_err(|e| {
                    OnboardError::Io(format!("Failed to read {}: {}", source.display(), e))
                })
                .and_then(|bytes| {
                    commit(store.as_ref(), &generations, &worker_key, generation, &bytes)
                        .map(|written| written.then_some(bytes.len()))
                });

            match result {
                Ok(Some(bytes)) => {
                    info!(key = %worker_key, generation, bytes, source = %source.display(), "attachment persisted");
                    Ok(())
                }
                Ok(None) => {
                    debug!(key = %worker_key, generation, "attachment superseded by a newer write");
                    Ok(())
                }
                Err(e) => {
                    warn!(key = %worker_key, generation, error = %e, "attachment was not persisted");
                    Err(e)
                }
            }
        });

        PendingWrite {
            key,
            generation,
            handle,
        }
    }

    fn next_generation(&self, key: &str) -> u64 {
        let mut generations = self
            .generations
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let issued = generations.issued.entry(key.to_string()).or_insert(0);
        *issued += 1;
        *issued
    }
}

impl std::fmt::Debug for BlobWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlobWriter").finish_non_exhaustive()
    }
}

/// Put `bytes` unless a newer generation for `key` is already in the store
///
/// The generation lock is held across the put so commits never interleave.
fn commit(
    store: &dyn BlobStore,
    generations: &Mutex<Generations>,
    key: &str,
    generation: u64,
    bytes: &[u8],
) -> OnboardResult<bool> {
    let mut generations = generations.lock().unwrap_or_else(PoisonError::into_inner);

    if generations.committed.get(key).is_some_and(|&latest| latest > generation) {
        return Ok(false);
    }

    store.put(key, bytes)?;
    generations.committed.insert(key.to_string(), generation);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::blob::{MemoryBlobStore, COMPANY_LOGO_KEY};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tempfile::TempDir;

    /// Memory store whose first put stalls, so an older write finishes last
    #[derive(Default)]
    struct StallFirstPut {
        inner: MemoryBlobStore,
        puts: AtomicUsize,
    }

    impl BlobStore for StallFirstPut {
        fn put(&self, key: &str, blob: &[u8]) -> OnboardResult<()> {
            if self.puts.fetch_add(1, Ordering::SeqCst) == 0 {
                thread::sleep(Duration::from_millis(300));
            }
            self.inner.put(key, blob)
        }

        fn get(&self, key: &str) -> OnboardResult<Option<Vec<u8>>> {
            self.inner.get(key)
        }

        fn delete(&self, key: &str) -> OnboardResult<bool> {
            self.inner.delete(key)
        }
    }

    fn source(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_write_lands_in_store() {
        let temp_dir = TempDir::new().unwrap();
        let logo = source(&temp_dir, "logo.png", b"png bytes");

        let writer = BlobWriter::new(Arc::new(MemoryBlobStore::new()));
        let pending = writer.spawn_put(COMPANY_LOGO_KEY, logo);
        assert_eq!(pending.key(), COMPANY_LOGO_KEY);
        assert_eq!(pending.generation(), 1);

        pending.wait().unwrap();
        assert_eq!(
            writer.store().get(COMPANY_LOGO_KEY).unwrap(),
            Some(b"png bytes".to_vec())
        );
    }

    #[test]
    fn test_missing_source_reports_error() {
        let temp_dir = TempDir::new().unwrap();
        let writer = BlobWriter::new(Arc::new(MemoryBlobStore::new()));

        let pending = writer.spawn_put(COMPANY_LOGO_KEY, temp_dir.path().join("nope.png"));

        assert!(matches!(pending.wait(), Err(OnboardError::Io(_))));
        assert_eq!(writer.store().get(COMPANY_LOGO_KEY).unwrap(), None);
    }

    #[test]
    fn test_latest_spawn_wins_when_older_write_is_slow() {
        let temp_dir = TempDir::new().unwrap();
        let old = source(&temp_dir, "old.png", b"OLD");
        let new = source(&temp_dir, "new.png", b"NEW");

        let writer = BlobWriter::new(Arc::new(StallFirstPut::default()));
        let first = writer.spawn_put(COMPANY_LOGO_KEY, old);
        let second = writer.spawn_put(COMPANY_LOGO_KEY, new);
        assert_eq!(second.generation(), first.generation() + 1);

        first.wait().unwrap();
        second.wait().unwrap();
        assert_eq!(
            writer.store().get(COMPANY_LOGO_KEY).unwrap(),
            Some(b"NEW".to_vec())
        );
    }

    #[test]
    fn test_stale_write_is_dropped_after_newer_commit() {
        let temp_dir = TempDir::new().unwrap();
        let writer = BlobWriter::new(Arc::new(MemoryBlobStore::new()));

        let stale = writer.next_generation(COMPANY_LOGO_KEY);
        let newer = writer.spawn_put(COMPANY_LOGO_KEY, source(&temp_dir, "new.png", b"NEW"));
        newer.wait().unwrap();

        let written = commit(
            writer.store().as_ref(),
            &writer.generations,
            COMPANY_LOGO_KEY,
            stale,
            b"OLD",
        )
        .unwrap();
        assert!(!written);
        assert_eq!(
            writer.store().get(COMPANY_LOGO_KEY).unwrap(),
            Some(b"NEW".to_vec())
        );
    }

    #[test]
    fn test_generations_are_per_key() {
        let temp_dir = TempDir::new().unwrap();
        let writer = BlobWriter::new(Arc::new(MemoryBlobStore::new()));

        let logo = writer.spawn_put(COMPANY_LOGO_KEY, source(&temp_dir, "a.png", b"a"));
        let doc = writer.spawn_put("finalDoc", source(&temp_dir, "b.pdf", b"b"));
        assert_eq!(logo.generation(), 1);
        assert_eq!(doc.generation(), 1);

        logo.wait().unwrap();
        doc.wait().unwrap();
        assert_eq!(writer.store().get("finalDoc").unwrap(), Some(b"b".to_vec()));
    }
}
