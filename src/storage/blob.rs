//! Blob storage
//!
//! Named byte blobs in a private local storage area. A write replaces the
//! whole blob.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Storage error types
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Key-value blob store
pub trait BlobStore {
    /// Read a blob, `None` if nothing has been written under `key`
    fn read(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Replace the blob under `key`
    fn write(&mut self, key: &str, bytes: &[u8]) -> StorageResult<()>;
}

/// Blob store backed by files in a directory
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a key is stored at
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_err(&path)(e)),
        }
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> StorageResult<()> {
        fs::create_dir_all(&self.root).map_err(io_err(&self.root))?;

        // Write beside the target then rename, so readers never see a partial document
        let path = self.path_for(key);
        let tmp = self.root.join(format!(".{}.tmp", key));
        fs::write(&tmp, bytes).map_err(io_err(&tmp))?;
        fs::rename(&tmp, &path).map_err(io_err(&path))?;
        Ok(())
    }
}

/// In-memory blob store
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, Vec<u8>>,
    writes: usize,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of writes performed so far
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.blobs.get(key).map(Vec::as_slice)
    }

    pub fn insert(&mut self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.blobs.insert(key.into(), bytes.into());
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> StorageResult<()> {
        self.blobs.insert(key.to_string(), bytes.to_vec());
        self.writes += 1;
        Ok(())
    }
}
