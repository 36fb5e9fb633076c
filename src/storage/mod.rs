//! Storage module
//!
//! Blob read/write primitive the store persists through.

pub mod blob;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore, StorageError, StorageResult};
