//! Storage trait and error types

use crate::storage::Record;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for the dedup record store
///
/// Implementations must make `insert` atomic per fingerprint: inserting a
/// record whose fingerprint is already present is a no-op reported through
/// the return value, never a second row. Duplicate URLs within one list page
/// are possible and rely on this.
pub trait RecordStore {
    /// Returns true if a record with this fingerprint is already stored
    fn contains(&self, fingerprint: &str) -> StorageResult<bool>;

    /// Inserts a record, keyed by its fingerprint
    ///
    /// Returns true if the record was written, false if the fingerprint was
    /// already present (check-then-insert in a single statement).
    fn insert(&mut self, record: &Record) -> StorageResult<bool>;

    /// Looks up a record by fingerprint
    fn get(&self, fingerprint: &str) -> StorageResult<Option<Record>>;

    /// Total number of stored records
    fn count_records(&self) -> StorageResult<u64>;

    /// Number of records that carry non-empty download-variant metadata
    fn count_with_download_info(&self) -> StorageResult<u64>;

    /// Epoch-millisecond timestamp of the most recently assembled record
    fn latest_fetch_time(&self) -> StorageResult<Option<i64>>;
}
