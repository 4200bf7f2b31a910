//! SQLite implementation of the record store

use crate::storage::schema::initialize_schema;
use crate::storage::traits::{RecordStore, StorageResult};
use crate::storage::Record;
use crate::HarvestError;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite storage backend
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens or creates the database at the given path
    pub fn new(path: &Path) -> Result<Self, HarvestError> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database (for testing)
    #[cfg(test)]
    pub fn new_in_memory() -> Result<Self, HarvestError> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }
}

impl RecordStore for SqliteStore {
    fn contains(&self, fingerprint: &str) -> StorageResult<bool> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM records WHERE fingerprint = ?1",
                params![fingerprint],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn insert(&mut self, record: &Record) -> StorageResult<bool> {
        let introduction = serde_json::to_string(&record.introduction)?;
        let navigation = serde_json::to_string(&record.navigation)?;
        let recommendations = serde_json::to_string(&record.recommendations)?;
        let download_info = serde_json::to_string(&record.download_info)?;

        // OR IGNORE keeps check-then-insert atomic on the primary key even
        // when the same URL shows up twice on one page.
        let changed = self.conn.execute(
            "INSERT OR IGNORE INTO records
             (fingerprint, url, title, thumbnail_image, author, location, publish_date,
              introduction, hi_res_image, navigation, recommendations, download_info, fetched_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            params![
                record.fingerprint,
                record.url,
                record.title,
                record.thumbnail_image,
                record.author,
                record.location,
                record.publish_date,
                introduction,
                record.hi_res_image,
                navigation,
                recommendations,
                download_info,
                record.fetched_at,
            ],
        )?;

        Ok(changed == 1)
    }

    fn get(&self, fingerprint: &str) -> StorageResult<Option<Record>> {
        let mut stmt = self.conn.prepare(
            "SELECT fingerprint, url, title, thumbnail_image, author, location, publish_date,
                    introduction, hi_res_image, navigation, recommendations, download_info, fetched_at
             FROM records WHERE fingerprint = ?1",
        )?;

        let row = stmt
            .query_row(params![fingerprint], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, String>(6)?,
                    row.get::<_, String>(7)?,
                    row.get::<_, String>(8)?,
                    row.get::<_, String>(9)?,
                    row.get::<_, String>(10)?,
                    row.get::<_, String>(11)?,
                    row.get::<_, i64>(12)?,
                ))
            })
            .optional()?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(Record {
            fingerprint: row.0,
            url: row.1,
            title: row.2,
            thumbnail_image: row.3,
            author: row.4,
            location: row.5,
            publish_date: row.6,
            introduction: serde_json::from_str(&row.7)?,
            hi_res_image: row.8,
            navigation: serde_json::from_str(&row.9)?,
            recommendations: serde_json::from_str(&row.10)?,
            download_info: serde_json::from_str(&row.11)?,
            fetched_at: row.12,
        }))
    }

    fn count_records(&self) -> StorageResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn count_with_download_info(&self) -> StorageResult<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM records WHERE download_info != '{}'",
            [],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    fn latest_fetch_time(&self) -> StorageResult<Option<i64>> {
        let max: Option<i64> = self
            .conn
            .query_row("SELECT MAX(fetched_at) FROM records", [], |row| row.get(0))?;
        Ok(max)
    }
}
