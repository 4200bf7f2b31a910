//! Database schema definitions

use rusqlite::Connection;

/// SQL schema for the database
///
/// Ordered sequences (introduction, navigation, recommendations) and the
/// opaque download map are stored as JSON text columns; the fingerprint
/// primary key is what makes check-then-insert atomic.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS records (
    fingerprint TEXT PRIMARY KEY,
    url TEXT NOT NULL,
    title TEXT NOT NULL,
    thumbnail_image TEXT NOT NULL,
    author TEXT NOT NULL,
    location TEXT NOT NULL,
    publish_date TEXT NOT NULL,
    introduction TEXT NOT NULL,
    hi_res_image TEXT NOT NULL,
    navigation TEXT NOT NULL,
    recommendations TEXT NOT NULL,
    download_info TEXT NOT NULL,
    fetched_at INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_records_publish_date ON records(publish_date);
CREATE INDEX IF NOT EXISTS idx_records_fetched_at ON records(fetched_at);
"#;

/// Initializes the database schema
pub fn initialize_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)
}
