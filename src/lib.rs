//! Bingwall: an incremental harvester for a paginated wallpaper catalog
//!
//! This crate walks a site's list API page by page, enriches each item from
//! its detail page and a download-info API, and persists each record exactly
//! once, keyed by a fingerprint of the item URL.

pub mod config;
pub mod extract;
pub mod fingerprint;
pub mod harvest;
pub mod output;
pub mod state;
pub mod storage;

use thiserror::Error;

/// Main error type for harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Unexpected HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Unexpected API response for {url}: {message}")]
    Envelope { url: String, message: String },

    #[error("Cannot derive item id from URL: {0}")]
    MalformedUrl(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors from the pure extraction utilities
///
/// Absence of a node or attribute is never an error (it yields an empty
/// value); only input that is present but unusable surfaces here.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unparsable date string: {0:?}")]
    DateParse(String),
}

/// Result type alias for harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use fingerprint::fingerprint;
pub use state::{CrawlState, PageSummary, RunOutcome, RunSummary};
pub use storage::{Record, RecordStore, SqliteStore};
