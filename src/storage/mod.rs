//! Storage module: the dedup store for harvested records
//!
//! One logical collection keyed by fingerprint. A record is written at most
//! once for a given fingerprint; the store is the system of record for
//! "already seen". Records are immutable once persisted; this system never
//! updates or deletes them.

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteStore;
pub use traits::{RecordStore, StorageError, StorageResult};

use serde::{Deserialize, Serialize};

/// Download-variant metadata as returned by the site's durls API
///
/// Opaque to this system: variant-keyed URLs on success, an empty map when
/// the lookup failed or the item id could not be derived.
pub type DownloadInfo = serde_json::Map<String, serde_json::Value>;

/// Which way a navigation entry points from its detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavDirection {
    Previous,
    Next,
}

/// A previous/next link harvested from a detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub image: String,
    pub url: String,
    pub title: String,
    pub direction: NavDirection,
}

/// One tile from a detail page's recommendation grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub url: String,
    pub image: String,
    pub title: String,
}

/// The persisted unit: one fully enriched catalog item
///
/// Constructed entirely within one orchestration step (list entry → detail
/// fetch → merge) and immutable from then on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Primary key, derived from `url` via [`crate::fingerprint`]
    pub fingerprint: String,
    pub url: String,
    pub title: String,
    pub thumbnail_image: String,
    pub author: String,
    pub location: String,
    /// ISO 8601 date, or empty when the detail page carried none
    pub publish_date: String,
    pub introduction: Vec<String>,
    pub hi_res_image: String,
    pub navigation: Vec<NavigationEntry>,
    pub recommendations: Vec<RecommendationEntry>,
    pub download_info: DownloadInfo,
    /// Epoch milliseconds at which the record was assembled
    pub fetched_at: i64,
}
