//! Statistics generation from the record store

use crate::storage::RecordStore;
use chrono::{DateTime, Utc};

/// Summary of what the store currently holds
#[derive(Debug, Clone)]
pub struct HarvestStatistics {
    /// Total number of persisted records
    pub total_records: u64,

    /// Records that carry non-empty download-variant metadata
    pub with_download_info: u64,

    /// When the most recent record was assembled
    pub latest_fetch: Option<DateTime<Utc>>,
}

/// Loads statistics from the store
pub fn load_statistics(storage: &dyn RecordStore) -> crate::Result<HarvestStatistics> {
    let total_records = storage.count_records()?;
    let with_download_info = storage.count_with_download_info()?;
    let latest_fetch = storage
        .latest_fetch_time()?
        .and_then(DateTime::<Utc>::from_timestamp_millis);

    Ok(HarvestStatistics {
        total_records,
        with_download_info,
        latest_fetch,
    })
}

/// Prints statistics to stdout
pub fn print_statistics(stats: &HarvestStatistics) {
    println!("=== Harvest Statistics ===\n");
    println!("Total records:        {}", stats.total_records);
    println!("With download info:   {}", stats.with_download_info);
    match &stats.latest_fetch {
        Some(when) => println!("Latest fetch:         {}", when.to_rfc3339()),
        None => println!("Latest fetch:         (store is empty)"),
    }
}
