//! The crawl core: fetchers, parsers, and the orchestrator
//!
//! This module turns one list entry into one durable record:
//! - [`fetcher`] speaks to the site (list API, detail pages, download API)
//! - [`list`] and [`detail`] parse the returned markup into typed payloads
//! - [`download`] derives the item id the download API is keyed by
//! - [`coordinator`] drives pagination, dedup, and the termination policy

mod coordinator;
mod detail;
mod download;
mod fetcher;
mod list;

pub use coordinator::Coordinator;
pub use detail::{parse_detail, DetailPayload};
pub use download::derive_item_id;
pub use fetcher::{build_http_client, ApiClient};
pub use list::{parse_list_page, ListEntry};
