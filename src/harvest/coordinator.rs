//! Crawl orchestration
//!
//! The coordinator drives pagination over the list API, dedups each entry by
//! fingerprint against the store, fans new entries through the detail and
//! download-info fetchers, and applies the termination policy once per fully
//! processed page. Pagination is strictly sequential: page N+1 is requested
//! only after page N's policy evaluation.

use crate::config::Config;
use crate::fingerprint::fingerprint;
use crate::harvest::detail::DetailPayload;
use crate::harvest::fetcher::ApiClient;
use crate::harvest::list::ListEntry;
use crate::state::{CrawlState, PageSummary, RunOutcome, RunSummary};
use crate::storage::{DownloadInfo, Record, RecordStore, SqliteStore};
use chrono::Utc;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Main harvest coordinator
pub struct Coordinator {
    config: Config,
    client: ApiClient,
    storage: SqliteStore,
    stop: Arc<AtomicBool>,
}

impl Coordinator {
    /// Creates a coordinator: opens the store and builds the HTTP client
    pub fn new(config: Config) -> crate::Result<Self> {
        let storage = SqliteStore::new(Path::new(&config.output.database_path))?;
        let client = ApiClient::new(&config.site)?;

        Ok(Self {
            config,
            client,
            storage,
            stop: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Handle for requesting a stop from outside the run
    ///
    /// Once set, the coordinator issues no further fetches; the entry in
    /// flight completes and is persisted normally.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        self.stop.clone()
    }

    /// Runs the harvest until the page budget is exhausted, a page comes
    /// back empty, the termination policy trips, or a stop is requested
    ///
    /// A transport-level failure on a list page aborts the run with an
    /// error: without the catalog there is nothing left to drive.
    pub async fn run(&mut self) -> crate::Result<RunSummary> {
        let max_pages = self.config.crawl.max_pages;
        let category_tab = self.config.crawl.category_tab;

        let mut state = CrawlState::new();
        let mut pages_fetched = 0u32;
        let mut records_inserted = 0u64;
        let mut entries_skipped = 0u64;
        let start_time = std::time::Instant::now();

        tracing::info!("Starting harvest, page budget {}", max_pages);

        let outcome = loop {
            if self.stop.load(Ordering::Relaxed) {
                tracing::info!("Stop requested, ending run");
                break RunOutcome::Interrupted;
            }

            if !state.should_fetch(max_pages) {
                break if state.keep_going {
                    RunOutcome::BudgetExhausted
                } else {
                    RunOutcome::PreviouslySeen
                };
            }

            tracing::info!("Requesting list page {}", state.current_page);
            let entries = self
                .client
                .fetch_list_page(state.current_page, category_tab)
                .await?;
            pages_fetched += 1;

            if entries.is_empty() {
                tracing::info!("Page {} is empty, ending run", state.current_page);
                break RunOutcome::EmptyPage;
            }
            tracing::info!(
                "Page {} yielded {} entries",
                state.current_page,
                entries.len()
            );

            let summary = self.process_page(&entries).await?;
            records_inserted += summary.inserted as u64;
            entries_skipped += summary.skipped as u64;
            tracing::info!(
                "Page {}: {} entries, {} skipped, {} inserted",
                state.current_page,
                summary.total,
                summary.skipped,
                summary.inserted
            );

            state.record_page(&summary);
            state.advance();
        };

        tracing::info!(
            "Harvest finished ({:?}): {} pages, {} inserted, {} skipped in {:?}",
            outcome,
            pages_fetched,
            records_inserted,
            entries_skipped,
            start_time.elapsed()
        );

        Ok(RunSummary {
            outcome,
            pages_fetched,
            records_inserted,
            entries_skipped,
        })
    }

    /// Processes one page's entries in page order
    ///
    /// The returned summary covers the whole page, so the termination policy
    /// sees a complete, deterministic view before any decision is made.
    async fn process_page(&mut self, entries: &[ListEntry]) -> crate::Result<PageSummary> {
        let mut summary = PageSummary {
            total: entries.len(),
            ..Default::default()
        };

        for entry in entries {
            if self.stop.load(Ordering::Relaxed) {
                tracing::info!("Stop requested, leaving remaining entries unfetched");
                break;
            }

            let fp = fingerprint(&entry.url);
            if self.storage.contains(&fp)? {
                tracing::warn!("Already stored, skipping: url={}", entry.url);
                summary.skipped += 1;
                continue;
            }

            let record = self.enrich(entry, fp).await;
            if self.storage.insert(&record)? {
                summary.inserted += 1;
                tracing::info!("Record stored: url={}", entry.url);
            } else {
                // Same URL listed twice on one page; the primary key kept
                // the first write.
                summary.skipped += 1;
            }
        }

        Ok(summary)
    }

    /// Enriches one fresh list entry into a full record
    ///
    /// The detail and download-info round trips are independent and run
    /// concurrently. Either failing degrades its own fields to empty and is
    /// reported; the record is persisted regardless.
    async fn enrich(&self, entry: &ListEntry, fingerprint: String) -> Record {
        tracing::info!("Fetching detail page: url={}", entry.url);
        let (detail, download) = tokio::join!(
            self.client.fetch_detail(&entry.url),
            self.client.fetch_download_info(&entry.url)
        );

        let detail = match detail {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Detail fetch failed for {}: {}", entry.url, e);
                DetailPayload::default()
            }
        };
        let download_info = match download {
            Ok(info) => info,
            Err(e) => {
                tracing::error!("Download info failed for {}: {}", entry.url, e);
                DownloadInfo::new()
            }
        };

        Record {
            fingerprint,
            url: entry.url.clone(),
            title: entry.title.clone(),
            thumbnail_image: entry.thumbnail_image.clone(),
            author: detail.author,
            location: detail.location,
            publish_date: detail.publish_date,
            introduction: detail.introduction,
            hi_res_image: detail.hi_res_image,
            navigation: detail.navigation,
            recommendations: detail.recommendations,
            download_info,
            fetched_at: Utc::now().timestamp_millis(),
        }
    }
}
