use serde::Deserialize;

/// Main configuration structure for bingwall
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub crawl: CrawlConfig,
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the catalog site; also sent as the referer on every request
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// User agent presented on all requests
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout-secs", default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// Page budget: the run never advances past this many list pages
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// Catalog category selector sent as `tabcid` on list requests
    #[serde(rename = "category-tab", default = "default_category_tab")]
    pub category_tab: u32,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,
}

fn default_user_agent() -> String {
    // Conventional browser UA; the list API rejects obviously robotic agents.
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/87.0.4280.88 Safari/537.36"
        .to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_category_tab() -> u32 {
    1
}
