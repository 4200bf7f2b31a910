//! HTTP client and site endpoints
//!
//! All three round trips the harvester makes live here: the form-encoded
//! list API POST, the detail page GET, and the download-info POST. The two
//! API calls share one endpoint and are distinguished by their `action`
//! form field.

use crate::config::SiteConfig;
use crate::extract::unescape_embedded_html;
use crate::harvest::detail::{parse_detail, DetailPayload};
use crate::harvest::download::derive_item_id;
use crate::harvest::list::{parse_list_page, ListEntry};
use crate::storage::DownloadInfo;
use crate::HarvestError;
use reqwest::header::{HeaderMap, HeaderValue, REFERER};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Shared AJAX endpoint, relative to the site base
const API_PATH: &str = "web/api";

/// Form fields for the list API
const LIST_APPEND: &str = "list-home";
const LIST_ACTION: &str = "ajax_load_posts";

/// Form fields for the download-info API
const DURLS_ACTION: &str = "ajax_get_durls";
const DURLS_POST_TYPE: &str = "1";
const DURLS_AREA: &str = "cn";

/// Marker the site's AJAX endpoint expects on form requests
const AJAX_MARKER: (&str, &str) = ("x-requested-with", "XMLHttpRequest");

/// Builds an HTTP client with the site's expected identity
///
/// Every request carries the configured browser user agent and a referer
/// fixed to the site base; the API rejects requests without them.
pub fn build_http_client(site: &SiteConfig) -> crate::Result<Client> {
    let mut headers = HeaderMap::new();
    let referer = HeaderValue::from_str(&site.base_url).map_err(|_| {
        crate::ConfigError::InvalidUrl(format!("base-url is not a valid referer: {}", site.base_url))
    })?;
    headers.insert(REFERER, referer);

    let client = Client::builder()
        .user_agent(site.user_agent.clone())
        .default_headers(headers)
        .timeout(Duration::from_secs(site.request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

/// Client for the catalog site's three surfaces
pub struct ApiClient {
    client: Client,
    base: Url,
    api: Url,
}

impl ApiClient {
    /// Creates a client for the configured site
    pub fn new(site: &SiteConfig) -> crate::Result<Self> {
        let base = Url::parse(&site.base_url)?;
        let api = base.join(API_PATH)?;
        let client = build_http_client(site)?;

        Ok(Self { client, base, api })
    }

    /// The site base URL item links are resolved against
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Requests one page of the paginated catalog
    ///
    /// The response is a JSON envelope whose `data` field is HTML escaped
    /// into a string; it is unescaped and parsed into list entries. A
    /// non-success status or an unusable envelope is an error, and the
    /// orchestrator aborts the run on it.
    pub async fn fetch_list_page(
        &self,
        page: u32,
        category_tab: u32,
    ) -> crate::Result<Vec<ListEntry>> {
        let form = [
            ("append", LIST_APPEND.to_string()),
            ("paged", page.to_string()),
            ("action", LIST_ACTION.to_string()),
            ("tabcid", category_tab.to_string()),
        ];

        let response = self
            .client
            .post(self.api.clone())
            .header(AJAX_MARKER.0, AJAX_MARKER.1)
            .form(&form)
            .send()
            .await
            .map_err(|source| HarvestError::Http {
                url: self.api.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::Status {
                url: self.api.to_string(),
                status: status.as_u16(),
            });
        }

        let envelope: serde_json::Value =
            response.json().await.map_err(|source| HarvestError::Http {
                url: self.api.to_string(),
                source,
            })?;
        let data = envelope
            .get("data")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| HarvestError::Envelope {
                url: self.api.to_string(),
                message: "missing string `data` field".to_string(),
            })?;

        let html = unescape_embedded_html(data);
        Ok(parse_list_page(&html, &self.base))
    }

    /// Retrieves and parses one detail page
    ///
    /// Transport failure is an error; the orchestrator degrades it to an
    /// empty payload for that item instead of halting the crawl.
    pub async fn fetch_detail(&self, url: &str) -> crate::Result<DetailPayload> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| HarvestError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| HarvestError::Http {
            url: url.to_string(),
            source,
        })?;

        Ok(parse_detail(&body, &self.base))
    }

    /// Looks up download-variant metadata for one item
    ///
    /// A non-success status is reported and yields an empty map; the item
    /// is still persisted without variants. An underivable item id surfaces
    /// as [`HarvestError::MalformedUrl`].
    pub async fn fetch_download_info(&self, url: &str) -> crate::Result<DownloadInfo> {
        let aid = derive_item_id(url)?;
        let form = [
            ("aid", aid),
            ("post_type", DURLS_POST_TYPE.to_string()),
            ("area", DURLS_AREA.to_string()),
            ("action", DURLS_ACTION.to_string()),
        ];

        let response = self
            .client
            .post(self.api.clone())
            .header(AJAX_MARKER.0, AJAX_MARKER.1)
            .form(&form)
            .send()
            .await
            .map_err(|source| HarvestError::Http {
                url: self.api.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                "Download info request failed: url={}, status={}",
                url,
                status.as_u16()
            );
            return Ok(DownloadInfo::new());
        }

        let body: serde_json::Value =
            response.json().await.map_err(|source| HarvestError::Http {
                url: self.api.to_string(),
                source,
            })?;

        match body {
            serde_json::Value::Object(map) => Ok(map),
            _ => {
                tracing::warn!("Download info for {} was not a JSON object", url);
                Ok(DownloadInfo::new())
            }
        }
    }
}
