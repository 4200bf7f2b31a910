//! Detail page parsing
//!
//! Follows one list entry to its own page and pulls out the enrichment
//! fields. Absent nodes and attributes yield empty values; the only real
//! failure mode here is a present-but-garbled publish date, which is logged
//! and stored empty rather than crashing the run.

use crate::extract::{format_localized_date, style_image_url};
use crate::storage::{NavDirection, NavigationEntry, RecommendationEntry};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Marker phrase labelling the previous-item navigation block
const PREVIOUS_MARKER: &str = "上一篇";
/// Marker phrase labelling the next-item navigation block
const NEXT_MARKER: &str = "下一篇";

/// Interstitial lines the site injects into the introduction text
const LOGIN_PROMPT: &str = "现在登录";
const TRANSLATION_PROMPT: &str = "查看译文";

/// Enrichment fields obtained from one detail page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailPayload {
    pub author: String,
    pub location: String,
    /// ISO 8601 date, or empty
    pub publish_date: String,
    pub introduction: Vec<String>,
    pub hi_res_image: String,
    pub navigation: Vec<NavigationEntry>,
    pub recommendations: Vec<RecommendationEntry>,
}

/// Parses a detail page document into its enrichment payload
pub fn parse_detail(html: &str, base: &Url) -> DetailPayload {
    let document = Html::parse_document(html);

    let author = select_text(&document, "a.author-popup");
    let location = extract_location(&document);
    let publish_date = extract_publish_date(&document);
    let introduction = extract_introduction(&document);
    let hi_res_image = select_attr(&document, "img#mbg", "src");

    let mut navigation = Vec::new();
    // Next before previous, matching the order the records have always
    // carried.
    if let Some(entry) = navigation_entry(&document, html, base, NEXT_MARKER, NavDirection::Next) {
        navigation.push(entry);
    }
    if let Some(entry) =
        navigation_entry(&document, html, base, PREVIOUS_MARKER, NavDirection::Previous)
    {
        navigation.push(entry);
    }

    let recommendations = extract_recommendations(&document, base);

    DetailPayload {
        author,
        location,
        publish_date,
        introduction,
        hi_res_image,
        navigation,
        recommendations,
    }
}

/// Collected, trimmed text of the first element matching `pattern`
fn select_text(document: &Html, pattern: &str) -> String {
    let Ok(selector) = Selector::parse(pattern) else {
        return String::new();
    };
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Named attribute of the first element matching `pattern`
fn select_attr(document: &Html, pattern: &str, attr: &str) -> String {
    let Ok(selector) = Selector::parse(pattern) else {
        return String::new();
    };
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .unwrap_or("")
        .to_string()
}

/// The shot location is the text sibling of a map-icon marker
fn extract_location(document: &Html) -> String {
    let Ok(selector) = Selector::parse("i[class*='icon-map']") else {
        return String::new();
    };
    let Some(icon) = document.select(&selector).next() else {
        return String::new();
    };
    let Some(parent) = icon.parent() else {
        return String::new();
    };

    for child in parent.children() {
        if let Some(text) = child.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }
    String::new()
}

fn extract_publish_date(document: &Html) -> String {
    let raw = select_attr(document, "meta[itemprop='dateUpdate']", "content");
    match format_localized_date(&raw) {
        Ok(date) => date,
        Err(e) => {
            tracing::warn!("Publish date unusable, storing empty: {}", e);
            String::new()
        }
    }
}

/// All text under the content container, minus the interstitial prompts
fn extract_introduction(document: &Html) -> Vec<String> {
    let Ok(selector) = Selector::parse("div[class*='post-content']") else {
        return Vec::new();
    };
    let Some(container) = document.select(&selector).next() else {
        return Vec::new();
    };

    container
        .text()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.contains(LOGIN_PROMPT) && !line.contains(TRANSLATION_PROMPT))
        .map(str::to_string)
        .collect()
}

/// Extracts the navigation block tagged with `marker`, if the page has one
///
/// The marker phrase must appear in the raw page text at all; its absence
/// means there is no entry in that direction. When present, the block is the
/// grandparent of the div whose direct text carries the marker: its
/// `media-content` child holds the background image, its direct-child anchor
/// the target URL and title.
fn navigation_entry(
    document: &Html,
    raw: &str,
    base: &Url,
    marker: &str,
    direction: NavDirection,
) -> Option<NavigationEntry> {
    if !raw.contains(marker) {
        return None;
    }

    let div_selector = Selector::parse("div").ok()?;
    let label = document.select(&div_selector).find(|el| {
        el.children().any(|child| {
            child
                .value()
                .as_text()
                .map(|text| text.contains(marker))
                .unwrap_or(false)
        })
    })?;

    let parent = ElementRef::wrap(label.parent()?)?;
    let block = ElementRef::wrap(parent.parent()?)?;

    let media_selector = Selector::parse("div.media-content").ok()?;
    let image = block
        .select(&media_selector)
        .next()
        .and_then(|el| el.value().attr("style"))
        .and_then(style_image_url)
        .unwrap_or_default();

    let anchor = block
        .children()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "a")?;
    let url = anchor
        .value()
        .attr("href")
        .and_then(|href| base.join(href).ok())
        .map(|u| u.to_string())
        .unwrap_or_default();
    let title = anchor.value().attr("title").unwrap_or("").trim().to_string();

    Some(NavigationEntry {
        image,
        url,
        title,
        direction,
    })
}

/// Extracts the recommendation grid tiles
fn extract_recommendations(document: &Html, base: &Url) -> Vec<RecommendationEntry> {
    let Ok(tile_selector) = Selector::parse("div[class*='list-grouped'] div[class*='col-6']")
    else {
        return Vec::new();
    };
    let Ok(anchor_selector) = Selector::parse("a.media-content") else {
        return Vec::new();
    };
    let Ok(any_anchor_selector) = Selector::parse("a[title]") else {
        return Vec::new();
    };

    let mut recommendations = Vec::new();
    for tile in document.select(&tile_selector) {
        let Some(anchor) = tile.select(&anchor_selector).next() else {
            continue;
        };
        let Some(url) = anchor
            .value()
            .attr("href")
            .and_then(|href| base.join(href).ok())
        else {
            continue;
        };

        let image = anchor
            .value()
            .attr("style")
            .and_then(style_image_url)
            .unwrap_or_default();
        let title = tile
            .select(&any_anchor_selector)
            .next()
            .and_then(|el| el.value().attr("title"))
            .unwrap_or("")
            .trim()
            .to_string();

        recommendations.push(RecommendationEntry {
            url: url.to_string(),
            image,
            title,
        });
    }

    recommendations
}
