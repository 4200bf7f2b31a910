//! List page parsing
//!
//! One page of the paginated catalog arrives as an HTML fragment (after the
//! JSON envelope is unescaped). Each `list-item` node yields one transient
//! [`ListEntry`] that the orchestrator consumes immediately.

use crate::extract::style_image_url;
use scraper::{Html, Selector};
use url::Url;

/// Minimal metadata scraped from one catalog list item
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    /// Detail page URL, resolved against the site base
    pub url: String,
    pub title: String,
    pub thumbnail_image: String,
}

/// Parses one unescaped list-page fragment into its entries
///
/// Items without an anchor are dropped; a missing title or thumbnail style
/// yields an empty field, not an error.
pub fn parse_list_page(html: &str, base: &Url) -> Vec<ListEntry> {
    let fragment = Html::parse_fragment(html);

    let Ok(item_selector) = Selector::parse("div[class*='list-item']") else {
        return Vec::new();
    };
    let Ok(anchor_selector) = Selector::parse("a.media-content") else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for item in fragment.select(&item_selector) {
        let Some(anchor) = item.select(&anchor_selector).next() else {
            continue;
        };
        let Some(url) = anchor
            .value()
            .attr("href")
            .and_then(|href| base.join(href).ok())
        else {
            continue;
        };

        let title = anchor.value().attr("title").unwrap_or("").trim().to_string();
        let thumbnail_image = anchor
            .value()
            .attr("style")
            .and_then(style_image_url)
            .unwrap_or_default();

        entries.push(ListEntry {
            url: url.to_string(),
            title,
            thumbnail_image,
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.todaybing.com/").unwrap()
    }

    fn list_item(href: &str, title: &str, image: &str) -> String {
        format!(
            r#"<div class="col list-item"><a class="media-content" href="{}" title="{}" style="background-image:url('{}')"></a></div>"#,
            href, title, image
        )
    }

    #[test]
    fn test_parse_single_entry() {
        let html = list_item("/photo/Aurora.html", "Aurora over Iceland", "https://cdn/a.jpg");
        let entries = parse_list_page(&html, &base());

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].url, "https://www.todaybing.com/photo/Aurora.html");
        assert_eq!(entries[0].title, "Aurora over Iceland");
        assert_eq!(entries[0].thumbnail_image, "https://cdn/a.jpg");
    }

    #[test]
    fn test_parse_preserves_page_order() {
        let html = format!(
            "{}{}{}",
            list_item("/photo/A.html", "A", "https://cdn/a.jpg"),
            list_item("/photo/B.html", "B", "https://cdn/b.jpg"),
            list_item("/photo/C.html", "C", "https://cdn/c.jpg"),
        );
        let entries = parse_list_page(&html, &base());
        let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_title_is_trimmed() {
        let html = list_item("/photo/A.html", "  padded  ", "https://cdn/a.jpg");
        let entries = parse_list_page(&html, &base());
        assert_eq!(entries[0].title, "padded");
    }

    #[test]
    fn test_missing_style_yields_empty_thumbnail() {
        let html =
            r#"<div class="list-item"><a class="media-content" href="/photo/A.html" title="A"></a></div>"#;
        let entries = parse_list_page(html, &base());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].thumbnail_image, "");
    }

    #[test]
    fn test_item_without_anchor_is_dropped() {
        let html = r#"<div class="list-item"><span>no link here</span></div>"#;
        assert!(parse_list_page(html, &base()).is_empty());
    }

    #[test]
    fn test_empty_fragment() {
        assert!(parse_list_page("", &base()).is_empty());
        assert!(parse_list_page("<div class='other'></div>", &base()).is_empty());
    }
}
