//! Download-info item id derivation
//!
//! The download API is keyed not by URL but by an item id: the path segment
//! immediately preceding the trailing `.html` extension of the detail URL.

use crate::HarvestError;

/// Derives the download API item id from a detail page URL
///
/// `https://site/photo/NorthernLights.html` → `NorthernLights`. A URL with
/// no such segment cannot be looked up and fails with
/// [`HarvestError::MalformedUrl`]; callers treat the item's download info as
/// empty rather than assuming an id exists.
pub fn derive_item_id(url: &str) -> Result<String, HarvestError> {
    let malformed = || HarvestError::MalformedUrl(url.to_string());

    let end = url.rfind(".html").ok_or_else(malformed)?;
    let start = url[..end].rfind('/').map(|i| i + 1).ok_or_else(malformed)?;

    let id = url[start..end].trim();
    if id.is_empty() {
        return Err(malformed());
    }
    Ok(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_from_detail_url() {
        assert_eq!(
            derive_item_id("https://www.todaybing.com/photo/NorthernLights.html").unwrap(),
            "NorthernLights"
        );
    }

    #[test]
    fn test_derive_ignores_query_suffix() {
        assert_eq!(
            derive_item_id("https://site/photo/Abc.html?from=list").unwrap(),
            "Abc"
        );
    }

    #[test]
    fn test_no_extension_is_malformed() {
        let err = derive_item_id("https://site/photo/NoExtension").unwrap_err();
        assert!(matches!(err, HarvestError::MalformedUrl(_)));
    }

    #[test]
    fn test_extension_without_segment_is_malformed() {
        assert!(derive_item_id(".html").is_err());
        assert!(derive_item_id("https://site//.html").is_err());
    }
}
