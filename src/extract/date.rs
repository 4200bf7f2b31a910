use crate::ExtractError;
use chrono::NaiveDate;

/// Format of the publish dates on detail pages, e.g. `2021年05月03日`.
const SITE_DATE_FORMAT: &str = "%Y年%m月%d日";

/// Formats the site's localized publish date as an ISO 8601 date
///
/// Empty input yields an empty string (a missing date is not a fault).
/// Input that is present but does not match the site's format is a real
/// failure mode and surfaces as [`ExtractError::DateParse`]; the caller
/// decides whether to store an empty date or abort. It must never crash
/// the run.
pub fn format_localized_date(text: &str) -> Result<String, ExtractError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(String::new());
    }

    let date = NaiveDate::parse_from_str(text, SITE_DATE_FORMAT)
        .map_err(|_| ExtractError::DateParse(text.to_string()))?;
    Ok(date.format("%Y-%m-%d").to_string())
}
