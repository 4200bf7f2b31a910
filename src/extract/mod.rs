//! Pure extraction utilities for raw markup fragments
//!
//! These helpers pull structured values out of the odd formats the site
//! embeds them in: CSS background styles, HTML escaped into JSON string
//! payloads, and localized date strings. All of them are pure; none of them
//! touch the network or the store.

mod date;
mod style;
mod unescape;

pub use date::format_localized_date;
pub use style::style_image_url;
pub use unescape::unescape_embedded_html;
