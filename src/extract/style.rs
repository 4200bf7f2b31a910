use regex::Regex;

/// Extracts the image URL from a CSS `background-image` style attribute
///
/// The catalog carries thumbnail and navigation images as inline styles of
/// the form `background-image:url('https://host/image.jpg')`. Returns the
/// inner URL with surrounding quotes stripped, or `None` if the attribute
/// holds no `url(...)` declaration. Absence is a normal outcome, never an
/// error; malformed input simply yields `None`.
pub fn style_image_url(style: &str) -> Option<String> {
    let pattern = Regex::new(r"url\((.*?)\)").ok()?;
    let inner = pattern.captures(style)?.get(1)?.as_str();
    let url = inner.trim().trim_matches(|c| c == '\'' || c == '"');
    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}
