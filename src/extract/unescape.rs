/// Unescapes HTML that arrived embedded inside a JSON string payload
///
/// The list API returns its markup as the `data` field of a JSON envelope,
/// which leaves it wrapped in quotes with the usual escape sequences baked
/// in. This strips the wrapping quote pair, drops literal `\r`, `\n` and
/// `\t` sequences, and resolves escaped quotes and slashes. Pure and total;
/// input that carries none of these comes back unchanged.
pub fn unescape_embedded_html(raw: &str) -> String {
    raw.trim_matches('"')
        .replace("\\r", "")
        .replace("\\n", "")
        .replace("\\t", "")
        .replace("\\\"", "\"")
        .replace("\\/", "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_wrapped_div() {
        let raw = "\"<div>\\r\\n\\\"ok\\\"<\\/div>\"";
        assert_eq!(unescape_embedded_html(raw), "<div>\"ok\"</div>");
    }

    #[test]
    fn test_plain_html_unchanged() {
        let html = "<div class=\"list-item\">hello</div>";
        assert_eq!(unescape_embedded_html(html), html);
    }

    #[test]
    fn test_tabs_and_newlines_removed() {
        assert_eq!(unescape_embedded_html("a\\tb\\nc\\rd"), "abcd");
    }

    #[test]
    fn test_escaped_slashes() {
        assert_eq!(
            unescape_embedded_html("<a href=\\\"https:\\/\\/x\\/y\\\">"),
            "<a href=\"https://x/y\">"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(unescape_embedded_html(""), "");
    }
}
