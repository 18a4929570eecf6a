//! HTML text escaping helpers.
//!
//! Thin wrappers over `html-escape` plus the one escape the generated pages
//! need that no library provides: neutralizing `</script>` inside a raw
//! script-embedded text block.

/// Escape text placed inside an element body.
pub fn escape_text(s: &str) -> String {
    html_escape::encode_text(s).into_owned()
}

/// Escape text placed inside a double-quoted attribute value.
pub fn escape_attr(s: &str) -> String {
    html_escape::encode_double_quoted_attribute(s).into_owned()
}

/// Decode HTML entities (used when reading legacy anchor lists back).
pub fn unescape_text(s: &str) -> String {
    html_escape::decode_html_entities(s).into_owned()
}

/// Rewrite each literal `</script>` as `<\/script>`.
///
/// The entry body is embedded verbatim in a `<script type="text/markdown">`
/// block; an unescaped `</script>` inside it would terminate the block early.
/// The page bootstrap reverses this rewrite on the block's `textContent`
/// before rendering, so the visible text is unchanged.
pub fn escape_script_close(s: &str) -> String {
    s.replace("</script>", "<\\/script>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_text("杂谈"), "杂谈");
    }

    #[test]
    fn test_escape_attr_quotes() {
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_unescape_text_roundtrip() {
        assert_eq!(unescape_text("a &lt; b &amp; c"), "a < b & c");
    }

    #[test]
    fn test_escape_script_close() {
        assert_eq!(
            escape_script_close("before </script> after"),
            "before <\\/script> after"
        );
        // Only the exact closing tag is rewritten
        assert_eq!(escape_script_close("<script>"), "<script>");
    }

    #[test]
    fn test_escape_script_close_leaves_no_terminator() {
        let escaped = escape_script_close("x</script>y</script>z");
        assert!(!escaped.contains("</script>"));
    }
}
