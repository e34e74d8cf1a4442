// ABOUTME: HTML escaping utilities to prevent XSS in server-rendered admin pages
// ABOUTME: Separate helpers for element text and for quoted attribute values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Inkwell Blog

use html_escape::{encode_quoted_attribute, encode_text};

/// Escape a string for safe insertion into HTML attribute values.
///
/// Both quote styles are escaped, so the value cannot break out of either
/// `value="..."` or `value='...'`.
#[must_use]
pub fn escape_html_attribute(input: &str) -> String {
    encode_quoted_attribute(input).into_owned()
}

/// Escape a string for insertion as element text content
#[must_use]
pub fn escape_html_text(input: &str) -> String {
    encode_text(input).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_escaping() {
        let escaped = escape_html_attribute(r#"" onmouseover='x' <b>&"#);
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
        assert!(!escaped.contains('<'));
        assert!(escaped.starts_with("&quot;"));
        assert!(escaped.ends_with("&amp;"));
    }

    #[test]
    fn test_text_escaping() {
        assert_eq!(
            escape_html_text("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
        assert_eq!(escape_html_text("plain"), "plain");
    }
}
