//! Head injector.
//!
//! Inserts a block immediately before the first `</head>` of a rendered
//! document. Matching is ASCII case-insensitive and tolerates whitespace
//! before the closing `>`.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static RE_HEAD_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i-u)</head\s*>").unwrap());

/// Insert `block` before the first `</head>`.
///
/// Returns the input unchanged (borrowed) when the block is empty or the
/// document has no closing head tag.
pub fn inject_head<'a>(html: &'a str, block: &str) -> Cow<'a, str> {
    if block.is_empty() {
        return Cow::Borrowed(html);
    }
    let Some(close) = RE_HEAD_CLOSE.find(html) else {
        return Cow::Borrowed(html);
    };

    let at = close.start();
    let mut out = String::with_capacity(html.len() + block.len());
    out.push_str(&html[..at]);
    out.push_str(block);
    out.push_str(&html[at..]);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: &str = "<link rel=\"canonical\" href=\"https://x/p\" />\n";

    #[test]
    fn test_inject_before_head_close() {
        let html = "<html><head><title>t</title></head><body></body></html>";
        assert_eq!(
            inject_head(html, BLOCK),
            "<html><head><title>t</title><link rel=\"canonical\" href=\"https://x/p\" />\n</head><body></body></html>"
        );
    }

    #[test]
    fn test_case_insensitive_and_spaced() {
        let html = "<HTML><HEAD></HEAD ></HTML>";
        let out = inject_head(html, "X");
        assert_eq!(out, "<HTML><HEAD>X</HEAD ></HTML>");
    }

    #[test]
    fn test_only_first_head_close() {
        let html = "<head></head><template></head></template>";
        assert_eq!(inject_head(html, "X"), "<head>X</head><template></head></template>");
    }

    #[test]
    fn test_unchanged_without_head_or_block() {
        let html = "<p>fragment</p>";
        assert!(matches!(inject_head(html, BLOCK), Cow::Borrowed(_)));

        let html = "<head></head>";
        assert!(matches!(inject_head(html, ""), Cow::Borrowed(s) if s == html));
    }

    #[test]
    fn test_does_not_match_header_tag() {
        let html = "<head></header></head>";
        assert_eq!(inject_head(html, "X"), "<head></header>X</head>");
    }
}
