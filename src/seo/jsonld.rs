//! JSON-LD `<script>` fragments: Baidu cambrian and schema.org `BlogPosting`.
//!
//! Documents are built as `serde_json::Value` (insertion order preserved) and
//! pretty-printed, so every string is JSON-escaped by the serializer. `</` is
//! additionally written as `<\/` so no value can close the script element.

use serde_json::{Value, json};

use super::SeoMeta;

const BAIDU_CONTEXT: &str = "https://ziyuan.baidu.com/contexts/cambrian.jsonld";
const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Wrap a JSON document in a `application/ld+json` script element.
fn script(doc: &Value) -> String {
    let body = format!("{doc:#}").replace("</", "<\\/");
    format!("<script type=\"application/ld+json\">\n{body}\n</script>\n")
}

/// Baidu time-factor script (plain dates).
pub fn baidu(meta: &SeoMeta) -> String {
    script(&json!({
        "@context": BAIDU_CONTEXT,
        "@id": meta.post_url,
        "title": meta.title,
        "pubDate": meta.published.plain,
        "upDate": meta.updated.plain,
    }))
}

/// schema.org `BlogPosting` (RFC 3339 dates).
pub fn blog_posting(meta: &SeoMeta) -> String {
    script(&json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BlogPosting",
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": meta.post_url,
        },
        "headline": meta.title,
        "description": meta.description,
        "datePublished": meta.published.rfc3339,
        "dateModified": meta.updated.rfc3339,
        "author": {
            "@type": "Person",
            "name": meta.author,
        },
        "publisher": {
            "@type": "Organization",
            "name": meta.site_name,
            "logo": {
                "@type": "ImageObject",
                "url": meta.site_logo,
            },
        },
        "image": meta.cover_url,
        "url": meta.post_url,
        "keywords": meta.keywords,
    }))
}
