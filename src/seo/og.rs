//! `<meta property="...">` fragments: Open Graph and Bytedance time factors.
//!
//! All content values are attribute-escaped. Dates use the plain format
//! (no offset).

use std::fmt::Write;

use super::SeoMeta;
use crate::utils::html::escape_attr;

/// Append one `<meta property content/>` line.
fn push_property(out: &mut String, property: &str, content: &str) {
    writeln!(
        out,
        "<meta property=\"{property}\" content=\"{}\"/>",
        escape_attr(content)
    )
    .ok();
}

/// Open Graph article tags.
pub fn open_graph(meta: &SeoMeta) -> String {
    let mut out = String::with_capacity(512);
    push_property(&mut out, "og:type", "article");
    push_property(&mut out, "og:title", &meta.title);
    push_property(&mut out, "og:description", &meta.description);
    push_property(&mut out, "og:image", &meta.cover_url);
    push_property(&mut out, "og:url", &meta.post_url);
    push_property(&mut out, "og:release_date", &meta.published.plain);
    push_property(&mut out, "og:modified_time", &meta.updated.plain);
    push_property(&mut out, "og:author", &meta.author);
    out
}

/// Bytedance published/updated time tags.
pub fn bytedance(meta: &SeoMeta) -> String {
    let mut out = String::with_capacity(128);
    push_property(&mut out, "bytedance:published_time", &meta.published.plain);
    push_property(&mut out, "bytedance:updated_time", &meta.updated.plain);
    out
}
