//! Link classification and external-link processing.
//!
//! Canonical URLs, covers and logos must be absolute in the emitted markup.
//! [`SiteLinkProcessor`] turns site-relative links into absolute ones using
//! the configured `site.url`, and passes everything else through.

/// Syntactic classification of links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// External link with URL scheme (https://, mailto:, data:, etc.)
    External(&'a str),
    /// Protocol-relative link (//cdn.example.com/a.png).
    ProtocolRelative(&'a str),
    /// Site-root-relative path (/about, /posts/hello).
    SiteRoot(&'a str),
    /// Path without leading slash (upload/cover.png).
    Relative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if is_external_link(link) {
            Self::External(link)
        } else if link.starts_with("//") {
            Self::ProtocolRelative(link)
        } else if link.starts_with('/') {
            Self::SiteRoot(link)
        } else {
            Self::Relative(link)
        }
    }
}

/// Check whether a link carries a URL scheme (`scheme:`).
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos].starts_with(|c: char| c.is_ascii_alphabetic())
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Site-wide link rewriting.
pub trait LinkProcessor: Send + Sync {
    /// Rewrite a link for use in emitted markup.
    fn process_link(&self, link: &str) -> String;
}

/// Resolves site-relative links against the external site URL.
///
/// | Input                        | `site.url = https://a.com/blog`  |
/// |------------------------------|----------------------------------|
/// | `https://cdn.com/x.png`      | unchanged                        |
/// | `//cdn.com/x.png`            | unchanged                        |
/// | `/posts/hello`               | `https://a.com/blog/posts/hello` |
/// | `upload/x.png`               | `https://a.com/blog/upload/x.png`|
/// | `""`                         | `""`                             |
///
/// Without a site URL every link passes through unchanged.
#[derive(Debug, Clone, Default)]
pub struct SiteLinkProcessor {
    /// External URL without trailing slash.
    base: Option<String>,
}

impl SiteLinkProcessor {
    pub fn new(site_url: Option<&str>) -> Self {
        let base = site_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map(str::to_string);
        Self { base }
    }
}

impl LinkProcessor for SiteLinkProcessor {
    fn process_link(&self, link: &str) -> String {
        let Some(base) = &self.base else {
            return link.to_string();
        };

        match LinkKind::parse(link) {
            _ if link.trim().is_empty() => link.to_string(),
            LinkKind::External(link) | LinkKind::ProtocolRelative(link) => link.to_string(),
            LinkKind::SiteRoot(path) => format!("{base}{path}"),
            LinkKind::Relative(path) => format!("{base}/{path}"),
        }
    }
}
