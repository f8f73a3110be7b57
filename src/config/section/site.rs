//! `[site]` configuration.
//!
//! Site-wide information that ends up in the publisher block of the
//! structured data, plus the external URL used to absolutize links.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site metadata.
///
/// ```toml
/// [site]
/// url = "https://blog.example.com"
/// title = "My Blog"
/// logo = "/logo.png"
/// keywords = "rust,blog"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// External site URL; site-relative links are resolved against it.
    pub url: Option<String>,

    /// Site title (publisher name).
    pub title: String,

    /// Site logo (publisher logo).
    pub logo: String,

    /// Site-wide SEO keywords, used when a post has no tags.
    pub keywords: Option<String>,
}

impl SiteInfoConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be a valid http(s) URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(url_str) = &self.url else {
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                // Must be http or https
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                // Must have a valid host
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
                if parsed.query().is_some() || parsed.fragment().is_some() {
                    diag.warn(Self::URL, "query and fragment are kept verbatim in links");
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::URL,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}
