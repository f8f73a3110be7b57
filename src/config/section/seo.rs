//! `[seo]` configuration: which fragments to emit.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::LinkKind;
use serde::{Deserialize, Serialize};

/// Feature flags plus the fallback cover image.
///
/// Every flag defaults to `false`, so an absent `[seo]` section renders
/// nothing.
///
/// ```toml
/// [seo]
/// enable_canonical_link = true
/// enable_og_time_factor = true
/// enable_meta_time_factor = true
/// enable_baidu_time_factor = true
/// enable_structured_data = true
/// default_image = "/images/cover.png"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicConfig {
    /// `<link rel="canonical">`
    pub enable_canonical_link: bool,
    /// Baidu cambrian JSON-LD script.
    pub enable_baidu_time_factor: bool,
    /// Open Graph `og:*` meta tags.
    pub enable_og_time_factor: bool,
    /// Bytedance `bytedance:*_time` meta tags.
    pub enable_meta_time_factor: bool,
    /// schema.org `BlogPosting` JSON-LD script.
    pub enable_structured_data: bool,
    /// Cover image used when a post has none.
    pub default_image: String,
}

impl BasicConfig {
    pub const DEFAULT_IMAGE: FieldPath = FieldPath::new("seo.default_image");

    /// Config with every fragment enabled.
    pub fn all_enabled() -> Self {
        Self {
            enable_canonical_link: true,
            enable_baidu_time_factor: true,
            enable_og_time_factor: true,
            enable_meta_time_factor: true,
            enable_structured_data: true,
            default_image: String::new(),
        }
    }

    /// Whether any fragment is enabled.
    pub fn any_enabled(&self) -> bool {
        self.enable_canonical_link
            || self.enable_baidu_time_factor
            || self.enable_og_time_factor
            || self.enable_meta_time_factor
            || self.enable_structured_data
    }

    /// Validate `[seo]`.
    ///
    /// # Checks
    /// - a site-relative `default_image` needs `site.url` to become absolute
    /// - fragments using the cover image warn when no default is set
    pub fn validate(&self, has_site_url: bool, diag: &mut ConfigDiagnostics) {
        let image = self.default_image.trim();

        if image.is_empty() {
            if self.enable_og_time_factor || self.enable_structured_data {
                diag.warn(
                    Self::DEFAULT_IMAGE,
                    "not set, posts without a cover will emit an empty image",
                );
            }
            return;
        }

        if !has_site_url && !matches!(LinkKind::parse(image), LinkKind::External(_)) {
            diag.warn(
                Self::DEFAULT_IMAGE,
                "relative path stays relative because `site.url` is not set",
            );
        }
    }
}
