//! The metadata record every fragment is rendered from.

use crate::config::BasicConfig;
use crate::core::LinkProcessor;
use crate::store::{Post, SystemInfo};
use crate::utils::date::{FormattedDate, RenderZone};

/// Outcome of a secondary lookup.
///
/// Both variants carry a usable value; `Fallback` marks that the value is a
/// documented default because the lookup failed or came back empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Hit(T),
    Fallback(T),
}

impl<T> Lookup<T> {
    #[inline]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Hit(value) | Self::Fallback(value) => value,
        }
    }
}

/// SEO metadata for one post, built once per render and never mutated.
///
/// Text fields are stored raw; each fragment escapes for its own context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    /// Absolute cover image (post cover or configured default).
    pub cover_url: String,
    /// Absolute canonical post URL.
    pub post_url: String,
    pub author: String,
    pub published: FormattedDate,
    pub updated: FormattedDate,
    pub site_name: String,
    /// Absolute site logo.
    pub site_logo: String,
    /// Tag names, or site keywords when the post has none.
    pub keywords: String,
}

/// Inputs gathered by the aggregator.
#[derive(Debug)]
pub struct Sources<'a> {
    pub post: &'a Post,
    pub author: String,
    /// Comma-joined tag names, possibly empty.
    pub tag_keywords: String,
    pub config: &'a BasicConfig,
    pub system: &'a SystemInfo,
}

impl SeoMeta {
    /// Merge lookup results, applying the cover and keyword fallbacks.
    pub fn assemble(sources: Sources<'_>, links: &dyn LinkProcessor, zone: RenderZone) -> Self {
        let Sources {
            post,
            author,
            tag_keywords,
            config,
            system,
        } = sources;

        let cover = post
            .cover
            .as_deref()
            .filter(|cover| !cover.trim().is_empty())
            .unwrap_or(&config.default_image);

        let keywords = if tag_keywords.trim().is_empty() {
            system.seo_keywords.clone().unwrap_or_default()
        } else {
            tag_keywords
        };

        Self {
            title: post.title.clone(),
            description: post.excerpt.clone(),
            cover_url: links.process_link(cover),
            post_url: links.process_link(&post.permalink),
            author,
            published: FormattedDate::new(post.publish_time, zone),
            updated: FormattedDate::new(post.last_modify_time, zone),
            site_name: system.title.clone(),
            site_logo: links.process_link(&system.logo),
            keywords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SiteLinkProcessor;
    use chrono::{FixedOffset, TimeZone, Utc};

    fn utc() -> RenderZone {
        RenderZone::Fixed(FixedOffset::east_opt(0).unwrap())
    }

    fn post() -> Post {
        Post {
            name: "post-1".into(),
            title: "Hello".into(),
            excerpt: "An intro".into(),
            owner: "admin".into(),
            permalink: "/archives/hello".into(),
            ..Post::default()
        }
    }

    fn assemble(post: &Post, tags: &str, config: &BasicConfig, system: &SystemInfo) -> SeoMeta {
        let links = SiteLinkProcessor::new(Some("https://blog.example.com"));
        SeoMeta::assemble(
            Sources {
                post,
                author: "Alice".into(),
                tag_keywords: tags.into(),
                config,
                system,
            },
            &links,
            utc(),
        )
    }

    #[test]
    fn test_lookup_accessors() {
        let hit = Lookup::Hit(1);
        assert!(!hit.is_fallback());
        assert_eq!(hit.into_inner(), 1);

        let fallback = Lookup::Fallback("owner");
        assert!(fallback.is_fallback());
        assert_eq!(fallback.into_inner(), "owner");
    }

    #[test]
    fn test_links_are_normalized() {
        let system = SystemInfo {
            title: "Blog".into(),
            logo: "/logo.png".into(),
            seo_keywords: None,
        };
        let meta = assemble(&post(), "", &BasicConfig::default(), &system);

        assert_eq!(meta.post_url, "https://blog.example.com/archives/hello");
        assert_eq!(meta.site_logo, "https://blog.example.com/logo.png");
        assert_eq!(meta.site_name, "Blog");
        assert_eq!(meta.description, "An intro");
        assert_eq!(meta.author, "Alice");
    }

    #[test]
    fn test_cover_falls_back_to_default_image() {
        let config = BasicConfig {
            default_image: "https://x/default.png".into(),
            ..BasicConfig::default()
        };

        let meta = assemble(&post(), "", &config, &SystemInfo::default());
        assert_eq!(meta.cover_url, "https://x/default.png");

        let blank_cover = Post {
            cover: Some("   ".into()),
            ..post()
        };
        let meta = assemble(&blank_cover, "", &config, &SystemInfo::default());
        assert_eq!(meta.cover_url, "https://x/default.png");
    }

    #[test]
    fn test_post_cover_wins() {
        let config = BasicConfig {
            default_image: "https://x/default.png".into(),
            ..BasicConfig::default()
        };
        let with_cover = Post {
            cover: Some("/upload/cover.png".into()),
            ..post()
        };

        let meta = assemble(&with_cover, "", &config, &SystemInfo::default());
        assert_eq!(meta.cover_url, "https://blog.example.com/upload/cover.png");
    }

    #[test]
    fn test_keyword_resolution() {
        let system = SystemInfo {
            seo_keywords: Some("site,wide".into()),
            ..SystemInfo::default()
        };
        let config = BasicConfig::default();

        assert_eq!(assemble(&post(), "Alpha,Beta", &config, &system).keywords, "Alpha,Beta");
        assert_eq!(assemble(&post(), "  ", &config, &system).keywords, "site,wide");
        assert_eq!(
            assemble(&post(), "", &config, &SystemInfo::default()).keywords,
            ""
        );
    }

    #[test]
    fn test_missing_publish_time() {
        let p = Post {
            last_modify_time: Some(Utc.with_ymd_and_hms(2024, 6, 15, 6, 30, 45).unwrap()),
            ..post()
        };
        let meta = assemble(&p, "", &BasicConfig::default(), &SystemInfo::default());

        assert_eq!(meta.published.plain, "");
        assert_eq!(meta.published.rfc3339, "");
        assert_eq!(meta.updated.plain, "2024-06-15T06:30:45");
        assert_eq!(meta.updated.rfc3339, "2024-06-15T06:30:45Z");
    }
}
