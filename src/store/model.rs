//! Records read from the content, user and tag stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Deserialize tags, treating `null` as empty vec
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// A blog post.
///
/// | Field              | Description                              |
/// |--------------------|------------------------------------------|
/// | `name`             | Identifier, the template `name` variable |
/// | `title`            | Post title                               |
/// | `excerpt`          | Raw excerpt, used as description         |
/// | `cover`            | Cover image link (optional)              |
/// | `owner`            | User identifier of the author            |
/// | `tags`             | Tag identifiers                          |
/// | `permalink`        | Post link, absolutized when rendered     |
/// | `publish_time`     | RFC 3339 instant (optional)              |
/// | `last_modify_time` | RFC 3339 instant (optional)              |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub name: String,
    pub title: String,
    pub excerpt: String,
    pub cover: Option<String>,
    pub owner: String,
    #[serde(deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    pub permalink: String,
    pub publish_time: Option<DateTime<Utc>>,
    pub last_modify_time: Option<DateTime<Utc>>,
}

/// A registered user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub name: String,
    pub display_name: Option<String>,
}

/// A taxonomy tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub name: String,
    pub display_name: Option<String>,
}

impl Tag {
    /// Display name, falling back to the identifier when unset or blank.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.name)
    }
}

/// Site-wide information from the system info provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemInfo {
    pub title: String,
    pub logo: String,
    pub seo_keywords: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_deserialize() {
        let json = r#"{
            "name": "post-1",
            "title": "Hello",
            "owner": "admin",
            "tags": null,
            "publish_time": "2024-06-15T06:30:45Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.name, "post-1");
        assert!(post.tags.is_empty());
        assert!(post.cover.is_none());
        assert!(post.publish_time.is_some());
        assert!(post.last_modify_time.is_none());
    }

    #[test]
    fn test_tag_label() {
        let tag = Tag {
            name: "t1".into(),
            display_name: Some("Alpha".into()),
        };
        assert_eq!(tag.label(), "Alpha");

        let tag = Tag {
            name: "t2".into(),
            display_name: None,
        };
        assert_eq!(tag.label(), "t2");

        let tag = Tag {
            name: "t3".into(),
            display_name: Some(" ".into()),
        };
        assert_eq!(tag.label(), "t3");
    }
}
