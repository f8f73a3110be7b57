//! In-memory content, user and tag storage.
//!
//! Backs the CLI (loaded from a `content.json` data file) and tests.
//!
//! ```json
//! {
//!   "posts": [{ "name": "hello", "title": "Hello", "owner": "admin", "tags": ["t1"],
//!               "permalink": "/archives/hello",
//!               "publish_time": "2024-06-15T06:30:45Z" }],
//!   "users": [{ "name": "admin", "display_name": "Alice" }],
//!   "tags":  [{ "name": "t1", "display_name": "Rust" }]
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use async_trait::async_trait;
use parking_lot::RwLock;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::{ContentStore, Post, StoreError, Tag, TagStore, User, UserStore};

/// Serialized form of a [`MemoryStore`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentData {
    pub posts: Vec<Post>,
    pub users: Vec<User>,
    pub tags: Vec<Tag>,
}

/// Thread-safe storage keyed by name.
///
/// `BTreeMap` keeps tags ordered by name, which is the order `list_tags`
/// guarantees.
#[derive(Debug, Default)]
pub struct MemoryStore {
    posts: RwLock<BTreeMap<String, Post>>,
    users: RwLock<BTreeMap<String, User>>,
    tags: RwLock<BTreeMap<String, Tag>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from deserialized data. Later entries win on duplicate names.
    pub fn from_data(data: ContentData) -> Self {
        let store = Self::new();
        for post in data.posts {
            store.insert_post(post);
        }
        for user in data.users {
            store.insert_user(user);
        }
        for tag in data.tags {
            store.insert_tag(tag);
        }
        store
    }

    /// Parse a JSON data document.
    pub fn from_json(content: &str) -> Result<Self, StoreError> {
        let data: ContentData = serde_json::from_str(content)?;
        Ok(Self::from_data(data))
    }

    /// Load a JSON data file.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content =
            fs::read_to_string(path).map_err(|e| StoreError::Io(path.to_path_buf(), e))?;
        Self::from_json(&content)
    }

    /// Insert or replace a post.
    pub fn insert_post(&self, post: Post) {
        self.posts.write().insert(post.name.clone(), post);
    }

    /// Insert or replace a user.
    pub fn insert_user(&self, user: User) {
        self.users.write().insert(user.name.clone(), user);
    }

    /// Insert or replace a tag.
    pub fn insert_tag(&self, tag: Tag) {
        self.tags.write().insert(tag.name.clone(), tag);
    }

    pub fn post_count(&self) -> usize {
        self.posts.read().len()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn fetch_post(&self, name: &str) -> Result<Option<Post>, StoreError> {
        Ok(self.posts.read().get(name).cloned())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn fetch_user(&self, name: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().get(name).cloned())
    }
}

#[async_trait]
impl TagStore for MemoryStore {
    async fn list_tags(&self, names: &[String]) -> Result<Vec<Tag>, StoreError> {
        let wanted: FxHashSet<&str> = names.iter().map(String::as_str).collect();
        Ok(self
            .tags
            .read()
            .values()
            .filter(|tag| wanted.contains(tag.name.as_str()))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DATA: &str = r#"{
        "posts": [
            { "name": "hello", "title": "Hello", "owner": "admin", "tags": ["t2", "t1"] }
        ],
        "users": [{ "name": "admin", "display_name": "Alice" }],
        "tags": [
            { "name": "t2", "display_name": "Beta" },
            { "name": "t1", "display_name": "Alpha" },
            { "name": "t3" }
        ]
    }"#;

    #[tokio::test]
    async fn test_fetch_post_and_user() {
        let store = MemoryStore::from_json(DATA).unwrap();
        assert_eq!(store.post_count(), 1);

        let post = store.fetch_post("hello").await.unwrap().unwrap();
        assert_eq!(post.title, "Hello");
        assert!(store.fetch_post("missing").await.unwrap().is_none());

        let user = store.fetch_user("admin").await.unwrap().unwrap();
        assert_eq!(user.display_name.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn test_list_tags_sorted_by_name() {
        let store = MemoryStore::from_json(DATA).unwrap();
        let names = vec!["t2".to_string(), "t1".to_string(), "nope".to_string()];

        let tags = store.list_tags(&names).await.unwrap();
        let ids: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(ids, ["t1", "t2"]);
    }

    #[tokio::test]
    async fn test_insert_replaces_by_name() {
        let store = MemoryStore::new();
        for title in ["First", "Second"] {
            store.insert_post(Post {
                name: "a".into(),
                title: title.into(),
                ..Post::default()
            });
        }
        assert_eq!(store.post_count(), 1);
        assert_eq!(store.fetch_post("a").await.unwrap().unwrap().title, "Second");
    }

    #[test]
    fn test_load_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        fs::write(&path, DATA).unwrap();
        assert_eq!(MemoryStore::load(&path).unwrap().post_count(), 1);

        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(MemoryStore::load(&path), Err(StoreError::Json(_))));

        let missing = dir.path().join("missing.json");
        assert!(matches!(MemoryStore::load(&missing), Err(StoreError::Io(..))));
    }
}
