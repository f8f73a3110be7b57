//! Read-only collaborators of the SEO pipeline.
//!
//! | Trait                | Lookup                        | Implementations          |
//! |----------------------|-------------------------------|--------------------------|
//! | `ContentStore`       | post by name                  | `MemoryStore`            |
//! | `UserStore`          | user by name                  | `MemoryStore`            |
//! | `TagStore`           | tags by names, sorted by name | `MemoryStore`            |
//! | `SettingsStore`      | `[seo]` feature flags         | `ConfigStore`            |
//! | `SystemInfoProvider` | site title, logo, keywords    | `ConfigStore`            |
//!
//! All lookups are reads; a render may drop them mid-flight.

mod config;
mod memory;
mod model;

pub use config::ConfigStore;
pub use memory::{ContentData, MemoryStore};
pub use model::{Post, SystemInfo, Tag, User};

use crate::config::BasicConfig;
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Store access errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid content data")]
    Json(#[from] serde_json::Error),
}

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch a post by name. `Ok(None)` when it does not exist.
    async fn fetch_post(&self, name: &str) -> Result<Option<Post>, StoreError>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a user by name. `Ok(None)` when it does not exist.
    async fn fetch_user(&self, name: &str) -> Result<Option<User>, StoreError>;
}

#[async_trait]
pub trait TagStore: Send + Sync {
    /// List the tags whose name is in `names`, sorted by name ascending.
    /// Unknown names are skipped.
    async fn list_tags(&self, names: &[String]) -> Result<Vec<Tag>, StoreError>;
}

#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Fragment settings. `Ok(None)` when nothing is configured.
    async fn basic_config(&self) -> Result<Option<BasicConfig>, StoreError>;
}

#[async_trait]
pub trait SystemInfoProvider: Send + Sync {
    async fn system_info(&self) -> Result<SystemInfo, StoreError>;
}
