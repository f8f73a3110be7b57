//! Settings and system info backed by `timefactor.toml`.

use std::sync::Arc;

use async_trait::async_trait;

use super::{SettingsStore, StoreError, SystemInfo, SystemInfoProvider};
use crate::config::{BasicConfig, ConfigHandle, SiteConfig};
use crate::debug;

/// Serves lookups from a [`ConfigHandle`], reloading it first so edits to
/// `timefactor.toml` take effect on the next render.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    handle: Arc<ConfigHandle>,
}

impl ConfigStore {
    pub fn new(handle: Arc<ConfigHandle>) -> Self {
        Self { handle }
    }

    /// Latest valid snapshot. A file that no longer parses or validates
    /// leaves the previous snapshot in place.
    fn snapshot(&self) -> Arc<SiteConfig> {
        match self.handle.reload() {
            Ok(true) => debug!("config"; "reloaded after change on disk"),
            Ok(false) => {}
            Err(e) => debug!("config"; "reload failed, keeping previous config: {:#}", e),
        }
        self.handle.current()
    }
}

#[async_trait]
impl SettingsStore for ConfigStore {
    async fn basic_config(&self) -> Result<Option<BasicConfig>, StoreError> {
        Ok(self.snapshot().seo.clone())
    }
}

#[async_trait]
impl SystemInfoProvider for ConfigStore {
    async fn system_info(&self) -> Result<SystemInfo, StoreError> {
        let config = self.snapshot();
        Ok(SystemInfo {
            title: config.site.title.clone(),
            logo: config.site.logo.clone(),
            seo_keywords: config.site.keywords.clone(),
        })
    }
}
