//! Reloadable config handle.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement, so a
//! render in flight keeps the snapshot it started with while `timefactor.toml`
//! is reloaded underneath it.

use crate::config::SiteConfig;
use crate::utils::hash;
use anyhow::Result;
use arc_swap::ArcSwap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared, hot-reloadable configuration.
#[derive(Debug)]
pub struct ConfigHandle {
    /// Source file; `None` for configs built in memory.
    path: Option<PathBuf>,
    current: ArcSwap<SiteConfig>,
    /// Hash of the file content the current snapshot was parsed from.
    hash: AtomicU64,
}

impl ConfigHandle {
    /// Wrap an in-memory config. `reload` is a no-op for such handles.
    pub fn new(config: SiteConfig) -> Self {
        Self {
            path: None,
            current: ArcSwap::from_pointee(config),
            hash: AtomicU64::new(0),
        }
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| crate::config::ConfigError::Io(path.into(), e))?;
        let config = SiteConfig::from_content(&content, path)?;
        config.validate()?;

        Ok(Self {
            path: Some(path.to_path_buf()),
            current: ArcSwap::from_pointee(config),
            hash: AtomicU64::new(hash::compute(content.as_bytes())),
        })
    }

    /// Current snapshot.
    #[inline]
    pub fn current(&self) -> Arc<SiteConfig> {
        self.current.load_full()
    }

    /// Reload config from disk if content changed.
    ///
    /// Returns `Ok(true)` if config was updated, `Ok(false)` if unchanged.
    /// On error the previous snapshot stays active.
    pub fn reload(&self) -> Result<bool> {
        let Some(path) = &self.path else {
            return Ok(false);
        };

        let content =
            fs::read_to_string(path).map_err(|e| crate::config::ConfigError::Io(path.clone(), e))?;
        let new_hash = hash::compute(content.as_bytes());
        if new_hash == self.hash.load(Ordering::Relaxed) {
            return Ok(false);
        }

        let config = SiteConfig::from_content(&content, path)?;
        config.validate()?;

        self.current.store(Arc::new(config));
        self.hash.store(new_hash, Ordering::Relaxed);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_in_memory_reload_is_noop() {
        let handle = ConfigHandle::new(SiteConfig::default());
        assert!(!handle.reload().unwrap());
    }

    #[test]
    fn test_reload_detects_change() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("timefactor.toml");
        fs::write(&path, "[site]\ntitle = \"Before\"\n").unwrap();

        let handle = ConfigHandle::load(&path).unwrap();
        assert_eq!(handle.current().site.title, "Before");

        // Unchanged content
        assert!(!handle.reload().unwrap());

        fs::write(&path, "[site]\ntitle = \"After\"\n").unwrap();
        assert!(handle.reload().unwrap());
        assert_eq!(handle.current().site.title, "After");
    }

    #[test]
    fn test_reload_keeps_snapshot_on_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("timefactor.toml");
        fs::write(&path, "[site]\ntitle = \"Good\"\n").unwrap();

        let handle = ConfigHandle::load(&path).unwrap();
        let snapshot = handle.current();

        fs::write(&path, "[site\ntitle = ").unwrap();
        assert!(handle.reload().is_err());
        assert_eq!(handle.current().site.title, "Good");
        assert_eq!(snapshot.site.title, "Good");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = ConfigHandle::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(format!("{err}").contains("missing.toml"));
    }
}
