//! Site configuration management for `timefactor.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── seo        # [seo]
//! │   └── render     # [render]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Reloadable ConfigHandle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section    | Purpose                                          |
//! |------------|--------------------------------------------------|
//! | `[site]`   | Site title, logo, keywords, external URL         |
//! | `[seo]`    | Fragment feature flags, default cover image      |
//! | `[render]` | Time zone for dates, render timeout              |

pub mod section;
pub mod types;
mod util;

pub use section::{BasicConfig, RenderConfig, SiteInfoConfig};
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, ConfigHandle, FieldPath, Severity,
};
pub use util::{find_config_file, find_config_file_from};

use crate::log;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing timefactor.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site information
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Fragment settings. `None` when the section is absent, which
    /// disables every fragment.
    #[serde(default)]
    pub seo: Option<BasicConfig>,

    /// Render settings
    #[serde(default)]
    pub render: RenderConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_content(&content, path)
    }

    /// Parse file content, warning about unknown fields.
    pub(crate) fn from_content(content: &str, path: &Path) -> Result<Self> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Fragment settings, all-disabled when `[seo]` is absent.
    pub fn seo_or_default(&self) -> BasicConfig {
        self.seo.clone().unwrap_or_default()
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collect diagnostics for every section without failing.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        if let Some(seo) = &self.seo {
            seo.validate(self.site.url.is_some(), &mut diag);
        }
        self.render.validate(&mut diag);

        diag
    }

    /// Validate configuration.
    ///
    /// Prints warnings and returns all collected errors at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        assert!(SiteConfig::from_str("[seo\nenable_canonical_link = true").is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.site.title, "");
        assert!(config.site.url.is_none());
        assert!(config.seo.is_none());
        assert!(!config.seo_or_default().any_enabled());
        assert_eq!(config.render.timeout_ms, 3000);
    }

    #[test]
    fn test_full_config() {
        let config = SiteConfig::from_str(
            r#"
[site]
url = "https://blog.example.com"
title = "My Blog"
logo = "/logo.png"
keywords = "rust,blog"

[seo]
enable_canonical_link = true
enable_structured_data = true
default_image = "/default.png"

[render]
timezone = "+08:00"
timeout_ms = 500
"#,
        )
        .unwrap();

        assert_eq!(config.site.url.as_deref(), Some("https://blog.example.com"));
        assert_eq!(config.site.keywords.as_deref(), Some("rust,blog"));
        let seo = config.seo.as_ref().unwrap();
        assert!(seo.enable_canonical_link);
        assert!(!seo.enable_og_time_factor);
        assert_eq!(seo.default_image, "/default.png");
        assert_eq!(config.render.timeout_ms, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = SiteConfig::from_str(
            "[site]\nurl = \"not a url\"\n[render]\ntimezone = \"nowhere\"\n",
        )
        .unwrap();

        let diag = config.diagnostics();
        assert_eq!(diag.len(), 2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.title, "Test");

        // Unknown fields should be collected
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"\n[seo]\nenable_og_time_factor = true";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }
}
