//! `[render]` configuration.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::date::RenderZone;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Time zone and timeout for one render.
///
/// ```toml
/// [render]
/// timezone = "+08:00"   # or "local", "utc"
/// timeout_ms = 3000     # 0 = no timeout
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Zone used to format publish/update times.
    pub timezone: String,
    /// Upper bound for the store lookups of one render, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            timezone: "local".into(),
            timeout_ms: 3000,
        }
    }
}

impl RenderConfig {
    pub const TIMEZONE: FieldPath = FieldPath::new("render.timezone");

    /// Parsed time zone. Unparseable values fall back to local time
    /// (`validate` reports them).
    pub fn zone(&self) -> RenderZone {
        RenderZone::parse(&self.timezone).unwrap_or_default()
    }

    /// Render timeout, `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if RenderZone::parse(&self.timezone).is_none() {
            diag.error_with_hint(
                Self::TIMEZONE,
                format!("unknown time zone '{}'", self.timezone),
                "use \"local\", \"utc\" or an offset like \"+08:00\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.zone(), RenderZone::Local);
        assert_eq!(config.timeout(), Some(Duration::from_millis(3000)));
    }

    #[test]
    fn test_timeout_disabled() {
        let config = RenderConfig {
            timeout_ms: 0,
            ..RenderConfig::default()
        };
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_fixed_zone() {
        let config: RenderConfig = toml::from_str("timezone = \"+08:00\"").unwrap();
        assert_eq!(
            config.zone(),
            RenderZone::Fixed(FixedOffset::east_opt(8 * 3600).unwrap())
        );
    }

    #[test]
    fn test_validate_invalid_zone() {
        let config = RenderConfig {
            timezone: "Mars/Olympus".into(),
            ..RenderConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.has_errors());
        assert_eq!(diag.errors()[0].field, RenderConfig::TIMEZONE);
        assert_eq!(config.zone(), RenderZone::Local);
    }

    #[test]
    fn test_non_ascii_offset_is_diagnosed() {
        let config: RenderConfig = toml::from_str("timezone = \"+aé1\"").unwrap();
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(config.zone(), RenderZone::Local);
    }
}
