//! Site Configuration
//!
//! A JSON document embedded at build time. Missing fields take defaults.

use serde::Deserialize;
use tracing::Level;

use crate::error::ConfigError;
use crate::filter::DEFAULT_DISPLAY_CAP;

const EMBEDDED_CONFIG: &str = include_str!("../site.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    /// Canonical URL used by share links and "copy link"
    pub share_url: String,
    pub share_text: String,
    /// Results shown before "show more"
    pub display_cap: usize,
    /// Toast lifetime
    pub notice_ms: u32,
    /// Completion banner lifetime
    pub celebration_ms: u32,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "CryptoSafe".to_string(),
            share_url: "https://www.cryptoscamguide.com/".to_string(),
            share_text: "Learn to spot crypto scams before they cost you.".to_string(),
            display_cap: DEFAULT_DISPLAY_CAP,
            notice_ms: 3000,
            celebration_ms: 4000,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a config document
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// The embedded `site.json`, or defaults plus the reason they were used
    pub fn embedded() -> (Self, Option<ConfigError>) {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.display_cap == 0 {
            return Err(ConfigError::InvalidDisplayCap);
        }
        self.log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))?;
        if !(self.share_url.starts_with("https://") || self.share_url.starts_with("http://")) {
            return Err(ConfigError::InvalidShareUrl(self.share_url.clone()));
        }
        Ok(())
    }

    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let (config, err) = SiteConfig::embedded();
        assert!(err.is_none(), "embedded config rejected: {:?}", err);
        assert_eq!(config.display_cap, 12);
        assert_eq!(config.level(), Level::INFO);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = SiteConfig::from_json(r#"{ "site_name": "Test" }"#).unwrap();
        assert_eq!(config.site_name, "Test");
        assert_eq!(config.display_cap, DEFAULT_DISPLAY_CAP);
        assert_eq!(config.notice_ms, 3000);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            SiteConfig::from_json(r#"{ "display_cap": 0 }"#),
            Err(ConfigError::InvalidDisplayCap)
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{ "log_level": "loud" }"#),
            Err(ConfigError::InvalidLogLevel(level)) if level == "loud"
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{ "share_url": "ftp://example.com" }"#),
            Err(ConfigError::InvalidShareUrl(_))
        ));
        assert!(matches!(SiteConfig::from_json("not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_debug_level() {
        let config = SiteConfig::from_json(r#"{ "log_level": "debug" }"#).unwrap();
        assert_eq!(config.level(), Level::DEBUG);
    }
}
