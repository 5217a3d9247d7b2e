//! JSON configuration file support.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use sentclean::{SanitizeOptions, SegmentOptions};

/// Settings loaded from `--config`. Missing sections keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sanitizer stage switches
    pub sanitize: SanitizeOptions,

    /// Segmenter settings
    pub segment: SegmentOptions,
}

impl Config {
    /// Load the config file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        let config: Config = serde_json::from_str(&text)
            .map_err(|e| format!("Invalid config {}: {}", path.display(), e))?;

        config.segment.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults_without_path() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.segment.max_len, sentclean::DEFAULT_MAX_LEN);
        assert_eq!(config.sanitize, SanitizeOptions::standard());
    }

    #[test]
    fn test_load_partial_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"segment": {"max_len": 64}, "sanitize": {"strip_urls": false}}"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.segment.max_len, 64);
        assert!(!config.sanitize.strip_urls);
        assert!(config.sanitize.strip_emails);
    }

    #[test]
    fn test_load_rejects_zero_max_len() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"segment": {"max_len": 0}}"#).unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }
}
