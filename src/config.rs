//! Settings for the spelling and image services
//!
//! Read from `<config_dir>/picsearch/config.json`, then overridden by
//! environment variables. A missing file is not an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{AppError, Result};

pub const DEFAULT_IMAGE_API_URL: &str = "https://pixabay.com/api/";
pub const DEFAULT_SPELL_API_URL: &str = "https://api.datamuse.com";

/// Pixabay rejects `per_page` outside this range
const PER_PAGE_RANGE: (u32, u32) = (3, 200);

const MAX_SUGGESTIONS: u32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pixabay_key: Option<String>,
    pub image_api_url: String,
    pub spell_api_url: String,
    pub per_page: u32,
    /// Alternates shown besides the primary correction
    pub max_suggestions: u32,
    pub safe_search: bool,
    pub request_timeout_secs: u64,
    pub grid_columns: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pixabay_key: None,
            image_api_url: DEFAULT_IMAGE_API_URL.to_string(),
            spell_api_url: DEFAULT_SPELL_API_URL.to_string(),
            per_page: 30,
            max_suggestions: 5,
            safe_search: true,
            request_timeout_secs: 10,
            grid_columns: 4,
        }
    }
}

impl Config {
    /// Default config file location
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("picsearch").join("config.json"))
    }

    /// Load from the default location and apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::path() {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config.normalized())
    }

    /// Load a config file; a file that does not exist yields the defaults
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        let config: Config = serde_json::from_str(&raw)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        tracing::info!("Loaded config from {:?}", path);
        Ok(config.normalized())
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup("PIXABAY_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.pixabay_key = Some(key);
        }
        if let Some(url) = lookup("PICSEARCH_IMAGE_API_URL") {
            self.image_api_url = url;
        }
        if let Some(url) = lookup("PICSEARCH_SPELL_API_URL") {
            self.spell_api_url = url;
        }
    }

    fn normalized(mut self) -> Self {
        self.per_page = self.per_page.clamp(PER_PAGE_RANGE.0, PER_PAGE_RANGE.1);
        self.grid_columns = self.grid_columns.max(1);
        self.max_suggestions = self.max_suggestions.min(MAX_SUGGESTIONS);
        self.pixabay_key = self.pixabay_key.filter(|k| !k.trim().is_empty());
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_path(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_and_clamping() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"per_page": 1000, "grid_columns": 0, "pixabay_key": "abc"}}"#).unwrap();

        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.per_page, 200);
        assert_eq!(config.grid_columns, 1);
        assert_eq!(config.pixabay_key.as_deref(), Some("abc"));
        assert_eq!(config.spell_api_url, DEFAULT_SPELL_API_URL);
    }

    #[test]
    fn test_suggestion_count_is_clamped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_suggestions": 4294967295}}"#).unwrap();

        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.max_suggestions, MAX_SUGGESTIONS);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        match Config::from_path(file.path()) {
            Err(AppError::Config(_)) => {}
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_env(|key| match key {
            "PIXABAY_API_KEY" => Some("from-env".to_string()),
            "PICSEARCH_SPELL_API_URL" => Some("http://localhost:9000".to_string()),
            _ => None,
        });

        assert_eq!(config.pixabay_key.as_deref(), Some("from-env"));
        assert_eq!(config.spell_api_url, "http://localhost:9000");
        assert_eq!(config.image_api_url, DEFAULT_IMAGE_API_URL);
    }

    #[test]
    fn test_blank_key_is_dropped() {
        let config = Config {
            pixabay_key: Some("   ".to_string()),
            ..Config::default()
        }
        .normalized();
        assert!(config.pixabay_key.is_none());
    }
}
