//! Catalog Configuration
//!
//! Loaded from `catalog.toml`. Every field has a default, so a partial file
//! (or no file at all) is valid.
//!
//! ```toml
//! articles = ["the", "a", "an"]
//!
//! [sort]
//! alpha_sort = false
//! fave_sort = true
//! inst_sort = true
//! ignore_article = true
//!
//! [search]
//! max_results = 50      # 0 = unbounded
//! single_result = false
//!
//! [frequency]
//! increment = 5.0
//! decay = 0.9
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::entities::Catalog;
use crate::domain::services::FrequencyModel;
use crate::domain::value_objects::{Articles, SearchQuery, SortSpec};

/// Directory name under the platform config dir
const APP_DIR: &str = "appshelf";
/// Config file name
const CONFIG_FILE: &str = "catalog.toml";

/// Search defaults
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Stop after this many hits; 0 means unbounded
    pub max_results: usize,
    /// Return an exact title/alias hit alone
    pub single_result: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_results: 50,
            single_result: false,
        }
    }
}

/// Catalog configuration loaded from catalog.toml
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Leading words ignored when comparing titles
    pub articles: Vec<String>,
    /// Default ordering
    pub sort: SortSpec,
    pub search: SearchSettings,
    pub frequency: FrequencyModel,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            articles: Articles::DEFAULT.iter().map(|a| a.to_string()).collect(),
            sort: SortSpec::default(),
            search: SearchSettings::default(),
            frequency: FrequencyModel::default(),
        }
    }
}

impl CatalogConfig {
    /// Find catalog.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: config dir, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join(APP_DIR).join(CONFIG_FILE)),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE))),
            Some(PathBuf::from(CONFIG_FILE)),
        ];

        candidates.into_iter().flatten().find(|c| c.exists())
    }

    /// Load configuration from the first file found, returning defaults on any failure
    pub fn load() -> Self {
        let Some(path) = Self::find_config_path() else {
            debug!("No {} found, using defaults", CONFIG_FILE);
            return Self::default();
        };
        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: CatalogConfig = toml::from_str(&content)?;
        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject scoring parameters that would make frequencies grow or go negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        let decay = self.frequency.decay;
        if !(decay > 0.0 && decay <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "frequency.decay must be in (0, 1], got {}",
                decay
            )));
        }
        if self.frequency.increment.is_nan() || self.frequency.increment < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "frequency.increment must not be negative, got {}",
                self.frequency.increment
            )));
        }
        Ok(())
    }

    pub fn articles(&self) -> Articles {
        Articles::new(&self.articles)
    }

    /// Query carrying the configured search defaults
    pub fn search_query(&self, text: &str) -> SearchQuery {
        let max = (self.search.max_results > 0).then_some(self.search.max_results);
        SearchQuery::new(text)
            .with_max_results(max)
            .with_single_result(self.search.single_result)
    }

    /// Empty catalog using these settings
    pub fn build_catalog(&self) -> Catalog {
        Catalog::new()
            .with_articles(self.articles())
            .with_sort_spec(self.sort)
            .with_frequency_model(self.frequency)
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();

        assert_eq!(config.articles, vec!["the", "a", "an"]);
        assert_eq!(config.sort, SortSpec::default());
        assert_eq!(config.search.max_results, 50);
        assert_eq!(config.frequency.increment, 5.0);
        assert_eq!(config.frequency.decay, 0.9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let file = write_config(
            r#"
articles = ["der", "die", "das"]

[sort]
alpha_sort = true

[search]
max_results = 0
"#,
        );

        let config = CatalogConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.articles, vec!["der", "die", "das"]);
        assert!(config.sort.alpha_sort);
        assert!(config.sort.fave_sort);
        assert_eq!(config.frequency, FrequencyModel::default());
        assert_eq!(config.search_query("doom").max_results, None);
    }

    #[test]
    fn test_invalid_decay_rejected() {
        let file = write_config("[frequency]\ndecay = 1.5\n");
        assert!(matches!(
            CatalogConfig::load_from_path(file.path()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_invalid_increment_rejected() {
        let file = write_config("[frequency]\nincrement = -2.0\n");
        assert!(matches!(
            CatalogConfig::load_from_path(file.path()),
            Err(ConfigError::Invalid(_))
        ));

        let mut config = CatalogConfig::default();
        config.frequency.increment = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        let file = write_config("articles = 3");
        assert!(matches!(
            CatalogConfig::load_from_path(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            CatalogConfig::load_from_path(&dir.path().join("missing.toml")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_search_query_defaults() {
        let mut config = CatalogConfig::default();
        config.search.single_result = true;

        let query = config.search_query("Doom");
        assert_eq!(query.max_results, Some(50));
        assert!(query.single_result);
    }

    #[test]
    fn test_build_catalog_uses_settings() {
        let mut config = CatalogConfig::default();
        config.articles = vec!["le".to_string()];
        config.sort = SortSpec::alphabetical();

        let catalog = config.build_catalog();
        assert!(catalog.articles().is_article("Le"));
        assert!(!catalog.articles().is_article("The"));
        assert_eq!(catalog.sort_spec(), SortSpec::alphabetical());
    }
}
