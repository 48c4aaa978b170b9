//! Configuration management for deckhand
//!
//! Scryfall needs no credentials, so a missing config file at the default
//! location simply means defaults. An explicitly passed path must exist.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Default spacing between upstream requests. Scryfall asks clients to
/// leave 50-100ms between calls.
const DEFAULT_REQUEST_DELAY_MS: u64 = 75;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Override for the Scryfall API base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Minimum spacing between upstream requests, in milliseconds
    pub request_delay_ms: u64,

    /// Cache TTLs and sizing
    pub cache: CacheSettings,
}

/// Cache tuning: per-data-type TTLs, the search-caching switch, and the
/// store capacity. All overridable from the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Card records change rarely; refetch daily
    pub card_ttl_secs: u64,

    /// Artwork is immutable for a printing
    pub image_ttl_secs: u64,

    /// Set contents are effectively static once printed
    pub set_cards_ttl_secs: u64,

    /// The set catalog gains a handful of entries per year
    pub set_catalog_ttl_secs: u64,

    /// Derived popular-sets view
    pub popular_ttl_secs: u64,

    /// Free-text searches repeat within a session, not across days
    pub search_ttl_secs: u64,

    /// Whether free-text search results are cached by query string
    pub cache_searches: bool,

    /// Store capacity; oldest-expiring entries are evicted past this
    pub max_entries: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_host: None,
            request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
            cache: CacheSettings::default(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            card_ttl_secs: 24 * 60 * 60,
            image_ttl_secs: 7 * 24 * 60 * 60,
            set_cards_ttl_secs: 7 * 24 * 60 * 60,
            set_catalog_ttl_secs: 24 * 60 * 60,
            popular_ttl_secs: 6 * 60 * 60,
            search_ttl_secs: 15 * 60,
            cache_searches: true,
            max_entries: 512,
        }
    }
}

impl CacheSettings {
    pub fn card_ttl(&self) -> Duration {
        Duration::from_secs(self.card_ttl_secs)
    }

    pub fn image_ttl(&self) -> Duration {
        Duration::from_secs(self.image_ttl_secs)
    }

    pub fn set_cards_ttl(&self) -> Duration {
        Duration::from_secs(self.set_cards_ttl_secs)
    }

    pub fn set_catalog_ttl(&self) -> Duration {
        Duration::from_secs(self.set_catalog_ttl_secs)
    }

    pub fn popular_ttl(&self) -> Duration {
        Duration::from_secs(self.popular_ttl_secs)
    }

    pub fn search_ttl(&self) -> Duration {
        Duration::from_secs(self.search_ttl_secs)
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".deckhand").join("config.yaml"))
    }

    /// Resolve the effective config path from an optional override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional path override.
    ///
    /// An explicit path must exist; a missing file at the default path
    /// yields the defaults.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let resolved = Self::resolve_path(path)?;
        if !resolved.exists() {
            return match path {
                Some(p) => Err(ConfigError::NotFound(p.to_string()).into()),
                None => Ok(Self::default()),
            };
        }
        Self::load_from(resolved)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an optional path override
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        Ok(())
    }

    /// Spacing between upstream requests
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}
