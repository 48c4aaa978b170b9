//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading and client initialization.

use std::sync::Arc;

use crate::cache::CachedScryfallClient;
use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::ScryfallClient;
use crate::client::scryfall::API_BASE_URL;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, client, and runtime options.
#[derive(Debug)]
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// API client with caching (Arc-wrapped so handlers can share it)
    pub client: Arc<CachedScryfallClient<ScryfallClient>>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context with full initialization.
    ///
    /// This handles:
    /// - Loading config from path (or default location)
    /// - Applying the API host override if provided
    /// - Creating the API client with the caching wrapper
    ///
    /// # Errors
    /// Returns error if config cannot be loaded or the HTTP client cannot
    /// be constructed.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_at(opts.config_ref())?;

        // CLI flag / env beats the config file
        if let Some(host) = opts.api_host_ref() {
            config.api_host = Some(host.to_string());
        }

        let base_url = config
            .api_host
            .clone()
            .unwrap_or_else(|| API_BASE_URL.to_string());
        let raw_client = ScryfallClient::new(base_url, config.request_delay())?;

        // Wrap with caching layer (disabled if --no-cache)
        let client = Arc::new(CachedScryfallClient::new(
            raw_client,
            config.cache.clone(),
            !opts.no_cache,
        ));

        Ok(Self {
            config,
            client,
            format: opts.format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn opts() -> GlobalOptions {
        GlobalOptions {
            format: OutputFormat::Table,
            config: None,
            api_host: None,
            no_cache: false,
        }
    }

    #[test]
    fn test_context_errors_on_missing_explicit_config() {
        let mut opts = opts();
        opts.config = Some("/nonexistent/deckhand/config.yaml".to_string());

        let result = CommandContext::new(&opts);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("deckhand init"));
    }

    #[test]
    fn test_context_builds_from_config_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "request_delay_ms: 5\n").unwrap();

        let mut opts = opts();
        opts.config = Some(path.to_string_lossy().to_string());

        let ctx = CommandContext::new(&opts).unwrap();

        assert!(ctx.client.cache_enabled());
        assert_eq!(ctx.config.request_delay_ms, 5);
    }

    #[test]
    fn test_no_cache_disables_cache_layer() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "api_host: http://localhost:9\n").unwrap();

        let mut opts = opts();
        opts.config = Some(path.to_string_lossy().to_string());
        opts.no_cache = true;

        let ctx = CommandContext::new(&opts).unwrap();

        assert!(!ctx.client.cache_enabled());
    }
}
