//! Configuration structures and defaults for the scraper.
//!
//! This module provides the configuration used by the [`Scraper`] and
//! [`ScraperBuilder`]. Defaults point at the production journal API, archive
//! into the current working directory, and apply the default HTTP timeout.
//!
//! [`Scraper`]: super::scraper::Scraper
//! [`ScraperBuilder`]: super::builder::ScraperBuilder

use crate::http::client::DEFAULT_TIMEOUT_SECS;

use std::env::current_dir;
use std::path::PathBuf;
use std::time::Duration;

/// Base URL of the production journal API.
pub const API_BASE_URL: &str = "https://msapi.top-academy.ru/api/v2";

/// Configuration structure for the scraper.
#[derive(Clone)]
pub struct ScraperConfig {
    /// Base URL of the journal API, without a trailing slash.
    pub base_url: String,
    /// Directory the `homeworks` archive root is created under.
    pub directory: PathBuf,
    /// Timeout applied to every request.
    pub timeout: Duration,
    /// Optional proxy configuration.
    pub proxy: Option<reqwest::Proxy>,
}

impl std::fmt::Debug for ScraperConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScraperConfig")
            .field("base_url", &self.base_url)
            .field("directory", &self.directory)
            .field("timeout", &self.timeout)
            .field("proxy", &self.proxy.is_some())
            .finish()
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            directory: current_dir().unwrap_or_default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            proxy: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScraperConfig::default();
        assert_eq!(config.base_url, API_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.proxy.is_none());
    }
}
