//! Builder pattern implementation for creating Scraper instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use hwfetch::scraper::ScraperBuilder;
//! use std::path::PathBuf;
//!
//! let scraper = ScraperBuilder::new()
//!     .directory(PathBuf::from("./archive"))
//!     .build();
//! ```
//!
//! ## Pointing at a Different API Instance
//!
//! ```rust
//! use hwfetch::scraper::ScraperBuilder;
//! use std::time::Duration;
//!
//! let scraper = ScraperBuilder::new()
//!     .base_url("https://msapi.staging.example.com/api/v2")
//!     .timeout(Duration::from_secs(10))
//!     .build();
//! ```

use super::{config::ScraperConfig, scraper::Scraper};

use std::path::PathBuf;
use std::time::Duration;

/// A builder used to create a [`Scraper`].
///
/// ```rust
/// # fn main()  {
/// use hwfetch::scraper::ScraperBuilder;
///
/// let s = ScraperBuilder::new().directory("archive".into()).build();
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ScraperBuilder {
    config: ScraperConfig,
}

impl ScraperBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        ScraperBuilder::default()
    }

    /// Sets the base URL of the journal API, without a trailing slash.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Sets the directory the `homeworks` archive root is created under.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Sets the timeout applied to every request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Sets the proxy all requests are routed through.
    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Creates the [`Scraper`] with the specified options.
    pub fn build(self) -> Scraper {
        Scraper::new(self.config)
    }
}
