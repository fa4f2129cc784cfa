//! HTTP client setup and middleware configuration.
//!
//! This module provides HTTP client creation with tracing middleware, an
//! explicit request timeout, optional proxy support, and default headers.
//! Every request the library issues goes through a client built here.
//!
//! A hung connection would otherwise block a page archive indefinitely, so
//! the timeout is part of the configuration rather than an afterthought.
//!
//! # Examples
//!
//! ## Basic Client Creation
//!
//! ```rust
//! use hwfetch::http::{create_http_client, HttpClientConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpClientConfig::default();
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Client with Custom Configuration
//!
//! ```rust
//! use hwfetch::http::{create_http_client, HttpClientConfig};
//! use reqwest::header::{HeaderMap, USER_AGENT};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut headers = HeaderMap::new();
//! headers.insert(USER_AGENT, "hwfetch/0.2".parse()?);
//!
//! let config = HttpClientConfig {
//!     timeout: Duration::from_secs(10),
//!     proxy: None,
//!     headers: Some(headers),
//! };
//!
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

use reqwest::{header::HeaderMap, Proxy};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use std::time::Duration;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for HTTP client setup.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Timeout applied to every request, connect included.
    pub timeout: Duration,
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
    /// Default headers to include with all requests.
    pub headers: Option<HeaderMap>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            proxy: None,
            headers: None,
        }
    }
}

/// Creates an HTTP client with middleware configuration.
///
/// This function sets up a reqwest client with:
/// - Tracing middleware for request/response logging
/// - An explicit per-request timeout
/// - Optional proxy support
/// - Optional default headers
///
/// There is deliberately no retry middleware: a failed login, listing, or
/// download surfaces immediately and the caller decides what happens next.
///
/// # Example
///
/// ```rust
/// use hwfetch::http::{create_http_client, HttpClientConfig};
///
/// let config = HttpClientConfig::default();
/// let client = create_http_client(config).unwrap();
/// ```
pub fn create_http_client(
    config: HttpClientConfig,
) -> Result<ClientWithMiddleware, reqwest::Error> {
    let mut inner_client_builder = reqwest::Client::builder().timeout(config.timeout);

    if let Some(proxy) = config.proxy {
        inner_client_builder = inner_client_builder.proxy(proxy);
    }

    if let Some(headers) = config.headers {
        inner_client_builder = inner_client_builder.default_headers(headers);
    }

    let inner_client = inner_client_builder.build()?;

    // Trace HTTP requests. See the tracing crate to make use of these traces.
    let client = ClientBuilder::new(inner_client)
        .with(TracingMiddleware::default())
        .build();

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

    #[test]
    fn test_default_config() {
        let config = HttpClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.proxy.is_none());
        assert!(config.headers.is_none());
    }

    #[test]
    fn test_create_http_client_default() {
        let config = HttpClientConfig::default();
        let client = create_http_client(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_create_http_client_with_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("test-agent"));

        let config = HttpClientConfig {
            timeout: Duration::from_secs(5),
            proxy: None,
            headers: Some(headers),
        };

        let client = create_http_client(config);
        assert!(client.is_ok());
    }
}
