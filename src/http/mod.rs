//! HTTP module containing HTTP client functionality.
//!
//! This module provides HTTP client setup, configuration, middleware, and the
//! header sets the journal API expects. It handles client creation with
//! tracing, timeout, and proxy support.
//!
//! # Overview
//!
//! The HTTP module is organized into two main components:
//!
//! - [`client`] - HTTP client creation and middleware configuration
//! - [`headers`] - Header sets for login, authenticated, and download requests
//!
//! # Examples
//!
//! ## Creating an HTTP Client
//!
//! ```rust
//! use hwfetch::http::{create_http_client, HttpClientConfig};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpClientConfig {
//!     timeout: Duration::from_secs(15),
//!     proxy: None,
//!     headers: None,
//! };
//!
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Building Authenticated Headers
//!
//! ```rust
//! use hwfetch::http::headers::authenticated_headers;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let headers = authenticated_headers(Some("token-from-login"))?;
//! assert!(headers.contains_key(reqwest::header::AUTHORIZATION));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod headers;

pub use client::{create_http_client, HttpClientConfig};
pub use headers::{authenticated_headers, download_headers, login_headers, random_user_agent};
