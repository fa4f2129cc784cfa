//! Error handling for the hwfetch library.
//!
//! This module provides centralized error handling with comprehensive error types
//! that can occur while talking to the journal API or archiving files. All errors
//! implement the standard Error trait and provide detailed context about failures.

use reqwest::StatusCode;
use std::io;
use thiserror::Error;

/// Errors that can happen when using hwfetch.
///
/// Every failure surfaces to the immediate caller; nothing is swallowed or
/// converted to a default value. Whether to continue with the next homework
/// record after a per-file failure is the caller's decision.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// This variant captures internal errors that don't fit into other
    /// categories, such as out-of-range status filter codes.
    #[error("Internal error: {0}")]
    Internal(String),

    /// The login request came back with a status outside 200-299.
    ///
    /// Fatal to the session. The library never retries a failed login.
    #[error("Authentication failed with status {0}")]
    Authentication(StatusCode),

    /// A listing or download request came back with a non-success status.
    ///
    /// Fatal to that operation only; other records on the page are unaffected.
    #[error("Request failed with status {0}")]
    Request(StatusCode),

    /// The `Content-Disposition` header of a file download was absent or
    /// malformed, so no file extension could be inferred.
    ///
    /// The message carries the offending header value (or its absence).
    #[error("Cannot infer file extension: {0}")]
    ExtensionParse(String),

    /// Error from the underlying URL parser or the expected URL format.
    ///
    /// Returned when a record's attachment URL cannot be parsed as an
    /// HTTP/HTTPS download link.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The session token cannot be represented as an HTTP header value.
    #[error("Invalid header value")]
    InvalidHeader {
        #[from]
        source: reqwest::header::InvalidHeaderValue,
    },

    /// I/O Error.
    ///
    /// This variant wraps standard I/O errors that can occur during directory
    /// or file creation, such as missing permissions or a full disk.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    ///
    /// This variant wraps HTTP client errors from the reqwest library, including
    /// network failures and request/response processing errors.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error from the reqwest middleware stack.
    #[error("Reqwest middleware error")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },
}

/// Result type alias for operations that can fail with a hwfetch error.
pub type Result<T> = std::result::Result<T, Error>;
