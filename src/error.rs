//! Error types for the WooCommerce API client.
//!
//! This module provides a single error type covering every failure mode of
//! the client, from configuration mistakes caught at construction to
//! transport failures and non-2xx API responses.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for WooCommerce operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all WooCommerce API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required option was missing or invalid at construction.
    ///
    /// This is the only error raised synchronously before any request is
    /// attempted.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid input provided to a function.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// HTTP client construction or request building failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The API returned a non-2xx response.
    ///
    /// The raw response body is attached untouched; the client performs no
    /// retries and no recovery.
    #[error("API error: status={status}, code={code:?}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Optional machine-readable error code from the API
        code: Option<String>,
        /// Human-readable error message
        message: String,
        /// Raw response body for debugging
        body: Value,
        /// Time elapsed between dispatch and the response
        duration: Duration,
    },

    /// The network call itself failed (timeout, connection error).
    #[error("transport error after {duration:?}: {source}")]
    Transport {
        /// Underlying reqwest error
        #[source]
        source: reqwest::Error,
        /// Time elapsed between dispatch and the failure
        duration: Duration,
    },
}

impl Error {
    /// Returns the HTTP status code for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the elapsed request duration for errors that carry one.
    pub fn duration(&self) -> Option<Duration> {
        match self {
            Error::Api { duration, .. } | Error::Transport { duration, .. } => Some(*duration),
            _ => None,
        }
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (4xx response, invalid input, bad configuration).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from a response status and body.
    ///
    /// WooCommerce error payloads look like
    /// `{"code": "woocommerce_rest_term_invalid", "message": "...", "data": {...}}`.
    pub(crate) fn from_api_response(status: u16, body: Value, duration: Duration) -> Self {
        let code = body
            .get("code")
            .and_then(|c| c.as_str())
            .map(String::from);

        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown API error")
            .to_string();

        Error::Api {
            status,
            code,
            message,
            body,
            duration,
        }
    }
}
