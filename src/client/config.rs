//! Client configuration options.

use std::time::Duration;

use reqwest::header::HeaderMap;

/// Configuration for the WooCommerce client.
///
/// Credentials and the store URL are passed to the client constructor;
/// everything else lives here with sensible defaults.
///
/// # Example
///
/// ```
/// use woocommerce_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_version("wc/v2")
///     .with_timeout(Duration::from_secs(60))
///     .with_query_string_auth(true);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// WP REST API path prefix, `wp-json` unless the site rewrote it
    pub wp_api_prefix: String,
    /// WooCommerce API version segment
    pub version: String,
    /// Charset advertised in the request `Content-Type`
    pub encoding: String,
    /// On HTTPS, send credentials as query parameters instead of Basic auth.
    ///
    /// Some servers strip the `Authorization` header; this is the standard
    /// WooCommerce workaround.
    pub query_string_auth: bool,
    /// Explicit port, spliced into the URL after the hostname
    pub port: Option<u16>,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Extra headers merged into every request, last.
    ///
    /// This is the transport escape hatch: anything inserted here
    /// overrides the headers the client would otherwise send.
    pub default_headers: HeaderMap,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            wp_api_prefix: "wp-json".to_string(),
            version: "wc/v3".to_string(),
            encoding: "utf-8".to_string(),
            query_string_auth: false,
            port: None,
            timeout: Duration::from_secs(30),
            user_agent: format!("WooCommerce API Client-Rust/{}", env!("CARGO_PKG_VERSION")),
            default_headers: HeaderMap::new(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the WP REST API path prefix.
    pub fn with_wp_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.wp_api_prefix = prefix.into();
        self
    }

    /// Set the WooCommerce API version segment.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the charset used in the request `Content-Type`.
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    /// Send credentials as query parameters on HTTPS instead of Basic auth.
    pub fn with_query_string_auth(mut self, enabled: bool) -> Self {
        self.query_string_auth = enabled;
        self
    }

    /// Set an explicit port for the store URL.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set extra headers merged into every request.
    pub fn with_default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = headers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.wp_api_prefix, "wp-json");
        assert_eq!(config.version, "wc/v3");
        assert_eq!(config.encoding, "utf-8");
        assert!(!config.query_string_auth);
        assert!(config.port.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("WooCommerce API Client-Rust/"));
    }

    #[test]
    fn test_builder_chain() {
        let config = ClientConfig::new()
            .with_wp_api_prefix("wp-rest")
            .with_version("wc/v1")
            .with_port(8443)
            .with_query_string_auth(true)
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.wp_api_prefix, "wp-rest");
        assert_eq!(config.version, "wc/v1");
        assert_eq!(config.port, Some(8443));
        assert!(config.query_string_auth);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
