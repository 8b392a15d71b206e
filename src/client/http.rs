//! HTTP client implementation for the WooCommerce REST API.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::api::{CustomersService, OrdersService, ProductsService};
use crate::request::params::flatten;
use crate::request::url::build_endpoint_url;
use crate::request::{oauth, select_auth, AuthStrategy, Params};
use crate::{Error, Result};

use super::config::ClientConfig;

/// The main client for interacting with a WooCommerce store.
///
/// The client holds the immutable configuration and a shared HTTP
/// transport; individual calls carry no state of their own and may be
/// issued concurrently.
///
/// # Example
///
/// ```no_run
/// use woocommerce_rs::WooCommerceClient;
///
/// # async fn example() -> woocommerce_rs::Result<()> {
/// let client = WooCommerceClient::new(
///     "https://shop.example.com",
///     "ck_XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
///     "cs_XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
/// )?;
///
/// let response = client.get("products", None).await?;
/// println!("status={} in {:?}", response.status, response.duration);
/// # Ok(())
/// # }
/// ```
pub struct WooCommerceClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) is_https: bool,
    pub(crate) consumer_key: String,
    pub(crate) consumer_secret: SecretString,
    pub(crate) config: ClientConfig,
}

impl WooCommerceClient {
    /// Create a new client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when `url`, `consumer_key` or
    /// `consumer_secret` is empty, and [`Error::UrlParse`] when the store
    /// URL does not parse. No network activity happens here.
    pub fn new(
        url: impl Into<String>,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(url, consumer_key, consumer_secret, ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    pub fn with_config(
        url: impl Into<String>,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let base_url = url.into();
        let consumer_key = consumer_key.into();
        let consumer_secret = consumer_secret.into();

        if base_url.is_empty() {
            return Err(Error::Config("url is required".to_string()));
        }
        if consumer_key.is_empty() {
            return Err(Error::Config("consumer_key is required".to_string()));
        }
        if consumer_secret.is_empty() {
            return Err(Error::Config("consumer_secret is required".to_string()));
        }

        let parsed = Url::parse(&base_url)?;
        let is_https = parsed.scheme() == "https";

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                is_https,
                consumer_key,
                consumer_secret: SecretString::from(consumer_secret),
                config,
            }),
        })
    }

    /// Get the products service.
    pub fn products(&self) -> ProductsService {
        ProductsService::new(self.inner.clone())
    }

    /// Get the orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// Get the customers service.
    pub fn customers(&self) -> CustomersService {
        CustomersService::new(self.inner.clone())
    }

    /// Issue a GET request against an endpoint.
    pub async fn get(&self, endpoint: &str, params: Option<Params>) -> Result<ApiResponse> {
        self.inner
            .dispatch(Method::GET, endpoint, None, params.unwrap_or_default())
            .await
    }

    /// Issue a POST request with a JSON body.
    pub async fn post<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
        params: Option<Params>,
    ) -> Result<ApiResponse> {
        let body = serde_json::to_value(body)?;
        self.inner
            .dispatch(Method::POST, endpoint, Some(&body), params.unwrap_or_default())
            .await
    }

    /// Issue a PUT request with a JSON body.
    pub async fn put<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
        params: Option<Params>,
    ) -> Result<ApiResponse> {
        let body = serde_json::to_value(body)?;
        self.inner
            .dispatch(Method::PUT, endpoint, Some(&body), params.unwrap_or_default())
            .await
    }

    /// Issue a DELETE request against an endpoint.
    pub async fn delete(&self, endpoint: &str, params: Option<Params>) -> Result<ApiResponse> {
        self.inner
            .dispatch(Method::DELETE, endpoint, None, params.unwrap_or_default())
            .await
    }

    /// Issue an OPTIONS request against an endpoint.
    pub async fn options(&self, endpoint: &str, params: Option<Params>) -> Result<ApiResponse> {
        self.inner
            .dispatch(Method::OPTIONS, endpoint, None, params.unwrap_or_default())
            .await
    }

    /// The configured store URL.
    pub fn url(&self) -> &str {
        &self.inner.base_url
    }

    /// Whether the store URL uses HTTPS.
    pub fn is_https(&self) -> bool {
        self.inner.is_https
    }
}

impl ClientInner {
    /// Build the outgoing request: endpoint URL, auth branch, headers,
    /// serialized body. Split from [`dispatch`](Self::dispatch) so the
    /// assembled request can be inspected without network access.
    pub(crate) fn build_request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
        params: &Params,
    ) -> Result<reqwest::Request> {
        let url = build_endpoint_url(
            &self.base_url,
            &self.config.wp_api_prefix,
            &self.config.version,
            endpoint,
            self.config.port,
            self.is_https,
            params,
        )?;

        let mut builder = self.http.request(method.clone(), &url);

        match select_auth(self.is_https, self.config.query_string_auth) {
            AuthStrategy::OAuth => {
                // The caller params are already canonicalized into `url`;
                // only the signed parameter set is appended here.
                let signed = oauth::sign(
                    method.as_str(),
                    &url,
                    &self.consumer_key,
                    self.consumer_secret.expose_secret(),
                )?;
                builder = builder.query(&signed);
            }
            AuthStrategy::QueryString => {
                builder = builder.query(&flatten(params)).query(&[
                    ("consumer_key", self.consumer_key.as_str()),
                    ("consumer_secret", self.consumer_secret.expose_secret()),
                ]);
            }
            AuthStrategy::Basic => {
                builder = builder.query(&flatten(params)).basic_auth(
                    &self.consumer_key,
                    Some(self.consumer_secret.expose_secret()),
                );
            }
        }

        builder = builder.header(ACCEPT, "application/json");

        if let Some(body) = body {
            builder = builder
                .header(
                    CONTENT_TYPE,
                    format!("application/json;charset={}", self.config.encoding),
                )
                .body(serde_json::to_string(body)?);
        }

        // Caller-supplied overrides win over everything above.
        if !self.config.default_headers.is_empty() {
            builder = builder.headers(self.config.default_headers.clone());
        }

        builder.build().map_err(Error::from)
    }

    /// Execute a request and wrap the outcome with timing metadata.
    pub(crate) async fn dispatch(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
        params: Params,
    ) -> Result<ApiResponse> {
        let request = self.build_request(method.clone(), endpoint, body, &params)?;
        let url = request.url().clone();

        let started_at = Utc::now();
        let started = Instant::now();
        tracing::debug!(%method, %url, "dispatching request");

        let response = self.http.execute(request).await.map_err(|source| {
            Error::Transport {
                source,
                duration: started.elapsed(),
            }
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await.map_err(|source| Error::Transport {
            source,
            duration: started.elapsed(),
        })?;
        let duration = started.elapsed();

        let body: Value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        tracing::debug!(
            status = status.as_u16(),
            elapsed_ms = duration.as_millis() as u64,
            "request completed"
        );

        if status.is_success() {
            Ok(ApiResponse {
                status: status.as_u16(),
                headers,
                body,
                started_at,
                duration,
            })
        } else {
            Err(Error::from_api_response(status.as_u16(), body, duration))
        }
    }

    /// GET an endpoint and deserialize the body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Option<Params>,
    ) -> Result<T> {
        self.dispatch(Method::GET, endpoint, None, params.unwrap_or_default())
            .await?
            .json()
    }

    /// POST a body to an endpoint and deserialize the response.
    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        self.dispatch(Method::POST, endpoint, Some(&body), Params::new())
            .await?
            .json()
    }

    /// PUT a body to an endpoint and deserialize the response.
    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        self.dispatch(Method::PUT, endpoint, Some(&body), Params::new())
            .await?
            .json()
    }

    /// DELETE an endpoint and deserialize the response.
    pub(crate) async fn delete_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Option<Params>,
    ) -> Result<T> {
        self.dispatch(Method::DELETE, endpoint, None, params.unwrap_or_default())
            .await?
            .json()
    }
}

/// A completed API response with timing metadata attached.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code (always 2xx; non-2xx surfaces as [`Error::Api`])
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body, or `Null` when the response was empty
    pub body: Value,
    /// Wall-clock time the request was dispatched
    pub started_at: DateTime<Utc>,
    /// Time elapsed between dispatch and the full response
    pub duration: Duration,
}

impl ApiResponse {
    /// Deserialize the response body into a concrete type.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.body.clone()).map_err(Error::from)
    }

    /// Total matching items, from the `X-WP-Total` header.
    pub fn total_items(&self) -> Option<u64> {
        self.header_u64("x-wp-total")
    }

    /// Total pages at the current page size, from `X-WP-TotalPages`.
    pub fn total_pages(&self) -> Option<u64> {
        self.header_u64("x-wp-totalpages")
    }

    fn header_u64(&self, name: &str) -> Option<u64> {
        self.headers.get(name)?.to_str().ok()?.parse().ok()
    }
}

impl Clone for WooCommerceClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for WooCommerceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WooCommerceClient")
            .field("url", &self.inner.base_url)
            .field("consumer_key", &self.inner.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .field("config", &self.inner.config)
            .finish()
    }
}
