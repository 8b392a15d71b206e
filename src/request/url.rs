//! Endpoint URL assembly.

use url::Url;

use super::params::{flatten, Params};
use super::query::normalize_query;
use crate::{Error, Result};

/// Build the absolute URL for an endpoint: `base/prefix/version/endpoint`.
///
/// Exactly one `/` separates the base URL from the API prefix, whether or
/// not the base already ends in one. An explicitly configured port is
/// spliced in right after the hostname.
///
/// For plain-HTTP URLs the request parameters are folded into a canonical
/// query string here, because the OAuth signature is computed over the
/// final URL. HTTPS URLs are returned untouched; their parameters travel
/// as transport-level query parameters alongside the credentials instead.
pub(crate) fn build_endpoint_url(
    base: &str,
    prefix: &str,
    version: &str,
    endpoint: &str,
    port: Option<u16>,
    is_https: bool,
    params: &Params,
) -> Result<String> {
    let mut api = format!(
        "{}/{}/{}/{}",
        base.trim_end_matches('/'),
        prefix,
        version,
        endpoint
    );

    if let Some(port) = port {
        let parsed = Url::parse(&api)?;
        let host = parsed
            .host_str()
            .ok_or_else(|| Error::InvalidInput(format!("URL has no host: {}", api)))?
            .to_string();
        api = api.replacen(&host, &format!("{}:{}", host, port), 1);
    }

    if is_https {
        Ok(api)
    } else {
        normalize_query(&api, &flatten(params))
    }
}
