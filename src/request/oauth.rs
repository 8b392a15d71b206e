//! OAuth 1.0a request signing.
//!
//! WooCommerce over plain HTTP authenticates with two-legged OAuth 1.0a:
//! there is no token/secret pair, only the consumer key and secret. The
//! one deviation from the common profile is the signature hash, which is
//! HMAC-SHA256 rather than HMAC-SHA1.
//!
//! Signatures are computed over the final canonical URL, so callers must
//! normalize the query string (see [`super::query`]) before signing.

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::Sha256;
use url::Url;

use super::query::percent_encode;
use crate::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

const SIGNATURE_METHOD: &str = "HMAC-SHA256";
const OAUTH_VERSION: &str = "1.0";
const NONCE_LEN: usize = 32;

/// Produce the OAuth 1.0a parameter set for a request.
///
/// Returns `oauth_consumer_key`, `oauth_nonce`, `oauth_signature_method`,
/// `oauth_timestamp`, `oauth_version` and `oauth_signature`, ready to be
/// attached as query parameters. Nonce and timestamp are freshly generated
/// on every call; a signed parameter set must never be reused.
pub(crate) fn sign(
    method: &str,
    url: &str,
    consumer_key: &str,
    consumer_secret: &str,
) -> Result<BTreeMap<String, String>> {
    sign_at(
        method,
        url,
        consumer_key,
        consumer_secret,
        &nonce(),
        Utc::now().timestamp(),
    )
}

/// Sign with an explicit nonce and timestamp. Split out so the signature
/// computation is deterministic under test.
fn sign_at(
    method: &str,
    url: &str,
    consumer_key: &str,
    consumer_secret: &str,
    nonce: &str,
    timestamp: i64,
) -> Result<BTreeMap<String, String>> {
    let mut oauth: BTreeMap<String, String> = BTreeMap::new();
    oauth.insert("oauth_consumer_key".into(), consumer_key.into());
    oauth.insert("oauth_nonce".into(), nonce.into());
    oauth.insert("oauth_signature_method".into(), SIGNATURE_METHOD.into());
    oauth.insert("oauth_timestamp".into(), timestamp.to_string());
    oauth.insert("oauth_version".into(), OAUTH_VERSION.into());

    let base = signature_base_string(method, url, &oauth)?;
    oauth.insert(
        "oauth_signature".into(),
        hmac_sha256_base64(consumer_secret, &base)?,
    );
    Ok(oauth)
}

/// Assemble the OAuth 1.0a signature base string:
/// `METHOD&percent(baseUrl)&percent(sortedParamString)`.
///
/// The parameter string combines the URL's query parameters with the OAuth
/// parameters (signature excluded), each key and value percent-encoded,
/// sorted ascending, and joined as `k=v` pairs with `&`.
fn signature_base_string(
    method: &str,
    url: &str,
    oauth: &BTreeMap<String, String>,
) -> Result<String> {
    let parsed = Url::parse(url)?;

    let mut pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| (percent_encode(&k), percent_encode(&v)))
        .collect();
    pairs.extend(
        oauth
            .iter()
            .map(|(k, v)| (percent_encode(k), percent_encode(v))),
    );
    pairs.sort();

    let param_string = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let base_url = url.split('?').next().unwrap_or(url);

    Ok(format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(base_url),
        percent_encode(&param_string)
    ))
}

/// HMAC-SHA256 over `text`, keyed per OAuth 1.0a: the percent-encoded
/// consumer secret followed by `&` and an empty token secret.
fn hmac_sha256_base64(consumer_secret: &str, text: &str) -> Result<String> {
    let key = format!("{}&", percent_encode(consumer_secret));
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .map_err(|e| Error::InvalidInput(format!("invalid HMAC key: {}", e)))?;
    mac.update(text.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

/// Random alphanumeric nonce, one per request.
fn nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}
