//! Query string canonicalization.
//!
//! OAuth 1.0a signs the exact URL that goes over the wire, so the query
//! string must be assembled in a canonical form before signing: merged,
//! sorted by key, and percent-encoded with the same rules the signature
//! base string uses. The one deviation from strict RFC 3986 escaping is
//! that `[` and `]` stay literal, because WooCommerce expects bracketed
//! dictionary keys (`attribute[color]`) verbatim.

use std::collections::BTreeMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::Result;

/// RFC 3986 escaping: everything but unreserved characters is encoded.
///
/// This is the character set OAuth 1.0a mandates for both the query string
/// and the signature base string.
pub(crate) const RFC3986: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string with the OAuth-compatible character set.
pub(crate) fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, RFC3986).to_string()
}

/// Merge `extra` parameters into `url`'s query string and canonicalize.
///
/// Existing query parameters are kept, with `extra` winning on key
/// collision. Keys are emitted in ascending lexicographic order, each pair
/// percent-encoded, joined by `&`. When the merge produces no parameters
/// and the URL carried no query string, the URL is returned unchanged (no
/// trailing `?`).
///
/// Canonicalization is pure: the same URL and parameters always produce
/// the same output byte-for-byte.
pub(crate) fn normalize_query(url: &str, extra: &BTreeMap<String, String>) -> Result<String> {
    let parsed = Url::parse(url)?;

    let mut merged: BTreeMap<String, String> = parsed
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    merged.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));

    if merged.is_empty() && !url.contains('?') {
        return Ok(url.to_string());
    }

    let query = merged
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
        .replace("%5B", "[")
        .replace("%5D", "]");

    let base = url.split('?').next().unwrap_or(url);
    Ok(format!("{}?{}", base, query))
}
