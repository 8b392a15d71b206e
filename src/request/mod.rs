//! Internal request construction pipeline.
//!
//! Everything that has to be byte-exact lives here: parameter flattening,
//! query canonicalization, endpoint URL assembly, OAuth signing, and the
//! per-request choice of authentication mode. None of these symbols are
//! part of the public API except the [`Params`] alias.

pub(crate) mod oauth;
pub(crate) mod params;
pub(crate) mod query;
pub(crate) mod url;

pub use params::Params;

/// How a single request authenticates.
///
/// Evaluated fresh for every request from the immutable client
/// configuration; nothing persists between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuthStrategy {
    /// Plain HTTP: OAuth 1.0a-sign the request; the signed parameters
    /// become query parameters.
    OAuth,
    /// HTTPS with `query_string_auth`: pass `consumer_key` and
    /// `consumer_secret` as plain query parameters.
    QueryString,
    /// HTTPS default: credentials as HTTP Basic auth.
    Basic,
}

/// Pick the authentication mode for a request.
pub(crate) fn select_auth(is_https: bool, query_string_auth: bool) -> AuthStrategy {
    if !is_https {
        AuthStrategy::OAuth
    } else if query_string_auth {
        AuthStrategy::QueryString
    } else {
        AuthStrategy::Basic
    }
}
