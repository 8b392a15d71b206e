//! Request parameter flattening.
//!
//! The WooCommerce REST API expresses dictionary-valued filters with
//! bracketed keys (`attribute[color]=blue`). Callers supply parameters as a
//! JSON object, nested at most one level; this module rewrites nested
//! entries into that bracketed form before canonicalization.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result};

/// Request parameters, possibly nested one level.
///
/// Build one with [`serde_json::json!`]:
///
/// ```
/// let params = serde_json::json!({
///     "per_page": 5,
///     "filter": { "sku": "WC-001" },
/// });
/// let params = params.as_object().cloned().unwrap();
/// # let _: woocommerce_rs::Params = params;
/// ```
pub type Params = serde_json::Map<String, Value>;

/// Flatten a parameter map into string key/value pairs.
///
/// Entries whose value is an object are expanded exactly one level into
/// `parent[child]` keys. Anything deeper is passed through as an opaque
/// JSON-serialized value, mirroring the API's query conventions. Scalars
/// keep their original key. An empty input yields an empty map.
pub(crate) fn flatten(params: &Params) -> BTreeMap<String, String> {
    let mut flat = BTreeMap::new();

    for (key, value) in params {
        match value {
            Value::Object(children) => {
                for (child_key, child_value) in children {
                    flat.insert(format!("{}[{}]", key, child_key), scalar(child_value));
                }
            }
            other => {
                flat.insert(key.clone(), scalar(other));
            }
        }
    }

    flat
}

/// Render a JSON value as its query-string text.
///
/// Strings are used verbatim (no quotes); everything else uses its JSON
/// serialization.
fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Convert a serializable query struct into a [`Params`] map.
///
/// Used by the resource services so their typed query structs flow through
/// the same flattening and canonicalization path as raw parameters.
pub(crate) fn to_params<T: Serialize>(query: &T) -> Result<Params> {
    match serde_json::to_value(query)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Params::new()),
        other => Err(Error::InvalidInput(format!(
            "query must serialize to an object, got {}",
            other
        ))),
    }
}
