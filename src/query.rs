use indexmap::IndexMap;
use url::form_urlencoded::byte_serialize;

/// Request parameters in insertion order. `None` stands for an absent value
/// and encodes as the empty string.
///
/// Output order of every function below is the map's insertion order, which
/// is what makes the cache keys stable across identical call sites.
pub type Params = IndexMap<String, Option<String>>;

fn push_pair(out: &mut String, key: &str, value: Option<&str>) {
    out.push_str(key);
    out.push('=');
    out.extend(byte_serialize(value.unwrap_or_default().as_bytes()));
}

/// Serialize parameters as `key=value&key=value`.
///
/// Values are form-encoded (UTF-8, space becomes `+`); keys are emitted as
/// given. Empty map yields the empty string; there is never a trailing `&`.
#[must_use]
pub fn to_query_string(params: &Params) -> String {
    let mut out = String::new();
    for (key, value) in params {
        if !out.is_empty() {
            out.push('&');
        }
        push_pair(&mut out, key, value.as_deref());
    }
    out
}

/// Append parameters to a base URL as a query string.
///
/// Returns `url` unchanged when the map is empty, with no dangling `?`.
#[must_use]
pub fn append_params(url: &str, params: &Params) -> String {
    cache_key_url(url, params, &[])
}

/// Build a cache-key URL: the base URL plus the encoded parameters, with
/// entries named in `variable_keys` left out.
///
/// Variable keys are the per-request values (timestamps, nonces, signatures)
/// that would otherwise make two identical requests produce different cache
/// keys. If every entry is excluded the base URL comes back unchanged.
#[must_use]
pub fn cache_key_url(url: &str, params: &Params, variable_keys: &[&str]) -> String {
    let mut out = String::from(url);
    let mut first = true;
    for (key, value) in params {
        if variable_keys.contains(&key.as_str()) {
            continue;
        }
        out.push(if first { '?' } else { '&' });
        first = false;
        push_pair(&mut out, key, value.as_deref());
    }
    out
}
