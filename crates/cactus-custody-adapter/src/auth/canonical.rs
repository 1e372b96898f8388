/*
[INPUT]:  Query parameters, request fields and body bytes
[OUTPUT]: Deterministic canonical strings for request signing
[POS]:    Auth layer - canonical request encoding shared by both schemes
[UPDATE]: When the server changes its signature string layout
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use sha2::{Digest, Sha256};

/// Media type sent in both `Accept` and `Content-Type`
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Encode query parameters as `k1=v1&k2=v2`, keys sorted ascending.
///
/// Values are inserted verbatim. The server recomputes the signature over the
/// raw text, so percent-encoding here would break verification.
/// An empty input yields an empty string; callers must then omit the `?`.
pub fn encode_query<I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    sorted_pairs(params)
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Encode parameters in the legacy display form `{k1=[v1], k2=[v2]}`.
///
/// Used in request logs. It plays no part in the signature.
pub fn encode_display_params<I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let body = sorted_pairs(params)
        .iter()
        .map(|(key, value)| format!("{key}=[{value}]"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{body}}}")
}

/// Base64 of the SHA-256 digest of a request body
pub fn body_hash(body: &[u8]) -> String {
    BASE64.encode(Sha256::digest(body))
}

/// Build the newline-joined string the server verifies signatures against.
///
/// `body` is `None` for requests without a body, which leaves the hash line
/// blank rather than hashing an empty payload. `encoded_query` is appended
/// after a `?` only when it is non-empty.
pub fn build_canonical_string(
    method: &str,
    body: Option<&[u8]>,
    api_key: &str,
    nonce: &str,
    path: &str,
    encoded_query: &str,
    timestamp: &str,
) -> String {
    let body_hash = body.map(body_hash).unwrap_or_default();
    let canonical = format!(
        "{method}\n{JSON_MEDIA_TYPE}\n{body_hash}\n{JSON_MEDIA_TYPE}\n{timestamp}\nx-api-key:{api_key}\nx-api-nonce:{nonce}\n{path}"
    );

    if encoded_query.is_empty() {
        canonical
    } else {
        format!("{canonical}?{encoded_query}")
    }
}

fn sorted_pairs<I, K, V>(params: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut pairs: Vec<(String, String)> = params
        .into_iter()
        .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    pairs
}
