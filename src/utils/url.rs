//! Request URL construction
//!
//! Query values are inserted verbatim: the service expects the legacy
//! unencoded format (`id=acme/record_123` keeps its bare slash), so no
//! percent-encoding is applied here. Values containing `&` or `=` will
//! corrupt the query string; callers that need reserved characters must
//! pre-encode them.

/// Build a request URL from an endpoint, an action path and query pairs.
///
/// Produces `{endpoint}/api/{action}?{k1}={v1}&{k2}={v2}...` with pairs
/// emitted in slice order.
pub fn build_url(endpoint: &str, action: &str, query: &[(String, String)]) -> String {
    let query_string = query
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}/api/{}?{}", endpoint, action, query_string)
}

/// Layer `extra` query pairs on top of `base`.
///
/// A key already present in `base` keeps its position but takes the extra
/// value; unknown keys are appended in `extra` order.
pub fn merge_query(
    mut base: Vec<(String, String)>,
    extra: &[(String, String)],
) -> Vec<(String, String)> {
    for (key, value) in extra {
        match base.iter_mut().find(|(existing, _)| existing == key) {
            Some(pair) => pair.1 = value.clone(),
            None => base.push((key.clone(), value.clone())),
        }
    }
    base
}
