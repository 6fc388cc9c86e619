//! Shared request-building helpers for the feature API modules.
//!
//! Percent-encoding here covers the two places the backend takes caller
//! input outside a JSON body: query strings and the urlencoded
//! password-reset form.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Percent-encode a single query or form value. Unreserved characters pass
/// through; everything else, including spaces, is `%XX`-escaped.
pub fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Build a `?key=value&...` query string. Empty with no pairs.
pub fn query_string(pairs: &[(&str, &str)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let joined = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", percent_encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{joined}")
}

/// Build an `application/x-www-form-urlencoded` body.
pub fn form_encode(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", percent_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
