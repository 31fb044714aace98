//! Helpers for handling caller-supplied values and secrets.
//!
//! ## URL Path Segments
//!
//! Identifiers that end up inside a request path MUST be encoded so they
//! cannot break out of their segment:
//!
//! ```rust
//! use songkick_client::security::url;
//!
//! let segment = url::encode_segment("../venues/1");
//! assert_eq!(segment, "..%2Fvenues%2F1");
//! ```
//!
//! ## Secrets
//!
//! The API key travels in the query string, so URLs are never logged as-is.
//! Use [`redact_query_param`] when a full URL has to be shown.

/// URL encoding utilities.
pub mod url {
    /// Percent-encode a value for use as a single path segment.
    #[must_use]
    pub fn encode_segment(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }
}

/// Replace the value of every `name=` query parameter in `url` with
/// `[REDACTED]`.
#[must_use]
pub fn redact_query_param(url: &::url::Url, name: &str) -> String {
    let mut redacted = url.clone();
    if url.query().is_none() {
        return redacted.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == name { "[REDACTED]".into() } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();

    redacted.query_pairs_mut().clear().extend_pairs(&pairs);
    redacted.to_string()
}
