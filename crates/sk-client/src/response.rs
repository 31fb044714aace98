//! HTTP response envelope with content negotiation.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorKind, Result};

/// Media types whose bodies are decoded as JSON.
const JSON_MEDIA_TYPES: [&str; 3] = [
    "application/json",
    "application/hal+json",
    "application/problem+json",
];

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Body of a JSON-family content type, already parsed.
    Json(serde_json::Value),
    /// Any other body, as received.
    Text(String),
}

/// Status, headers and decoded body of a completed request.
///
/// Non-2xx responses are still `Response`s: the status is forwarded, never
/// interpreted.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: HashMap<String, String>,
    body: Option<Body>,
}

impl Response {
    /// Build a response from its raw parts.
    ///
    /// Header names are lower-cased and repeated headers joined. An empty
    /// `raw_body` becomes `None`; otherwise the body is parsed as JSON when
    /// the content type is one of the JSON media types and kept as text when
    /// it is not.
    pub fn from_parts(
        status: u16,
        headers: impl IntoIterator<Item = (String, String)>,
        raw_body: String,
    ) -> Result<Self> {
        let mut merged: HashMap<String, String> = HashMap::new();
        for (name, value) in headers {
            // Repeated headers are folded into one comma-separated value.
            match merged.entry(name.to_ascii_lowercase()) {
                Entry::Occupied(mut entry) => {
                    let current = entry.get_mut();
                    current.push_str(", ");
                    current.push_str(&value);
                }
                Entry::Vacant(entry) => {
                    entry.insert(value);
                }
            }
        }
        let headers = merged;

        let body = if raw_body.is_empty() {
            None
        } else if is_json_content_type(headers.get("content-type").map(String::as_str)) {
            Some(Body::Json(serde_json::from_str(&raw_body)?))
        } else {
            Some(Body::Text(raw_body))
        };

        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get a header value (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// All headers, keyed by lower-cased name.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// The decoded body, `None` when the response was empty.
    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Take ownership of the decoded body.
    pub fn into_body(self) -> Option<Body> {
        self.body
    }

    /// The parsed body, if it was delivered as JSON.
    pub fn json(&self) -> Option<&serde_json::Value> {
        match &self.body {
            Some(Body::Json(value)) => Some(value),
            _ => None,
        }
    }

    /// The raw body, if it was delivered as text.
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            Some(Body::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Deserialize the body into `T`.
    ///
    /// Text bodies are parsed as JSON too, for servers that send JSON under
    /// a generic content type.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        match &self.body {
            Some(Body::Json(value)) => T::deserialize(value).map_err(Into::into),
            Some(Body::Text(text)) => serde_json::from_str(text).map_err(Into::into),
            None => Err(Error::new(ErrorKind::Json(format!(
                "empty response body (HTTP {})",
                self.status
            )))),
        }
    }
}

/// Returns true if `content_type` names a JSON media type.
///
/// Parameters such as `charset` are ignored, and so is case.
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    let Some(content_type) = content_type else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim();
    JSON_MEDIA_TYPES
        .iter()
        .any(|media_type| essence.eq_ignore_ascii_case(media_type))
}
