//! The `resultsPage` envelope every Songkick JSON response is wrapped in.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use songkick_client::{Body, Response};

use crate::error::{Error, ErrorKind, Result};

/// Top-level `resultsPage` object.
///
/// `results` is left as a `serde_json::Value` unless a typed shape is asked
/// for.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsPage<T = serde_json::Value> {
    /// `"ok"` or `"error"`.
    pub status: String,
    /// Missing on error pages.
    pub results: Option<T>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub total_entries: Option<u64>,
    #[serde(default)]
    pub error: Option<ApiErrorMessage>,
}

impl<T> ResultsPage<T> {
    /// Returns true if the service reported success.
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    /// Error message reported by the service, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }
}

/// Error object inside an error `resultsPage`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorMessage {
    pub message: String,
}

#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(rename = "resultsPage")]
    results_page: ResultsPage<T>,
}

/// Extension trait for reading the `resultsPage` envelope off a response.
pub trait ResultsPageExt {
    /// Deserialize the body's `resultsPage`, typing `results` as `T`.
    fn results_page<T: DeserializeOwned>(&self) -> Result<ResultsPage<T>>;
}

impl ResultsPageExt for Response {
    fn results_page<T: DeserializeOwned>(&self) -> Result<ResultsPage<T>> {
        let envelope: Envelope<T> = match self.body() {
            Some(Body::Json(value)) => Envelope::deserialize(value)?,
            Some(Body::Text(text)) => serde_json::from_str(text)?,
            None => {
                return Err(Error::new(ErrorKind::Json(format!(
                    "empty response body (HTTP {})",
                    self.status()
                ))))
            }
        };
        Ok(envelope.results_page)
    }
}
