//! Songkick API client.
//!
//! `Songkick` holds the API key and an `SkHttpClient` from
//! `songkick-client`, and exposes one method per endpoint. Endpoints live in
//! the submodules, grouped by resource.

use tracing::instrument;

use songkick_client::{
    ClientConfig, RequestBuilder, Response, SkHttpClient, API_KEY_PARAM, CLIENT_VERSION,
};

use crate::error::{Error, ErrorKind, Result};
use crate::types::{date_range, page_or_default, per_page_or_default, DATE_FORMAT};

mod artists;
mod events;
mod venues;

/// Environment variable read by [`Songkick::from_env`].
pub const API_KEY_ENV: &str = "SONGKICK_API_KEY";

/// Songkick API client.
///
/// Every endpoint method issues exactly one GET request and returns the full
/// response envelope: status, headers and the content-negotiated body.
/// Non-2xx statuses and error `resultsPage`s are returned as `Ok`.
///
/// ## Security
///
/// The API key is redacted in Debug output and never recorded in tracing
/// spans.
///
/// # Example
///
/// ```rust,ignore
/// use songkick_rest::{EventSearchOptions, Location, Songkick};
///
/// let client = Songkick::new("my-api-key")?;
///
/// let response = client
///     .find_events(&Location::MetroArea(24426), &EventSearchOptions::default())
///     .await?;
///
/// println!("{}", response.json().unwrap()["resultsPage"]["totalEntries"]);
/// ```
#[derive(Clone)]
pub struct Songkick {
    http: SkHttpClient,
    api_key: String,
}

impl std::fmt::Debug for Songkick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Songkick")
            .field("base_url", &self.http.config().base_url().as_str())
            .field("api_key", &"[REDACTED]")
            .field("api_version", &self.api_version())
            .finish_non_exhaustive()
    }
}

impl Songkick {
    /// Create a client for the public Songkick API.
    ///
    /// Fails with `InvalidArgument` if `api_key` is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a client with custom HTTP configuration.
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::new(ErrorKind::InvalidArgument(
                "Argument \"apiKey\" must be a non-empty value".to_string(),
            )));
        }

        let http = SkHttpClient::new(config)?;
        Ok(Self { http, api_key })
    }

    /// Create a client from the `SONGKICK_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            Error::new(ErrorKind::InvalidArgument(format!(
                "{API_KEY_ENV} environment variable is not set"
            )))
        })?;
        Self::new(api_key)
    }

    /// Songkick API protocol version, `"3.0"`.
    pub fn api_version(&self) -> &str {
        &self.http.config().api_version
    }

    /// Version of this client library.
    pub fn client_version(&self) -> &'static str {
        CLIENT_VERSION
    }

    /// Get the underlying HTTP client.
    pub fn inner(&self) -> &SkHttpClient {
        &self.http
    }

    /// Send an arbitrary request through the same primitive the endpoint
    /// methods use.
    ///
    /// The API key is not added; use [`Songkick::endpoint`] for that.
    #[instrument(skip(self, request), fields(path = %request.path()))]
    pub async fn request(&self, request: RequestBuilder) -> Result<Response> {
        self.http.execute(request).await.map_err(Into::into)
    }

    /// GET builder for `path` with the API key already attached.
    pub fn endpoint(&self, path: impl Into<String>) -> RequestBuilder {
        self.http.get(path).query(API_KEY_PARAM, &self.api_key)
    }
}

/// Append `page` and `per_page`, applying the defaults.
fn paginate(request: RequestBuilder, page: Option<u32>, per_page: Option<u32>) -> RequestBuilder {
    request
        .query("page", page_or_default(page))
        .query("per_page", per_page_or_default(per_page))
}

/// Append `min_date` / `max_date` when both are present.
///
/// A single bound is dropped rather than sent half-open.
fn with_date_range(
    request: RequestBuilder,
    min_date: Option<chrono::NaiveDate>,
    max_date: Option<chrono::NaiveDate>,
) -> RequestBuilder {
    match date_range(min_date, max_date) {
        Some((min, max)) => request
            .query("min_date", min.format(DATE_FORMAT))
            .query("max_date", max.format(DATE_FORMAT)),
        None => {
            if min_date.is_some() || max_date.is_some() {
                tracing::warn!(
                    ?min_date,
                    ?max_date,
                    "Only one date bound given; the date range filter is omitted"
                );
            }
            request
        }
    }
}
