//! Core HTTP client: one reqwest round-trip per request.

use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBuilder, RequestMethod};
use crate::response::Response;
use crate::security::redact_query_param;
use crate::API_KEY_PARAM;

/// HTTP client for the Songkick API.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SkHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl SkHttpClient {
    /// Create a new HTTP client.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        let inner = builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a GET request builder.
    pub fn get(&self, path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Get, path)
    }

    /// Create a POST request builder.
    pub fn post(&self, path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Post, path)
    }

    /// Create a PUT request builder.
    pub fn put(&self, path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Put, path)
    }

    /// Create a DELETE request builder.
    pub fn delete(&self, path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Delete, path)
    }

    /// Execute a request.
    ///
    /// Performs exactly one network operation. Transport failures and
    /// undecodable JSON bodies are errors; any HTTP status is a success.
    #[instrument(skip(self, request), fields(method = ?request.method, path = %request.path))]
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let url = request.resolve(self.config.base_url())?;
        let body = request.serialized_body()?;

        // The query string carries the API key, so it is redacted before logging.
        if self.config.enable_tracing {
            debug!(
                method = ?request.method,
                url = %redact_query_param(&url, API_KEY_PARAM),
                "Sending request"
            );
        }

        let mut req = self.inner.request(request.method.to_reqwest(), url);

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(body) = body {
            req = req.body(body);
        }

        let mut response = req.send().await?;

        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();

        let mut raw = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            raw.extend_from_slice(&chunk);
        }

        if self.config.enable_tracing {
            let bytes = raw.len();
            if (200..300).contains(&status) {
                debug!(status, bytes, "Response received");
            } else {
                info!(status, bytes, "Non-success response");
            }
        }

        Response::from_parts(status, headers, String::from_utf8_lossy(&raw).into_owned())
    }
}
