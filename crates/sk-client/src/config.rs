//! Client configuration.

use std::time::Duration;
use url::Url;

use crate::{API_VERSION, DEFAULT_BASE_PATH, DEFAULT_HOST, DEFAULT_PORT};

/// Configuration for the HTTP client.
///
/// Built once and never mutated afterwards; every request reads it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Absolute base URL, always ending with `/`.
    base_url: Url,
    /// Songkick API protocol version.
    pub api_version: String,
    /// Request timeout. `None` leaves latency bounds to the caller.
    pub timeout: Option<Duration>,
    /// Connection timeout.
    pub connect_timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: String,
    /// Whether to enable request/response tracing.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_version: API_VERSION.to_string(),
            timeout: None,
            connect_timeout: None,
            user_agent: crate::USER_AGENT.to_string(),
            enable_tracing: true,
        }
    }
}

fn default_base_url() -> Url {
    let raw = format!("https://{DEFAULT_HOST}:{DEFAULT_PORT}{DEFAULT_BASE_PATH}");
    Url::parse(&raw).expect("default base URL is valid")
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// The absolute URL every relative request path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Host name requests are sent to.
    pub fn host(&self) -> &str {
        self.base_url.host_str().unwrap_or_default()
    }

    /// Port requests are sent to, defaulting to the scheme's well-known port.
    pub fn port(&self) -> u16 {
        self.base_url.port_or_known_default().unwrap_or(DEFAULT_PORT)
    }

    /// Base path, e.g. `/api/3.0/`.
    pub fn base_path(&self) -> &str {
        self.base_url.path()
    }

    /// Returns true if requests go over TLS.
    pub fn is_secure(&self) -> bool {
        self.base_url.scheme() == "https"
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Point the client at a different endpoint (a proxy or a test server).
    ///
    /// A missing trailing `/` is added so relative paths resolve beneath
    /// the base path instead of replacing its last segment.
    pub fn with_base_url(mut self, mut url: Url) -> Self {
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);
        self.config.base_url = url;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = Some(timeout);
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Enable or disable request/response tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
