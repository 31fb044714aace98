//! Error types for songkick-client.

/// Result type alias for songkick-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for songkick-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if a caller-supplied argument was rejected.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument(_))
    }

    /// Returns true if the request never produced a complete response.
    pub fn is_transport(&self) -> bool {
        self.kind.is_transport()
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// A required argument was missing or malformed (e.g. an empty API key).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Connection could not be established (DNS, refused, TLS handshake).
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request timeout. Only possible when a timeout was configured.
    #[error("Request timeout")]
    Timeout,

    /// Any other failure while sending the request or reading the body.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A JSON-typed body could not be parsed, or a request body could not
    /// be serialized.
    #[error("JSON error: {0}")]
    Json(String),

    /// The request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP transport could not be configured.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl ErrorKind {
    /// Returns true for network level failures.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ErrorKind::Connection(_) | ErrorKind::Timeout | ErrorKind::Transport(_)
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if err.is_builder() {
            ErrorKind::InvalidUrl(err.to_string())
        } else {
            ErrorKind::Transport(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}
