//! Error types for songkick-rest.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Returns true if a caller-supplied argument was rejected, including an
    /// empty API key at construction.
    pub fn is_invalid_argument(&self) -> bool {
        match &self.kind {
            ErrorKind::InvalidArgument(_) => true,
            ErrorKind::Client(_) => self.client_error().is_some_and(|e| e.is_invalid_argument()),
            _ => false,
        }
    }

    /// Returns true if the request failed before a complete response arrived.
    pub fn is_transport(&self) -> bool {
        self.client_error().is_some_and(|e| e.is_transport())
    }

    /// The underlying HTTP client error, if this error came from one.
    pub fn client_error(&self) -> Option<&songkick_client::Error> {
        self.source.as_ref()?.downcast_ref::<songkick_client::Error>()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("Client error: {0}")]
    Client(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<songkick_client::Error> for Error {
    fn from(err: songkick_client::Error) -> Self {
        Error { kind: ErrorKind::Client(err.to_string()), source: Some(Box::new(err)) }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error { kind: ErrorKind::Json(err.to_string()), source: Some(Box::new(err)) }
    }
}
