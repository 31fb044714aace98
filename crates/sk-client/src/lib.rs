//! # songkick-client
//!
//! Core HTTP client infrastructure for the Songkick API.
//!
//! This crate provides the request primitive every endpoint is built on:
//! - Immutable endpoint configuration (host, base path, port, API version)
//! - Request building with ordered query parameters, headers and JSON bodies
//! - Content-negotiated responses (JSON media types parsed, everything else
//!   kept as text, empty bodies delivered as `None`)
//! - Request/response tracing that never logs the API key
//!
//! There is no retry, caching or rate limiting here. Status codes are
//! forwarded to the caller untouched.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    songkick-rest                            │
//! │  - Holds the API key                                        │
//! │  - Endpoint methods (find_events, get_venue, ...)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SkHttpClient                             │
//! │  - Path resolution against the base URL                     │
//! │  - One reqwest round-trip per call                          │
//! │  - Body accumulation and content negotiation                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use songkick_client::{ClientConfig, RequestBuilder, SkHttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), songkick_client::Error> {
//!     let http = SkHttpClient::new(ClientConfig::default())?;
//!
//!     let response = http
//!         .execute(http.get("events/27989954.json").query("apikey", "my-key"))
//!         .await?;
//!
//!     println!("{} {:?}", response.status(), response.json());
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;
pub mod security;

pub use client::SkHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBuilder, RequestMethod};
pub use response::{is_json_content_type, Body, Response};

/// Songkick API protocol version.
pub const API_VERSION: &str = "3.0";

/// Default API host.
pub const DEFAULT_HOST: &str = "api.songkick.com";

/// Default base path, every request path is resolved against it.
pub const DEFAULT_BASE_PATH: &str = "/api/3.0/";

/// Default HTTPS port.
pub const DEFAULT_PORT: u16 = 443;

/// Query parameter carrying the API key on every endpoint call.
pub const API_KEY_PARAM: &str = "apikey";

/// Version of this client library, taken from the package manifest.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("songkick-api/", env!("CARGO_PKG_VERSION"));
