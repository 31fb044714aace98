//! # songkick-api
//!
//! A Songkick API client library for Rust.
//!
//! This library exposes the Songkick v3.0 REST endpoints as typed async
//! methods. Responses come back as a full envelope (status, headers, body)
//! with JSON bodies already parsed.
//!
//! ## Security
//!
//! - The API key is redacted in Debug output
//! - Tracing never records the API key; logged URLs have it redacted
//!
//! ## Crates
//!
//! - **songkick-client** - Core HTTP client: configuration, request building, content negotiation
//! - **songkick-rest** - The `Songkick` client and its endpoint methods
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use songkick_api::{EventSearchOptions, Location, Songkick};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Songkick::from_env()?;
//!
//!     let response = client
//!         .find_events(&"sk:24426".parse::<Location>()?, &EventSearchOptions::default())
//!         .await?;
//!
//!     if let Some(body) = response.json() {
//!         println!("{}", body["resultsPage"]["totalEntries"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
pub use songkick_client as client;
pub use songkick_rest as rest;

// Re-export commonly used types at the top level
pub use songkick_client::{Body, ClientConfig, Response};
pub use songkick_rest::{
    ArtistId, Error, EventSearchOptions, GigographyOptions, Location, Order, ResultsPage,
    ResultsPageExt, SearchOptions, Songkick,
};
