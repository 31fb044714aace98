//! # songkick-rest
//!
//! Songkick API client: one typed async method per endpoint.
//!
//! ## Features
//!
//! - **Artist search** - `find_artists`
//! - **Event search** - `find_events` by metro area, coordinates, IP or client IP
//! - **Gigography** - `find_events_by_artist` by Songkick or MusicBrainz id
//! - **Similar artists** - `find_similar_artist`
//! - **Event / venue details** - `get_event`, `get_venue`
//!
//! Every method returns the full [`Response`]: status code, headers and the
//! body, parsed when the service sends JSON. Errors are only transport or
//! argument failures; an error `resultsPage` arrives as a normal response and
//! can be inspected with [`ResultsPageExt`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use songkick_rest::{GigographyOptions, ResultsPageExt, Songkick};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), songkick_rest::Error> {
//!     let client = Songkick::from_env()?;
//!
//!     let response = client
//!         .find_events_by_artist(468146u64, &GigographyOptions::default())
//!         .await?;
//!
//!     let page: songkick_rest::ResultsPage = response.results_page()?;
//!     println!("{} past events", page.total_entries.unwrap_or_default());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod results;
mod types;

// Main client
pub use client::{Songkick, API_KEY_ENV};

// Error types
pub use error::{Error, ErrorKind, Result};

// Response envelope
pub use results::{ApiErrorMessage, ResultsPage, ResultsPageExt};

// Identifiers and options
pub use types::{
    ArtistId, EventSearchOptions, GigographyOptions, Location, Order, SearchOptions,
    DEFAULT_PAGE, DEFAULT_PER_PAGE,
};

// Re-export songkick-client types that users might need
pub use songkick_client::{Body, ClientConfig, ClientConfigBuilder, RequestBuilder, Response};
