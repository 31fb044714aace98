use tracing::instrument;

use songkick_client::{RequestBuilder, Response};

use crate::error::Result;

impl super::Songkick {
    /// Venue details: address, phone number, description and more.
    #[instrument(skip(self))]
    pub async fn get_venue(&self, venue_id: u64) -> Result<Response> {
        self.request(self.get_venue_request(venue_id)).await
    }

    pub(crate) fn get_venue_request(&self, venue_id: u64) -> RequestBuilder {
        self.endpoint(format!("venues/{venue_id}.json"))
    }
}
