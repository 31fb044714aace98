use tracing::instrument;

use songkick_client::{RequestBuilder, Response};

use crate::error::Result;
use crate::types::{EventSearchOptions, Location};

impl super::Songkick {
    /// Upcoming events near a location.
    ///
    /// Defaults: page 1, 50 per page. `min_date` and `max_date` are only sent
    /// as a pair.
    #[instrument(skip(self, location), fields(location = %location))]
    pub async fn find_events(
        &self,
        location: &Location,
        options: &EventSearchOptions,
    ) -> Result<Response> {
        self.request(self.find_events_request(location, options)).await
    }

    /// Detailed event information, including the venue.
    #[instrument(skip(self))]
    pub async fn get_event(&self, event_id: u64) -> Result<Response> {
        self.request(self.get_event_request(event_id)).await
    }

    pub(crate) fn find_events_request(
        &self,
        location: &Location,
        options: &EventSearchOptions,
    ) -> RequestBuilder {
        let request = self.endpoint("events.json").query("location", location);
        let request = super::paginate(request, options.page, options.per_page);
        super::with_date_range(request, options.min_date, options.max_date)
    }

    pub(crate) fn get_event_request(&self, event_id: u64) -> RequestBuilder {
        self.endpoint(format!("events/{event_id}.json"))
    }
}
