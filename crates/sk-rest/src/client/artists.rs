use tracing::{field, instrument, Span};

use songkick_client::{RequestBuilder, Response};

use crate::error::Result;
use crate::types::{ArtistId, GigographyOptions, SearchOptions};

impl super::Songkick {
    /// Search artists by name.
    ///
    /// `GET search/artists.json?query=...&page=1&per_page=50`
    #[instrument(skip(self))]
    pub async fn find_artists(&self, query: &str, options: &SearchOptions) -> Result<Response> {
        self.request(self.find_artists_request(query, options)).await
    }

    /// Past events for an artist (the artist's gigography).
    ///
    /// Songkick ids use `artists/{id}/gigography.json`, MusicBrainz ids use
    /// `artists/mbid:{id}/gigography.json`. Defaults: page 1, 50 per page,
    /// ascending order.
    #[instrument(skip(self, artist_id), fields(artist = field::Empty))]
    pub async fn find_events_by_artist(
        &self,
        artist_id: impl Into<ArtistId>,
        options: &GigographyOptions,
    ) -> Result<Response> {
        let artist_id = artist_id.into();
        Span::current().record("artist", field::display(&artist_id));
        self.request(self.find_events_by_artist_request(artist_id, options))
            .await
    }

    /// Artists similar to a given artist.
    ///
    /// Sent to `artists/{id}/gigography.json` with the bare identifier.
    #[instrument(skip(self, artist_id), fields(artist = field::Empty))]
    pub async fn find_similar_artist(
        &self,
        artist_id: impl Into<ArtistId>,
        options: &SearchOptions,
    ) -> Result<Response> {
        let artist_id = artist_id.into();
        Span::current().record("artist", field::display(&artist_id));
        self.request(self.find_similar_artist_request(artist_id, options))
            .await
    }

    pub(crate) fn find_artists_request(&self, query: &str, options: &SearchOptions) -> RequestBuilder {
        let request = self.endpoint("search/artists.json").query("query", query);
        super::paginate(request, options.page, options.per_page)
    }

    pub(crate) fn find_events_by_artist_request(
        &self,
        artist_id: ArtistId,
        options: &GigographyOptions,
    ) -> RequestBuilder {
        let path = format!("artists/{}/gigography.json", artist_id.path_segment());
        let request = super::paginate(self.endpoint(path), options.page, options.per_page)
            .query("order", options.order.unwrap_or_default());
        super::with_date_range(request, options.min_date, options.max_date)
    }

    pub(crate) fn find_similar_artist_request(
        &self,
        artist_id: ArtistId,
        options: &SearchOptions,
    ) -> RequestBuilder {
        let path = format!("artists/{}/gigography.json", artist_id.raw_segment());
        super::paginate(self.endpoint(path), options.page, options.per_page)
    }
}
