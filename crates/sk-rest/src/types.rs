//! Identifier, location and option types shared by the endpoint methods.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use songkick_client::security::url::encode_segment;

use crate::error::{Error, ErrorKind};

/// Page requested when none is given.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size requested when none is given.
pub const DEFAULT_PER_PAGE: u32 = 50;

/// Date format of `min_date` / `max_date`.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// An artist, identified either by Songkick or by MusicBrainz.
///
/// Converting from a string dispatches on its content: a string of digits
/// such as `"468146"` becomes a Songkick id and goes to `artists/{id}/...`,
/// not to the `mbid:` path. Build [`ArtistId::MusicBrainz`] directly to send
/// a digits-only value as an mbid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArtistId {
    /// Numeric Songkick artist id.
    Songkick(u64),
    /// MusicBrainz id (mbid).
    MusicBrainz(String),
}

impl ArtistId {
    /// Path segment for artist resources: `468146` or `mbid:<id>`.
    pub fn path_segment(&self) -> String {
        match self {
            ArtistId::Songkick(id) => id.to_string(),
            ArtistId::MusicBrainz(mbid) => format!("mbid:{}", encode_segment(mbid)),
        }
    }

    /// The identifier alone, without the `mbid:` prefix.
    pub fn raw_segment(&self) -> String {
        match self {
            ArtistId::Songkick(id) => id.to_string(),
            ArtistId::MusicBrainz(mbid) => encode_segment(mbid),
        }
    }
}

impl From<u64> for ArtistId {
    fn from(id: u64) -> Self {
        ArtistId::Songkick(id)
    }
}

impl From<u32> for ArtistId {
    fn from(id: u32) -> Self {
        ArtistId::Songkick(u64::from(id))
    }
}

/// Whole numbers are Songkick ids; anything else is taken as an mbid.
impl From<&str> for ArtistId {
    fn from(id: &str) -> Self {
        let is_whole_number = !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit());
        match id.parse::<u64>() {
            Ok(numeric) if is_whole_number => ArtistId::Songkick(numeric),
            _ => ArtistId::MusicBrainz(id.to_string()),
        }
    }
}

impl From<String> for ArtistId {
    fn from(id: String) -> Self {
        ArtistId::from(id.as_str())
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtistId::Songkick(id) => write!(f, "{id}"),
            ArtistId::MusicBrainz(mbid) => write!(f, "mbid:{mbid}"),
        }
    }
}

/// Where to look for events.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// A Songkick metro area, `sk:<id>`.
    MetroArea(u64),
    /// Coordinates, `geo:<lat>,<lng>`.
    Geo { lat: f64, lng: f64 },
    /// Geolocate an IP address, `ip:<ip>`.
    Ip(IpAddr),
    /// Geolocate the address the request comes from.
    ClientIp,
    /// No location filter.
    Nothing,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::MetroArea(id) => write!(f, "sk:{id}"),
            Location::Geo { lat, lng } => write!(f, "geo:{lat},{lng}"),
            Location::Ip(ip) => write!(f, "ip:{ip}"),
            Location::ClientIp => f.write_str("clientip"),
            Location::Nothing => f.write_str("nothing"),
        }
    }
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            Error::new(ErrorKind::InvalidArgument(format!(
                "unrecognized location '{s}', expected sk:<id>, geo:<lat>,<lng>, ip:<ip>, clientip or nothing"
            )))
        };

        match s {
            "clientip" => return Ok(Location::ClientIp),
            "nothing" => return Ok(Location::Nothing),
            _ => {}
        }

        let (scheme, value) = s.split_once(':').ok_or_else(invalid)?;
        match scheme {
            "sk" => value.parse().map(Location::MetroArea).map_err(|_| invalid()),
            "ip" => value.parse().map(Location::Ip).map_err(|_| invalid()),
            "geo" => {
                let (lat, lng) = value.split_once(',').ok_or_else(invalid)?;
                let lat = lat.trim().parse().map_err(|_| invalid())?;
                let lng = lng.trim().parse().map_err(|_| invalid())?;
                Ok(Location::Geo { lat, lng })
            }
            _ => Err(invalid()),
        }
    }
}

/// Sort order of a gigography.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Asc => f.write_str("asc"),
            Order::Desc => f.write_str("desc"),
        }
    }
}

/// Pagination for `find_artists` and `find_similar_artist`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Page number, 1-based. Defaults to 1.
    pub page: Option<u32>,
    /// Results per page. Defaults to 50.
    pub per_page: Option<u32>,
}

impl SearchOptions {
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

/// Options for `find_events`.
///
/// The date range is sent only when both `min_date` and `max_date` are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSearchOptions {
    /// Page number, 1-based. Defaults to 1.
    pub page: Option<u32>,
    /// Results per page. Defaults to 50.
    pub per_page: Option<u32>,
    /// Earliest event date, inclusive.
    pub min_date: Option<NaiveDate>,
    /// Latest event date, inclusive.
    pub max_date: Option<NaiveDate>,
}

impl EventSearchOptions {
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Restrict results to events between `min` and `max`.
    pub fn between(mut self, min: NaiveDate, max: NaiveDate) -> Self {
        self.min_date = Some(min);
        self.max_date = Some(max);
        self
    }
}

/// Options for `find_events_by_artist`.
///
/// The date range is sent only when both `min_date` and `max_date` are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GigographyOptions {
    /// Page number, 1-based. Defaults to 1.
    pub page: Option<u32>,
    /// Results per page. Defaults to 50.
    pub per_page: Option<u32>,
    /// Sort order. Defaults to ascending.
    pub order: Option<Order>,
    /// Earliest event date, inclusive.
    pub min_date: Option<NaiveDate>,
    /// Latest event date, inclusive.
    pub max_date: Option<NaiveDate>,
}

impl GigographyOptions {
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    /// Restrict results to events between `min` and `max`.
    pub fn between(mut self, min: NaiveDate, max: NaiveDate) -> Self {
        self.min_date = Some(min);
        self.max_date = Some(max);
        self
    }
}

/// Zero counts as unset, like a missing value.
pub(crate) fn page_or_default(page: Option<u32>) -> u32 {
    page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE)
}

pub(crate) fn per_page_or_default(per_page: Option<u32>) -> u32 {
    per_page.filter(|p| *p > 0).unwrap_or(DEFAULT_PER_PAGE)
}

/// Both bounds, or nothing.
pub(crate) fn date_range(
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
) -> Option<(NaiveDate, NaiveDate)> {
    min_date.zip(max_date)
}
