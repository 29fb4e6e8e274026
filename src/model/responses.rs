/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Response records decoded from Resy's JSON bodies
//!
//! Every struct mirrors only the fields the tools read. Required fields have no
//! serde default, so a body missing one fails to decode.

use crate::constants::SLOT_TIME_FORMAT;
use crate::error::AppError;
use chrono::NaiveDateTime;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// A city in the Resy network, used to centre venue searches
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct RestaurantCityConfig {
    /// ISO country code, e.g. `US`
    pub country_code: String,
    /// Latitude of the city centre
    pub latitude: f64,
    /// Longitude of the city centre
    pub longitude: f64,
    /// Slug Resy uses in its city URLs, e.g. `new-york-ny`
    pub url_slug: String,
}

impl RestaurantCityConfig {
    /// Matches a city by slug containment and country by exact code, ignoring case
    #[must_use]
    pub fn is_match(&self, city: &str, country: &str) -> bool {
        let country_match = self.country_code.eq_ignore_ascii_case(country);
        let city_match = self
            .url_slug
            .to_ascii_lowercase()
            .contains(&city.to_ascii_lowercase());

        country_match && city_match
    }
}

/// Returns the first city config matching `city` and `country`
#[must_use]
pub fn find_city_config<'a>(
    configs: &'a [RestaurantCityConfig],
    city: &str,
    country: &str,
) -> Option<&'a RestaurantCityConfig> {
    configs.iter().find(|c| c.is_match(city, country))
}

/// Body of a venue search
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct VenueSearch {
    /// Search envelope
    pub search: SearchHits,
}

impl VenueSearch {
    /// The best match, if any
    #[must_use]
    pub fn first_hit(&self) -> Option<&VenueHit> {
        self.search.hits.first()
    }
}

/// Hits of a venue search
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct SearchHits {
    /// Matching venues ordered by relevance
    pub hits: Vec<VenueHit>,
}

/// One venue returned by a search
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct VenueHit {
    /// Resy venue id, as a string
    #[serde(rename = "objectID")]
    pub object_id: String,
    /// Display name
    pub name: String,
}

/// Venue details
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Venue {
    /// Identifier block
    pub id: VenueId,
    /// Display name
    pub name: String,
    /// Where the venue is, when Resy says
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<VenueLocation>,
}

/// Identifier block of a venue
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct VenueId {
    /// Resy venue id
    pub resy: u64,
}

/// Location block of a venue
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct VenueLocation {
    /// City or town
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    /// Neighborhood name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
}

/// Body of the find endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct SlotList {
    /// Result envelope
    pub results: SlotResults,
}

impl SlotList {
    /// Flattens the slots of every venue in the result
    #[must_use]
    pub fn into_slots(self) -> Vec<ReservationSlot> {
        self.results
            .venues
            .into_iter()
            .flat_map(|venue| venue.slots)
            .collect()
    }
}

/// Venues of a find result
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct SlotResults {
    /// One entry per venue queried
    pub venues: Vec<VenueSlots>,
}

/// Slots of one venue
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct VenueSlots {
    /// Bookable slots
    pub slots: Vec<ReservationSlot>,
}

/// One bookable slot
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ReservationSlot {
    /// When the slot starts
    pub date: ReservationSlotDate,
    /// What is needed to book it
    pub config: ReservationSlotConfig,
}

impl ReservationSlot {
    /// Parses the slot start time
    ///
    /// # Returns
    /// * `Ok(NaiveDateTime)` - Local start time of the slot
    /// * `Err(AppError::SchemaMismatch)` - Resy sent a time in another layout
    pub fn start_time(&self) -> Result<NaiveDateTime, AppError> {
        NaiveDateTime::parse_from_str(&self.date.start, SLOT_TIME_FORMAT).map_err(|e| {
            AppError::SchemaMismatch {
                field: "date.start".to_string(),
                reason: format!("{}: {e}", self.date.start),
            }
        })
    }
}

/// Start block of a slot
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ReservationSlotDate {
    /// `YYYY-MM-DD HH:MM:SS`, venue local time
    pub start: String,
}

/// Booking configuration of a slot
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ReservationSlotConfig {
    /// Numeric slot config id
    pub id: u64,
    /// Seating type as shown in the UI: "Indoor", "Patio", "Bar"...
    #[serde(rename = "type")]
    pub slot_type: String,
    /// Config token exchanged for a book token
    pub token: String,
}

/// Body of the details endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ReservationDetails {
    /// The booking user
    pub user: DetailsUser,
    /// Token required by the book endpoint
    pub book_token: BookToken,
}

impl ReservationDetails {
    /// First payment method on file; a user is not guaranteed to have one
    #[must_use]
    pub fn payment_method(&self) -> Option<&PaymentMethod> {
        self.user.payment_methods.first()
    }
}

/// User block of a details response
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct DetailsUser {
    /// Payment methods on file
    pub payment_methods: Vec<PaymentMethod>,
}

/// A stored payment method
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentMethod {
    /// Payment method id
    pub id: u64,
}

/// Book token wrapper
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct BookToken {
    /// Opaque token
    pub value: String,
}

/// Result of a booking
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    /// Reservation id
    #[serde(alias = "reservation_id")]
    pub id: u64,
    /// Booking status, e.g. `confirmed`, when Resy reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Token needed to cancel the reservation later
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resy_token: Option<String>,
}

/// Body of the notification listing
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct NotificationList {
    /// Active notifications
    pub notify: Vec<Notification>,
}

/// An availability notification
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    /// What the notification watches
    pub specs: NotificationSpec,
}

/// What an availability notification watches
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationSpec {
    /// Resy venue id
    pub venue_id: u32,
    /// Party size
    pub party_size: u8,
    /// Day, `YYYY-MM-DD`
    pub day: String,
    /// Earliest acceptable time, `HH:MM`
    pub time_preferred_start: String,
    /// Latest acceptable time, `HH:MM`
    pub time_preferred_end: String,
    /// Service type (lunch, dinner...) as Resy numbers it
    pub service_type_id: u8,
}
