/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{BOOKING_SOURCE_ID, DAY_FORMAT, DEFAULT_SEARCH_RADIUS};
use crate::model::responses::{NotificationSpec, PaymentMethod, RestaurantCityConfig};
use chrono::NaiveDate;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Point and radius a venue search is limited to
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct GeoFilter {
    /// Latitude of the centre
    pub latitude: f64,
    /// Longitude of the centre
    pub longitude: f64,
    /// Radius in meters
    pub radius: u16,
}

impl GeoFilter {
    /// Creates a filter centred on `city` with the default radius
    #[must_use]
    pub fn around(city: &RestaurantCityConfig) -> Self {
        Self {
            latitude: city.latitude,
            longitude: city.longitude,
            radius: DEFAULT_SEARCH_RADIUS,
        }
    }
}

/// Parameters of a venue search
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct VenueSearchRequest {
    /// Only return venues with availability
    pub availability: bool,
    /// Search area
    pub geo: GeoFilter,
    /// Free-text venue name
    pub query: String,
}

impl VenueSearchRequest {
    /// Searches `name` around `city`, regardless of availability
    #[must_use]
    pub fn new(city: &RestaurantCityConfig, name: &str) -> Self {
        Self {
            availability: false,
            geo: GeoFilter::around(city),
            query: name.to_owned(),
        }
    }
}

/// Parameters of the venue endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct VenueRequest {
    /// Resy venue id
    pub id: String,
}

/// Parameters of the find endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct FindReservationsRequest {
    /// Latitude; Resy ignores it when a venue id is given
    pub lat: f64,
    /// Longitude; Resy ignores it when a venue id is given
    pub long: f64,
    /// Day, `YYYY-MM-DD`
    pub day: String,
    /// Party size
    pub party_size: u8,
    /// Resy venue id
    pub venue_id: String,
}

impl FindReservationsRequest {
    /// Builds the query for one venue and day
    #[must_use]
    pub fn new(venue_id: &str, day: NaiveDate, party_size: u8) -> Self {
        Self {
            lat: 0.0,
            long: 0.0,
            day: day.format(DAY_FORMAT).to_string(),
            party_size,
            venue_id: venue_id.to_owned(),
        }
    }
}

/// Parameters of the details endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ReservationDetailsRequest {
    /// Config token of the chosen slot
    pub config_id: String,
    /// Day, `YYYY-MM-DD`
    pub date: String,
    /// Party size
    pub party_size: u8,
}

impl ReservationDetailsRequest {
    /// Builds the request for one slot token
    #[must_use]
    pub fn new(config_id: &str, day: NaiveDate, party_size: u8) -> Self {
        Self {
            config_id: config_id.to_owned(),
            date: day.format(DAY_FORMAT).to_string(),
            party_size,
        }
    }
}

/// Parameters of the book endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct BookReservationRequest {
    /// Token from the details endpoint
    pub book_token: String,
    /// Payment method, sent as a JSON object inside the form
    pub struct_payment_method: PaymentMethod,
    /// Booking source reported to Resy
    pub source_id: String,
}

impl BookReservationRequest {
    /// Books with `book_token`, charging `payment_method` if the venue requires it
    #[must_use]
    pub fn new(book_token: &str, payment_method: PaymentMethod) -> Self {
        Self {
            book_token: book_token.to_owned(),
            struct_payment_method: payment_method,
            source_id: BOOKING_SOURCE_ID.to_string(),
        }
    }
}

/// Parameters of the cancel endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CancelReservationRequest {
    /// Token returned when the reservation was booked
    pub resy_token: String,
}

/// Parameters of the notification delete endpoint
///
/// Resy names the party size `num_seats` here.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct DeleteNotificationRequest {
    /// Resy venue id
    pub venue_id: u32,
    /// Day, `YYYY-MM-DD`
    pub day: String,
    /// Party size
    pub num_seats: u8,
    /// Service type
    pub service_type_id: u8,
}

impl From<&NotificationSpec> for DeleteNotificationRequest {
    fn from(spec: &NotificationSpec) -> Self {
        Self {
            venue_id: spec.venue_id,
            day: spec.day.clone(),
            num_seats: spec.party_size,
            service_type_id: spec.service_type_id,
        }
    }
}
