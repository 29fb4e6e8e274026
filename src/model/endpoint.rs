/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Static descriptions of the upstream endpoints the client calls
//!
//! A descriptor fixes the HTTP method, the path template, the parameters an
//! endpoint accepts and how they are encoded. The response record is carried
//! at the type level so an operation cannot decode into the wrong shape.

use crate::model::responses::{
    NotificationList, Reservation, ReservationDetails, RestaurantCityConfig, SlotList, Venue,
    VenueSearch,
};
use reqwest::Method;
use std::fmt;
use std::marker::PhantomData;

/// How the non-path parameters of an endpoint travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// URL-encoded query string
    Query,
    /// JSON object body
    Json,
    /// `application/x-www-form-urlencoded` body
    Form,
}

/// One parameter accepted by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Wire name of the parameter
    pub name: &'static str,
    /// Whether the parameter fills a `{name}` placeholder of the path
    pub in_path: bool,
    /// Whether the request is rejected when the parameter is absent
    pub required: bool,
}

impl ParamSpec {
    /// A path placeholder; always required
    pub const fn path(name: &'static str) -> Self {
        Self {
            name,
            in_path: true,
            required: true,
        }
    }

    /// A required query or body field
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            in_path: false,
            required: true,
        }
    }

    /// An optional query or body field
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            in_path: false,
            required: false,
        }
    }
}

/// Static definition of one upstream operation returning records of type `R`
pub struct EndpointDescriptor<R> {
    /// Short name used in logs
    pub name: &'static str,
    /// HTTP method
    pub method: Method,
    /// Path template, e.g. `/3/venue` or `/3/items/{item_id}`
    pub path: &'static str,
    /// Parameters the endpoint accepts, in wire order
    pub params: &'static [ParamSpec],
    /// Encoding of the non-path parameters
    pub encoding: Encoding,
    record: PhantomData<fn() -> R>,
}

impl<R> EndpointDescriptor<R> {
    /// Creates a descriptor
    pub const fn new(
        name: &'static str,
        method: Method,
        path: &'static str,
        params: &'static [ParamSpec],
        encoding: Encoding,
    ) -> Self {
        Self {
            name,
            method,
            path,
            params,
            encoding,
            record: PhantomData,
        }
    }

    /// Looks up a declared parameter by name
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Returns true when the endpoint sends a request body
    #[must_use]
    pub fn has_body(&self) -> bool {
        !matches!(self.encoding, Encoding::Query)
    }
}

impl<R> fmt::Debug for EndpointDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointDescriptor")
            .field("name", &self.name)
            .field("method", &self.method)
            .field("path", &self.path)
            .field("params", &self.params)
            .field("encoding", &self.encoding)
            .finish()
    }
}

/// Available slots for a venue, day and party size
pub const FIND_RESERVATIONS: EndpointDescriptor<SlotList> = EndpointDescriptor::new(
    "find_reservations",
    Method::GET,
    "/4/find",
    &[
        ParamSpec::required("lat"),
        ParamSpec::required("long"),
        ParamSpec::required("day"),
        ParamSpec::required("party_size"),
        ParamSpec::required("venue_id"),
    ],
    Encoding::Query,
);

/// Booking details for a slot; carries the book token
pub const RESERVATION_DETAILS: EndpointDescriptor<ReservationDetails> = EndpointDescriptor::new(
    "reservation_details",
    Method::POST,
    "/3/details",
    &[
        ParamSpec::required("config_id"),
        ParamSpec::required("date"),
        ParamSpec::required("party_size"),
    ],
    Encoding::Json,
);

/// Books a slot with a book token and a payment method
pub const BOOK_RESERVATION: EndpointDescriptor<Reservation> = EndpointDescriptor::new(
    "book_reservation",
    Method::POST,
    "/3/book",
    &[
        ParamSpec::required("book_token"),
        ParamSpec::required("struct_payment_method"),
        ParamSpec::optional("source_id"),
    ],
    Encoding::Form,
);

/// Cancels a booked reservation
pub const CANCEL_RESERVATION: EndpointDescriptor<()> = EndpointDescriptor::new(
    "cancel_reservation",
    Method::POST,
    "/3/cancel",
    &[ParamSpec::required("resy_token")],
    Encoding::Form,
);

/// Every city in the Resy network
pub const LOCATION_CONFIG: EndpointDescriptor<Vec<RestaurantCityConfig>> = EndpointDescriptor::new(
    "location_config",
    Method::GET,
    "/3/location/config",
    &[],
    Encoding::Query,
);

/// Venue search around a point
pub const VENUE_SEARCH: EndpointDescriptor<VenueSearch> = EndpointDescriptor::new(
    "venue_search",
    Method::POST,
    "/3/venuesearch/search",
    &[
        ParamSpec::required("availability"),
        ParamSpec::required("geo"),
        ParamSpec::required("query"),
    ],
    Encoding::Json,
);

/// Details of a single venue
pub const VENUE: EndpointDescriptor<Venue> = EndpointDescriptor::new(
    "venue",
    Method::GET,
    "/3/venue",
    &[ParamSpec::required("id")],
    Encoding::Query,
);

/// Active availability notifications of the user
pub const LIST_NOTIFICATIONS: EndpointDescriptor<NotificationList> = EndpointDescriptor::new(
    "list_notifications",
    Method::GET,
    "/3/notify",
    &[],
    Encoding::Query,
);

/// Creates or updates an availability notification
pub const CREATE_NOTIFICATION: EndpointDescriptor<()> = EndpointDescriptor::new(
    "create_notification",
    Method::POST,
    "/3/notify",
    &[
        ParamSpec::required("venue_id"),
        ParamSpec::required("party_size"),
        ParamSpec::required("day"),
        ParamSpec::required("time_preferred_start"),
        ParamSpec::required("time_preferred_end"),
        ParamSpec::required("service_type_id"),
    ],
    Encoding::Json,
);

/// Deletes one availability notification
pub const DELETE_NOTIFICATION: EndpointDescriptor<()> = EndpointDescriptor::new(
    "delete_notification",
    Method::DELETE,
    "/3/notify",
    &[
        ParamSpec::required("venue_id"),
        ParamSpec::required("day"),
        ParamSpec::required("num_seats"),
        ParamSpec::required("service_type_id"),
    ],
    Encoding::Query,
);
