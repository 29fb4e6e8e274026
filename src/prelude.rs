/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

// ============================================================================
// CLIENT AND CONFIGURATION
// ============================================================================

/// Client for the Resy API
pub use crate::application::client::Client;

/// Configuration loaded from the environment
pub use crate::application::config::{Config, CredentialsConfig, RestApiConfig};

// ============================================================================
// SERVICE INTERFACES
// ============================================================================

/// Endpoint operations
pub use crate::application::interfaces::{
    notification::NotificationService, reservation::ReservationService, venue::VenueService,
};

// ============================================================================
// REQUEST PIPELINE
// ============================================================================

/// Credential holder
pub use crate::model::auth::Credentials;

/// Endpoint descriptors
pub use crate::model::endpoint::{Encoding, EndpointDescriptor, ParamSpec};

/// Transport
pub use crate::model::http::{HttpTransport, RawResponse, Transport};

/// Request construction
pub use crate::model::request::{ApiRequest, Params, build};

/// Response decoding
pub use crate::model::response::{decode, decode_ack};

// ============================================================================
// RECORDS
// ============================================================================

/// Response records
pub use crate::model::responses::{
    Notification, NotificationSpec, PaymentMethod, Reservation, ReservationDetails,
    ReservationSlot, RestaurantCityConfig, Venue, VenueHit, find_city_config,
};

// ============================================================================
// ERRORS, CONSTANTS AND UTILITIES
// ============================================================================

/// Error taxonomy
pub use crate::error::AppError;

/// Global constants
pub use crate::constants::*;

/// Logging utilities
pub use crate::utils::logger::{setup_logger, setup_logger_with_level};

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
