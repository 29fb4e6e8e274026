/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Base URL of the Resy private API
pub const DEFAULT_BASE_URL: &str = "https://api.resy.com";
/// Default per-request deadline in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Longest per-request deadline accepted from configuration, in seconds
pub const MAX_TIMEOUT_SECS: u64 = 86_400;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "resy-client/0.1.0";
/// Header carrying the API key on every authenticated request
pub const AUTH_TOKEN_HEADER: &str = "X-Resy-Auth-Token";
/// Header carrying the serialized auth token on every authenticated request
pub const AUTHENTICATION_HEADER: &str = "Authentication";
/// Content type sent with JSON bodies
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// Content type sent with form bodies
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
/// Booking source the web client reports when it books a slot
pub const BOOKING_SOURCE_ID: &str = "resy.com-venue-details";
/// Timestamp layout used by slot start times
pub const SLOT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Day layout used by every date parameter
pub const DAY_FORMAT: &str = "%Y-%m-%d";
/// Default party size when none is given
pub const DEFAULT_PARTY_SIZE: u8 = 2;
/// Radius, in meters, used when searching venues around a city
pub const DEFAULT_SEARCH_RADIUS: u16 = u16::MAX;
