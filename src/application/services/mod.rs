/// Notification endpoints
pub mod notification_service;
/// Reservation endpoints
pub mod reservation_service;
/// Venue and location endpoints
pub mod venue_service;

pub use crate::application::interfaces::notification::*;
pub use crate::application::interfaces::reservation::*;
pub use crate::application::interfaces::venue::*;
