/// Notification service interface
pub mod notification;
/// Reservation service interface
pub mod reservation;
/// Venue service interface
pub mod venue;
