mod common;
mod notification_tests;
mod reservation_tests;
mod transport_tests;
