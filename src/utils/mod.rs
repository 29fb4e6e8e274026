/// Environment helpers used by the configuration loader
pub mod config;
/// Logging setup
pub mod logger;

pub use logger::*;
