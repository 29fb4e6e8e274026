/// Client owning the transport and API settings
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Service implementations on [`client::Client`]
pub mod services;
