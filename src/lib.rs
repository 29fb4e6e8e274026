/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # resy-client
//!
//! Client for the private HTTP API behind the Resy restaurant-reservation
//! site.
//!
//! Every call goes through the same pipeline:
//!
//! 1. [`model::request::build`] turns a static [`model::endpoint::EndpointDescriptor`],
//!    caller parameters and [`model::auth::Credentials`] into a request.
//! 2. A [`model::http::Transport`] performs exactly one HTTP exchange.
//! 3. [`model::response::decode`] classifies the status and maps the body into
//!    a typed record, failing closed on any shape mismatch.
//!
//! The named operations live on [`application::client::Client`] through the
//! [`application::interfaces`] traits. Credentials are passed into each
//! operation explicitly and are never read from the environment by the core;
//! [`application::config::Config`] is the only place that does.
//!
//! ## Example
//! ```ignore
//! use resy_client::prelude::*;
//!
//! setup_logger();
//! let credentials = Credentials::new(auth_token, api_key)?;
//! let client = Client::new(Config::default())?;
//!
//! let cities = client.city_configs(&credentials).await?;
//! let city = find_city_config(&cities, "new-york", "US").unwrap();
//! let venue = client.search_venue(&credentials, city, "Lilia").await?;
//! ```
//!
//! ## Configuration
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `RESY_AUTH_TOKEN` | Auth token of a logged-in session | none |
//! | `RESY_API_KEY` | API key | none |
//! | `RESY_BASE_URL` | API base URL | `https://api.resy.com` |
//! | `RESY_TIMEOUT_SECS` | Per-request deadline | `30` |
//! | `LOGLEVEL` | Log level for [`utils::setup_logger`] | `INFO` |

/// Client, configuration and endpoint operations
pub mod application;
/// Global constants
pub mod constants;
/// Error taxonomy
pub mod error;
/// Credentials, descriptors, transport, decoding and records
pub mod model;
/// Commonly used items
pub mod prelude;
/// Environment and logging helpers
pub mod utils;
