/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Client for the Resy API
//!
//! [`Client`] owns the transport and API settings. It holds no credentials:
//! every operation takes a [`Credentials`] reference, so one client can serve
//! concurrent callers without locking.
//!
//! # Example
//! ```ignore
//! use resy_client::prelude::*;
//!
//! let config = Config::new();
//! let credentials = config.credentials()?;
//! let client = Client::new(config)?;
//!
//! let slots = client.find_reservations(&credentials, "1505", day, 2).await?;
//! ```

use crate::application::config::Config;
use crate::error::AppError;
use crate::model::auth::Credentials;
use crate::model::endpoint::EndpointDescriptor;
use crate::model::http::{HttpTransport, RawResponse, Transport};
use crate::model::request::{Params, build};
use crate::model::response::{decode, decode_ack};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Client for the Resy API, generic over its transport
pub struct Client<T: Transport = HttpTransport> {
    config: Arc<Config>,
    transport: Arc<T>,
    base_url: Url,
}

impl Client<HttpTransport> {
    /// Creates a client sending requests over HTTPS
    ///
    /// # Returns
    /// * `Ok(Client)` - Ready to use; no request is made
    /// * `Err(AppError)` - The base URL is invalid or the HTTP stack failed to start
    pub fn new(config: Config) -> Result<Self, AppError> {
        Self::with_transport(Arc::new(config), Arc::new(HttpTransport::new()?))
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client over an existing transport
    pub fn with_transport(config: Arc<Config>, transport: Arc<T>) -> Result<Self, AppError> {
        let base_url = config.base_url()?;
        Ok(Self {
            config,
            transport,
            base_url,
        })
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// Per-request deadline
    pub fn timeout(&self) -> Duration {
        self.config.timeout()
    }

    /// Builds, sends and decodes one call to `descriptor`
    ///
    /// # Returns
    /// * `Ok(R)` - The decoded record
    /// * `Err(AppError)` - The first failure of building, sending or decoding
    pub async fn execute<R: DeserializeOwned>(
        &self,
        descriptor: &EndpointDescriptor<R>,
        params: &Params,
        credentials: &Credentials,
    ) -> Result<R, AppError> {
        let raw = self.exchange(descriptor, params, credentials).await?;
        decode(&raw)
    }

    /// Like [`Self::execute`], for endpoints whose success body is not needed
    pub async fn execute_ack(
        &self,
        descriptor: &EndpointDescriptor<()>,
        params: &Params,
        credentials: &Credentials,
    ) -> Result<(), AppError> {
        let raw = self.exchange(descriptor, params, credentials).await?;
        decode_ack(&raw)
    }

    async fn exchange<R>(
        &self,
        descriptor: &EndpointDescriptor<R>,
        params: &Params,
        credentials: &Credentials,
    ) -> Result<RawResponse, AppError> {
        let request = build(descriptor, params, credentials, &self.base_url)?;
        debug!("Calling {}", descriptor.name);
        self.transport.send(&request, self.timeout()).await
    }
}

impl<T: Transport> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            transport: self.transport.clone(),
            base_url: self.base_url.clone(),
        }
    }
}
