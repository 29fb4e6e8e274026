/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! HTTP transport
//!
//! A [`Transport`] performs exactly one exchange per call and never retries.
//! Status classification is left to the response decoder, so any completed
//! exchange, 2xx or not, comes back as a [`RawResponse`].

use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::request::ApiRequest;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tokio::time::{Instant, timeout_at};
use tracing::{debug, warn};

/// Status, headers and body of a completed exchange
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    /// Status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body bytes
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates a response with no headers
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Body decoded lossily as UTF-8
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

// Roughly thirty years, the same horizon tokio uses for "never".
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// `now + timeout`, saturating to a far-future instant instead of overflowing
fn deadline_after(timeout: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(timeout)
        .or_else(|| now.checked_add(FAR_FUTURE))
        .unwrap_or(now)
}

/// Sends built requests
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one HTTP exchange
    ///
    /// # Arguments
    /// * `request` - The request to send
    /// * `timeout` - Deadline for the whole exchange
    ///
    /// # Returns
    /// * `Ok(RawResponse)` - Any completed exchange, whatever its status
    /// * `Err(AppError::TimeoutError)` - No response headers before the deadline
    /// * `Err(AppError::NetworkError)` - Connection or DNS failure, or the
    ///   deadline expired while reading the body
    async fn send(&self, request: &ApiRequest, timeout: Duration) -> Result<RawResponse, AppError>;
}

/// [`Transport`] backed by a shared `reqwest` client
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with its own connection pool
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest, timeout: Duration) -> Result<RawResponse, AppError> {
        let deadline = deadline_after(timeout);
        debug!("{} {}", request.method, request.url);

        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = match timeout_at(deadline, builder.send()).await {
            Err(_) => {
                warn!("No response from {} within {:?}", request.url.path(), timeout);
                return Err(AppError::TimeoutError(timeout));
            }
            Ok(Err(e)) if e.is_timeout() => return Err(AppError::TimeoutError(timeout)),
            Ok(Err(e)) => {
                warn!("Request to {} failed: {}", request.url.path(), e);
                return Err(AppError::NetworkError(e.to_string()));
            }
            Ok(Ok(response)) => response,
        };

        let status = response.status();
        let headers = response.headers().clone();
        debug!("Response status: {}", status);

        let body = match timeout_at(deadline, response.bytes()).await {
            Err(_) => {
                return Err(AppError::NetworkError(format!(
                    "deadline of {timeout:?} expired while reading the body"
                )));
            }
            Ok(result) => result.map_err(|e| AppError::NetworkError(e.to_string()))?,
        };

        Ok(RawResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}
