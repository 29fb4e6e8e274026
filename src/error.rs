/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error taxonomy shared by every layer of the client.
//!
//! Each variant maps to one failure kind a caller may want to react to
//! differently. The library never recovers locally; everything surfaces to the
//! immediate caller.

use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Errors produced by the Resy client
#[derive(Debug, Error)]
pub enum AppError {
    /// A credential value was empty or not valid header material
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// A parameter required by the endpoint was not supplied
    #[error("missing parameter: {0}")]
    MissingParameter(String),

    /// A parameter was undeclared or its value cannot be encoded safely
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Connection, DNS or body transfer failure
    #[error("network error: {0}")]
    NetworkError(String),

    /// The deadline elapsed before response headers arrived
    #[error("request timed out after {0:?}")]
    TimeoutError(Duration),

    /// A success response whose body is not JSON
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// JSON did not match the expected record shape
    #[error("schema mismatch at {field}: {reason}")]
    SchemaMismatch {
        /// Path of the first missing or mismatched field
        field: String,
        /// Deserializer message
        reason: String,
    },

    /// 401 or 403 from upstream; the tokens are invalid or expired
    #[error("authentication failed")]
    AuthenticationFailed,

    /// 404 from upstream
    #[error("not found")]
    NotFound,

    /// 429 from upstream
    #[error("rate limited{}", retry_hint(.retry_after))]
    RateLimited {
        /// Parsed `Retry-After` hint, when upstream sent one
        retry_after: Option<Duration>,
    },

    /// Any other non-2xx status
    #[error("upstream error {status}: {body}")]
    UpstreamError {
        /// Status code returned by upstream
        status: StatusCode,
        /// Raw body, lossily decoded, for diagnostics
        body: String,
    },

    /// Environment or configuration problem
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Shorthand for [`AppError::InvalidParameter`]
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Returns true when the caller should prompt for fresh tokens
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            AppError::AuthenticationFailed | AppError::InvalidCredentials(_)
        )
    }
}

fn retry_hint(retry_after: &Option<Duration>) -> String {
    match retry_after {
        Some(delay) => format!(", retry after {}s", delay.as_secs()),
        None => String::new(),
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            // reqwest does not expose the configured deadline on the error
            AppError::TimeoutError(Duration::ZERO)
        } else {
            AppError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("invalid base url: {err}"))
    }
}
