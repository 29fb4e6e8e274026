/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Response decoding
//!
//! Classifies the status of a [`RawResponse`] and maps success bodies into
//! typed records. Decoding is all-or-nothing: a record is either complete or
//! the call fails.

use crate::error::AppError;
use crate::model::http::RawResponse;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{error, warn};

/// Decodes a response into `R`
///
/// # Returns
/// * `Ok(R)` - 2xx with a body matching `R`
/// * `Err(AppError::MalformedResponse)` - 2xx whose body is not JSON
/// * `Err(AppError::SchemaMismatch)` - 2xx JSON missing or mistyping a field of `R`
/// * `Err(AppError::AuthenticationFailed)` - 401 or 403
/// * `Err(AppError::NotFound)` - 404
/// * `Err(AppError::RateLimited)` - 429
/// * `Err(AppError::UpstreamError)` - any other status
pub fn decode<R: DeserializeOwned>(raw: &RawResponse) -> Result<R, AppError> {
    check_status(raw)?;

    let value: Value = serde_json::from_slice(&raw.body)
        .map_err(|e| AppError::MalformedResponse(e.to_string()))?;

    serde_path_to_error::deserialize(value).map_err(|err| {
        let path = err.path().to_string();
        let reason = err.into_inner().to_string();
        let field = match (missing_field(&reason), path.as_str()) {
            (Some(name), ".") => name.to_string(),
            (Some(name), parent) => format!("{parent}.{name}"),
            (None, ".") => "(root)".to_string(),
            (None, _) => path,
        };
        warn!("Response does not match the expected schema at {}", field);
        AppError::SchemaMismatch { field, reason }
    })
}

/// Applies the status classification of [`decode`] and ignores the body
pub fn decode_ack(raw: &RawResponse) -> Result<(), AppError> {
    check_status(raw)
}

fn check_status(raw: &RawResponse) -> Result<(), AppError> {
    let status = raw.status;
    if status.is_success() {
        return Ok(());
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            warn!("Upstream rejected the credentials ({})", status);
            Err(AppError::AuthenticationFailed)
        }
        StatusCode::NOT_FOUND => Err(AppError::NotFound),
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after = retry_after(&raw.headers);
            warn!("Rate limited, retry after {:?}", retry_after);
            Err(AppError::RateLimited { retry_after })
        }
        _ => {
            let body = raw.body_text();
            error!("Request failed with status {}: {}", status, body);
            Err(AppError::UpstreamError { status, body })
        }
    }
}

/// Parses `Retry-After` as delta-seconds or an HTTP date
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    let value = headers.get(RETRY_AFTER)?.to_str().ok()?.trim();
    if let Ok(secs) = value.parse::<u64>() {
        return Some(Duration::from_secs(secs));
    }
    let at = DateTime::parse_from_rfc2822(value).ok()?;
    let secs = (at.with_timezone(&Utc) - Utc::now()).num_seconds().max(0);
    Some(Duration::from_secs(secs as u64))
}

fn missing_field(reason: &str) -> Option<&str> {
    reason
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
}
