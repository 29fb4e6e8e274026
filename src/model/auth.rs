/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Credential holder for the Resy API
//!
//! Resy authenticates every private call with two opaque values a user lifts
//! from a logged-in browser session: the API key and the auth token. This
//! module validates them once and projects them into request headers.

use crate::error::AppError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::fmt;

/// Immutable pair of Resy credentials
///
/// Both values are validated at construction, so a `Credentials` value can
/// always be applied to a request. `Debug` never prints the values.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    auth_token: HeaderValue,
    api_key: HeaderValue,
}

impl Credentials {
    /// Validates and wraps the two tokens
    ///
    /// # Arguments
    /// * `auth_token` - The per-session auth token
    /// * `api_key` - The client API key
    ///
    /// # Returns
    /// * `Ok(Credentials)` - Both values are usable as header material
    /// * `Err(AppError::InvalidCredentials)` - A value is empty or contains
    ///   characters that cannot appear in an HTTP header
    pub fn new(auth_token: impl AsRef<str>, api_key: impl AsRef<str>) -> Result<Self, AppError> {
        let auth_token = auth_token.as_ref();
        let api_key = api_key.as_ref();

        let api_key = header_value("api_key", api_key, api_key)?;
        // The token travels inside a quoted literal; quotes and escapes would break it.
        if auth_token.contains(['"', '\\']) {
            return Err(AppError::InvalidCredentials(
                "auth_token must not contain quotes or backslashes".to_string(),
            ));
        }
        let auth_token = header_value(
            "auth_token",
            auth_token,
            &format!("api_key=\"{auth_token}\""),
        )?;

        Ok(Self {
            auth_token,
            api_key,
        })
    }

    /// Inserts the two authentication headers into `headers`
    ///
    /// Existing values under the same names are replaced.
    pub fn apply_to(&self, headers: &mut HeaderMap) {
        headers.insert(
            HeaderName::from_static(AUTH_TOKEN_HEADER_NAME),
            self.api_key.clone(),
        );
        headers.insert(
            HeaderName::from_static(AUTHENTICATION_HEADER_NAME),
            self.auth_token.clone(),
        );
    }
}

fn header_value(name: &str, raw: &str, rendered: &str) -> Result<HeaderValue, AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::InvalidCredentials(format!("{name} is empty")));
    }
    let mut value = HeaderValue::from_str(rendered).map_err(|_| {
        AppError::InvalidCredentials(format!("{name} contains invalid header characters"))
    })?;
    value.set_sensitive(true);
    Ok(value)
}

// `HeaderName::from_static` requires lowercase input.
const AUTH_TOKEN_HEADER_NAME: &str = "x-resy-auth-token";
const AUTHENTICATION_HEADER_NAME: &str = "authentication";

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("auth_token", &"[REDACTED]")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
