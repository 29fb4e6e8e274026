/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::error::AppError;
use crate::model::auth::Credentials;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Raw credential values as found in the environment
///
/// Turned into validated [`Credentials`] by [`Config::credentials`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialsConfig {
    /// Auth token of a logged-in Resy session
    pub auth_token: Option<String>,
    /// Resy API key
    pub api_key: Option<String>,
}

impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = |v: &Option<String>| if v.is_some() { "[REDACTED]" } else { "None" };
        f.debug_struct("CredentialsConfig")
            .field("auth_token", &shown(&self.auth_token))
            .field("api_key", &shown(&self.api_key))
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the Resy API
    pub base_url: String,
    /// Per-request deadline in seconds
    pub timeout: u64,
}

impl RestApiConfig {
    /// Reads `RESY_BASE_URL` and `RESY_TIMEOUT_SECS`, falling back to defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: get_env_or_default("RESY_BASE_URL", DEFAULT_BASE_URL.to_string()),
            timeout: get_env_or_default("RESY_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
        }
    }
}

fn load_dotenv() {
    match dotenv() {
        Ok(_) => debug!("Successfully loaded .env file"),
        Err(e) => debug!("Failed to load .env file: {e}"),
    }
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Main configuration for the Resy client
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Credential values
    pub credentials: CredentialsConfig,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Loads the configuration from the environment and an optional `.env` file
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `RESY_AUTH_TOKEN` | none |
    /// | `RESY_API_KEY` | none |
    /// | `RESY_BASE_URL` | `https://api.resy.com` |
    /// | `RESY_TIMEOUT_SECS` | `30` |
    pub fn new() -> Self {
        load_dotenv();

        let auth_token = get_env_or_none::<String>("RESY_AUTH_TOKEN");
        let api_key = get_env_or_none::<String>("RESY_API_KEY");
        if auth_token.is_none() {
            warn!("RESY_AUTH_TOKEN not found in environment variables or .env file");
        }
        if api_key.is_none() {
            warn!("RESY_API_KEY not found in environment variables or .env file");
        }

        Config {
            credentials: CredentialsConfig {
                auth_token,
                api_key,
            },
            rest_api: RestApiConfig::from_env(),
        }
    }

    /// Configuration with explicit credentials and default API settings
    #[must_use]
    pub fn with_credentials(auth_token: &str, api_key: &str) -> Self {
        Self {
            credentials: CredentialsConfig {
                auth_token: Some(auth_token.to_string()),
                api_key: Some(api_key.to_string()),
            },
            rest_api: RestApiConfig::default(),
        }
    }

    /// Takes the API settings from the environment and `.env`, keeping the credentials
    ///
    /// Credential variables are not consulted, so nothing is warned about them.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        load_dotenv();
        self.rest_api = RestApiConfig::from_env();
        self
    }

    /// Replaces the base URL, e.g. to point at a mock server
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.rest_api.base_url = base_url.to_string();
        self
    }

    /// Replaces the per-request deadline
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.rest_api.timeout = timeout.as_secs().max(1);
        self
    }

    /// Validated credentials
    ///
    /// # Returns
    /// * `Ok(Credentials)` - Both values are present and valid
    /// * `Err(AppError::InvalidCredentials)` - A value is missing or invalid
    pub fn credentials(&self) -> Result<Credentials, AppError> {
        let auth_token = self.credentials.auth_token.as_deref().unwrap_or_default();
        let api_key = self.credentials.api_key.as_deref().unwrap_or_default();
        Credentials::new(auth_token, api_key)
    }

    /// Parsed base URL
    pub fn base_url(&self) -> Result<Url, AppError> {
        let url = Url::parse(&self.rest_api.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "unsupported scheme in base url: {}",
                url.scheme()
            )));
        }
        Ok(url)
    }

    /// Per-request deadline, clamped to between one second and a day
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.rest_api.timeout.clamp(1, MAX_TIMEOUT_SECS))
    }
}
