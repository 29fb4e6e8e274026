/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use anyhow::{Context, anyhow};
use chrono::{Local, NaiveDate};
use clap::{ArgAction, Args};
use resy_client::prelude::*;
use tracing::Level;

/// Layout of dates given on the command line
pub const CLI_DATE_FORMAT: &str = "%Y%m%d";

/// Credential and logging flags shared by every tool
#[derive(Args, Clone)]
pub struct AuthArgs {
    /// Resy API key, as sent in the X-Resy-Auth-Token header
    #[arg(short = 'k', long, env = "RESY_API_KEY", hide_env_values = true)]
    pub api_key: String,
    /// Auth token of a logged-in Resy session
    #[arg(short, long, env = "RESY_AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: String,
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl AuthArgs {
    /// Installs the logger at the requested verbosity
    pub fn init_logging(&self) {
        match self.verbose {
            0 => setup_logger(),
            1 => setup_logger_with_level(Level::DEBUG),
            _ => setup_logger_with_level(Level::TRACE),
        }
    }

    /// Validated credentials
    pub fn credentials(&self) -> anyhow::Result<Credentials> {
        Credentials::new(&self.auth_token, &self.api_key).map_err(explain)
    }

    /// Configuration built from these flags' tokens, with API settings from the environment
    pub fn config(&self) -> Config {
        Config::with_credentials(&self.auth_token, &self.api_key).with_env_overrides()
    }

    /// Client for [`AuthArgs::config`]
    pub fn client(&self) -> anyhow::Result<Client> {
        Client::new(self.config()).context("failed to create the Resy client")
    }
}

/// Party and day flags shared by the search and booking tools
#[derive(Args, Clone)]
pub struct QueryArgs {
    /// Size of the party
    #[arg(short, long, env = "RESY_PARTY_SIZE", default_value_t = DEFAULT_PARTY_SIZE)]
    pub party_size: u8,
    /// Day to search, YYYYMMDD; defaults to today
    #[arg(short, long, env = "RESY_DATE")]
    pub date: Option<String>,
}

impl QueryArgs {
    /// The requested day, or today
    pub fn day(&self) -> anyhow::Result<NaiveDate> {
        parse_day(self.date.as_deref())
    }
}

/// Parses a `YYYYMMDD` day, defaulting to today
///
/// # Returns
/// * `Ok(NaiveDate)` - The parsed day, or today's local date for `None`
/// * `Err` - The text is not a `YYYYMMDD` date
pub fn parse_day(date: Option<&str>) -> anyhow::Result<NaiveDate> {
    match date {
        Some(text) => NaiveDate::parse_from_str(text.trim(), CLI_DATE_FORMAT)
            .map_err(|_| anyhow!("date must be in YYYYMMDD format, got {text:?}")),
        None => Ok(Local::now().date_naive()),
    }
}

/// Turns a client error into a message fit for the terminal
///
/// Credential failures get instructions for refreshing the tokens; anything
/// else keeps its own message.
pub fn explain(err: AppError) -> anyhow::Error {
    if err.is_auth_failure() {
        anyhow!(
            "{err}\n\nResy rejected the credentials. Log in at https://resy.com, open the \
             browser developer tools and copy the X-Resy-Auth-Token and Authentication \
             values of any api.resy.com request into RESY_API_KEY and RESY_AUTH_TOKEN."
        )
    } else {
        anyhow::Error::new(err)
    }
}
