// Common utilities for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use resy_client::prelude::*;
use std::time::Duration;

pub const AUTH_TOKEN: &str = "test-auth-token";
pub const API_KEY: &str = "test-api-key";

/// Creates a client pointed at `base_url`
pub fn create_test_client(base_url: &str) -> Client {
    setup_logger();
    let config = Config::with_credentials(AUTH_TOKEN, API_KEY)
        .with_base_url(base_url)
        .with_timeout(Duration::from_secs(2));
    Client::new(config).expect("Failed to create client")
}

/// Starts a mock server and a client targeting it
pub async fn mock_server() -> (ServerGuard, Client) {
    let server = Server::new_async().await;
    let client = create_test_client(&server.url());
    (server, client)
}

pub fn credentials() -> Credentials {
    Credentials::new(AUTH_TOKEN, API_KEY).expect("valid credentials")
}

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 20).expect("valid date")
}

/// Starts a mock that only matches requests carrying both credential headers
pub fn authed_mock(server: &mut ServerGuard, method: &str, path: &str) -> Mock {
    server
        .mock(method, path)
        .match_header("x-resy-auth-token", API_KEY)
        .match_header(
            "authentication",
            Matcher::Exact(format!("api_key=\"{AUTH_TOKEN}\"")),
        )
}
