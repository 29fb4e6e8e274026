use reqwest::StatusCode;
use resy_client::error::AppError;
use std::time::Duration;

#[test]
fn test_app_error_display_authentication_failed() {
    let error = AppError::AuthenticationFailed;
    assert_eq!(error.to_string(), "authentication failed");
}

#[test]
fn test_app_error_display_not_found() {
    let error = AppError::NotFound;
    assert_eq!(error.to_string(), "not found");
}

#[test]
fn test_app_error_display_missing_parameter() {
    let error = AppError::MissingParameter("venue_id".to_string());
    assert_eq!(error.to_string(), "missing parameter: venue_id");
}

#[test]
fn test_app_error_display_invalid_parameter() {
    let error = AppError::invalid_parameter("item_id", "would corrupt the URL");
    assert_eq!(
        error.to_string(),
        "invalid parameter item_id: would corrupt the URL"
    );
}

#[test]
fn test_app_error_display_rate_limited() {
    let error = AppError::RateLimited { retry_after: None };
    assert_eq!(error.to_string(), "rate limited");

    let error = AppError::RateLimited {
        retry_after: Some(Duration::from_secs(30)),
    };
    assert_eq!(error.to_string(), "rate limited, retry after 30s");
}

#[test]
fn test_app_error_display_upstream() {
    let error = AppError::UpstreamError {
        status: StatusCode::BAD_REQUEST,
        body: "bad day".to_string(),
    };
    assert!(error.to_string().contains("400"));
    assert!(error.to_string().contains("bad day"));
}

#[test]
fn test_app_error_display_schema_mismatch() {
    let error = AppError::SchemaMismatch {
        field: "results.venues".to_string(),
        reason: "missing field `venues`".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "schema mismatch at results.venues: missing field `venues`"
    );
}

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::MalformedResponse(_) => (),
        _ => panic!("Expected MalformedResponse"),
    }
}

#[test]
fn test_app_error_auth_failure_predicate() {
    assert!(AppError::AuthenticationFailed.is_auth_failure());
    assert!(AppError::InvalidCredentials("empty".to_string()).is_auth_failure());
    assert!(!AppError::NotFound.is_auth_failure());
}
