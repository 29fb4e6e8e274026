use crate::common::{credentials, day, stub_client};
use reqwest::{Method, StatusCode};
use resy_client::prelude::*;
use serde_json::{Value, json};

fn unauthorized() -> RawResponse {
    RawResponse::new(StatusCode::UNAUTHORIZED, r#"{"message": "Unauthorized"}"#)
}

fn spec() -> NotificationSpec {
    NotificationSpec {
        venue_id: 1505,
        party_size: 2,
        day: "2026-10-20".to_string(),
        time_preferred_start: "18:00".to_string(),
        time_preferred_end: "21:00".to_string(),
        service_type_id: 2,
    }
}

fn city() -> RestaurantCityConfig {
    RestaurantCityConfig {
        country_code: "US".to_string(),
        latitude: 40.7128,
        longitude: -74.006,
        url_slug: "new-york-ny".to_string(),
    }
}

#[tokio::test]
async fn test_every_operation_maps_401_to_authentication_failed() {
    let (client, transport) = stub_client(unauthorized());
    let creds = credentials();

    let results: Vec<Result<(), AppError>> = vec![
        client
            .find_reservations(&creds, "1505", day(), 2)
            .await
            .map(|_| ()),
        client
            .reservation_details(&creds, "cfg-token", day(), 2)
            .await
            .map(|_| ()),
        client
            .book_reservation(&creds, "book-token", PaymentMethod { id: 5 })
            .await
            .map(|_| ()),
        client.cancel_reservation(&creds, "resy-token").await,
        client.city_configs(&creds).await.map(|_| ()),
        client.search_venue(&creds, &city(), "Carbone").await.map(|_| ()),
        client.venue(&creds, "1505").await.map(|_| ()),
        client.list_notifications(&creds).await.map(|_| ()),
        client.create_notification(&creds, &spec()).await,
        client.delete_notification(&creds, &spec()).await,
    ];

    assert_eq!(transport.sent_count(), results.len());
    for result in results {
        assert!(matches!(result, Err(AppError::AuthenticationFailed)));
    }
}

#[tokio::test]
async fn test_invalid_credentials_never_reach_the_transport() {
    assert!(matches!(
        Credentials::new("tok", ""),
        Err(AppError::InvalidCredentials(_))
    ));

    let (client, transport) = stub_client(RawResponse::new(StatusCode::OK, "{}"));
    let config = client
        .get_config()
        .as_ref()
        .clone();
    let empty_key = Config {
        credentials: CredentialsConfig {
            auth_token: Some("tok".to_string()),
            api_key: Some("   ".to_string()),
        },
        ..config
    };
    assert!(matches!(
        empty_key.credentials(),
        Err(AppError::InvalidCredentials(_))
    ));
    assert_eq!(transport.sent_count(), 0);
}

#[tokio::test]
async fn test_find_reservations_flattens_slots() {
    let body = json!({
        "results": {"venues": [{"slots": [
            {"date": {"start": "2026-10-20 19:00:00"},
             "config": {"id": 1, "type": "Dining Room", "token": "t1"}},
            {"date": {"start": "2026-10-20 20:30:00"},
             "config": {"id": 2, "type": "Patio", "token": "t2"}}
        ]}]}
    });
    let (client, transport) = stub_client(RawResponse::new(StatusCode::OK, body.to_string()));

    let slots = client
        .find_reservations(&credentials(), "1505", day(), 2)
        .await
        .unwrap();

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[1].config.slot_type, "Patio");

    let sent = transport.last_request();
    assert_eq!(sent.method, Method::GET);
    assert_eq!(sent.url.path(), "/4/find");
    assert!(sent.body.is_none());
    let query: Vec<(String, String)> = sent.url.query_pairs().into_owned().collect();
    assert!(query.contains(&("venue_id".to_string(), "1505".to_string())));
    assert!(query.contains(&("day".to_string(), "2026-10-20".to_string())));
    assert!(query.contains(&("party_size".to_string(), "2".to_string())));
}

#[tokio::test]
async fn test_booked_reservation_round_trips() {
    let reservation = Reservation {
        id: 42,
        status: Some("confirmed".to_string()),
        resy_token: Some("rt-1".to_string()),
    };
    let body = serde_json::to_string(&reservation).unwrap();
    let (client, transport) = stub_client(RawResponse::new(StatusCode::OK, body));

    let booked = client
        .book_reservation(&credentials(), "book-token", PaymentMethod { id: 5 })
        .await
        .unwrap();

    assert_eq!(booked, reservation);
    let sent = transport.last_request();
    assert_eq!(sent.method, Method::POST);
    assert_eq!(
        sent.headers.get("content-type").unwrap(),
        "application/x-www-form-urlencoded"
    );
    let form = sent.body_text().unwrap();
    assert!(form.contains("book_token=book-token"));
    assert!(form.contains("source_id=resy.com-venue-details"));
}

#[tokio::test]
async fn test_notification_spec_survives_the_create_body() {
    let (client, transport) = stub_client(RawResponse::new(StatusCode::CREATED, ""));

    client
        .create_notification(&credentials(), &spec())
        .await
        .unwrap();

    let sent = transport.last_request();
    assert_eq!(sent.method, Method::POST);
    let body: Value = serde_json::from_slice(sent.body.as_deref().unwrap()).unwrap();
    let echoed: NotificationSpec = serde_json::from_value(body).unwrap();
    assert_eq!(echoed, spec());
}

#[tokio::test]
async fn test_delete_notification_renames_party_size() {
    let (client, transport) = stub_client(RawResponse::new(StatusCode::OK, ""));

    client
        .delete_notification(&credentials(), &spec())
        .await
        .unwrap();

    let sent = transport.last_request();
    assert_eq!(sent.method, Method::DELETE);
    let query: Vec<(String, String)> = sent.url.query_pairs().into_owned().collect();
    assert!(query.contains(&("num_seats".to_string(), "2".to_string())));
    assert!(!query.iter().any(|(k, _)| k == "party_size"));
}

#[tokio::test]
async fn test_search_venue_without_hits_is_none() {
    let body = json!({"search": {"hits": []}});
    let (client, _) = stub_client(RawResponse::new(StatusCode::OK, body.to_string()));

    let hit = client
        .search_venue(&credentials(), &city(), "Nowhere")
        .await
        .unwrap();
    assert!(hit.is_none());
}

#[tokio::test]
async fn test_schema_mismatch_surfaces_from_operation() {
    let (client, _) = stub_client(RawResponse::new(StatusCode::OK, r#"{"results": {}}"#));

    match client.find_reservations(&credentials(), "1505", day(), 2).await {
        Err(AppError::SchemaMismatch { field, .. }) => assert_eq!(field, "results.venues"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_not_found_from_blocking_caller() {
    let (client, transport) = stub_client(RawResponse::new(StatusCode::NOT_FOUND, ""));

    let result = tokio_test::block_on(client.venue(&credentials(), "404"));

    assert!(matches!(result, Err(AppError::NotFound)));
    assert_eq!(transport.last_request().url.query(), Some("id=404"));
}
