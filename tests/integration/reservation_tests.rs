use crate::common::{authed_mock, credentials, day, mock_server};
use assert_json_diff::assert_json_eq;
use mockito::Matcher;
use resy_client::prelude::*;
use serde_json::{Value, json};

#[tokio::test]
async fn test_find_reservations() {
    let (mut server, client) = mock_server().await;
    let body = json!({
        "results": {"venues": [{"slots": [
            {"date": {"start": "2026-10-20 19:00:00"},
             "config": {"id": 11, "type": "Dining Room", "token": "rgs://cfg/11"}},
            {"date": {"start": "2026-10-20 21:15:00"},
             "config": {"id": 12, "type": "Bar", "token": "rgs://cfg/12"}}
        ]}]}
    });
    let mock = authed_mock(&mut server, "GET", "/4/find")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("venue_id".into(), "1505".into()),
            Matcher::UrlEncoded("day".into(), "2026-10-20".into()),
            Matcher::UrlEncoded("party_size".into(), "2".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let slots = client
        .find_reservations(&credentials(), "1505", day(), 2)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].config.token, "rgs://cfg/11");
    assert_eq!(
        slots[1].start_time().unwrap(),
        day().and_hms_opt(21, 15, 0).unwrap()
    );
}

#[tokio::test]
async fn test_find_reservations_not_found() {
    let (mut server, client) = mock_server().await;
    let mock = server
        .mock("GET", "/4/find")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let result = client
        .find_reservations(&credentials(), "999999", day(), 2)
        .await;

    mock.assert_async().await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_find_reservations_rate_limited() {
    let (mut server, client) = mock_server().await;
    let _mock = server
        .mock("GET", "/4/find")
        .match_query(Matcher::Any)
        .with_status(429)
        .with_header("retry-after", "7")
        .create_async()
        .await;

    match client
        .find_reservations(&credentials(), "1505", day(), 2)
        .await
    {
        Err(AppError::RateLimited { retry_after }) => {
            assert_eq!(retry_after, Some(std::time::Duration::from_secs(7)))
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn test_reservation_details_sends_json() {
    let (mut server, client) = mock_server().await;
    let mock = authed_mock(&mut server, "POST", "/3/details")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "config_id": "rgs://cfg/11",
            "date": "2026-10-20",
            "party_size": 4
        })))
        .with_status(200)
        .with_body(
            json!({
                "user": {"payment_methods": [{"id": 77}]},
                "book_token": {"value": "bt-1"}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let details = client
        .reservation_details(&credentials(), "rgs://cfg/11", day(), 4)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(details.book_token.value, "bt-1");
    assert_eq!(details.payment_method(), Some(&PaymentMethod { id: 77 }));
}

#[tokio::test]
async fn test_book_reservation_sends_form() {
    let (mut server, client) = mock_server().await;
    let mock = authed_mock(&mut server, "POST", "/3/book")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("book_token".into(), "bt-1".into()),
            Matcher::UrlEncoded("struct_payment_method".into(), r#"{"id":77}"#.into()),
            Matcher::UrlEncoded("source_id".into(), BOOKING_SOURCE_ID.into()),
        ]))
        .with_status(201)
        .with_body(r#"{"reservation_id": 9001, "status": "confirmed", "resy_token": "rt-9001"}"#)
        .create_async()
        .await;

    let reservation = client
        .book_reservation(&credentials(), "bt-1", PaymentMethod { id: 77 })
        .await
        .unwrap();

    mock.assert_async().await;
    let expected = Reservation {
        id: 9001,
        status: Some("confirmed".to_string()),
        resy_token: Some("rt-9001".to_string()),
    };
    assert_eq!(reservation, expected);

    let echoed: Value = serde_json::to_value(&reservation).unwrap();
    assert_json_eq!(
        echoed,
        json!({"id": 9001, "status": "confirmed", "resy_token": "rt-9001"})
    );
}

#[tokio::test]
async fn test_book_reservation_auth_failure() {
    let (mut server, client) = mock_server().await;
    let _mock = server
        .mock("POST", "/3/book")
        .with_status(401)
        .with_body(r#"{"id": 1, "status": "confirmed"}"#)
        .create_async()
        .await;

    let result = client
        .book_reservation(&credentials(), "bt-1", PaymentMethod { id: 77 })
        .await;

    assert!(matches!(result, Err(AppError::AuthenticationFailed)));
}

#[tokio::test]
async fn test_cancel_reservation() {
    let (mut server, client) = mock_server().await;
    let mock = authed_mock(&mut server, "POST", "/3/cancel")
        .match_body(Matcher::UrlEncoded("resy_token".into(), "rt-9001".into()))
        .with_status(200)
        .with_body(r#"{"payment": {"transaction": {"refund": 1}}}"#)
        .create_async()
        .await;

    client
        .cancel_reservation(&credentials(), "rt-9001")
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_upstream_error_keeps_body() {
    let (mut server, client) = mock_server().await;
    let _mock = server
        .mock("POST", "/3/cancel")
        .with_status(500)
        .with_body("kitchen on fire")
        .create_async()
        .await;

    match client.cancel_reservation(&credentials(), "rt-9001").await {
        Err(AppError::UpstreamError { status, body }) => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "kitchen on fire");
        }
        other => panic!("unexpected: {other:?}"),
    }
}
