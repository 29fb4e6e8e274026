use crate::common::{authed_mock, credentials, mock_server};
use mockito::Matcher;
use resy_client::prelude::*;
use serde_json::json;

fn spec() -> NotificationSpec {
    NotificationSpec {
        venue_id: 6194,
        party_size: 2,
        day: "2026-10-20".to_string(),
        time_preferred_start: "19:00".to_string(),
        time_preferred_end: "22:00".to_string(),
        service_type_id: 2,
    }
}

#[tokio::test]
async fn test_list_notifications() {
    let (mut server, client) = mock_server().await;
    let mock = authed_mock(&mut server, "GET", "/3/notify")
        .with_status(200)
        .with_body(json!({"notify": [{"specs": spec()}]}).to_string())
        .create_async()
        .await;

    let notifications = client.list_notifications(&credentials()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].specs, spec());
}

#[tokio::test]
async fn test_create_notification() {
    let (mut server, client) = mock_server().await;
    let mock = authed_mock(&mut server, "POST", "/3/notify")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::to_value(spec()).unwrap()))
        .with_status(201)
        .create_async()
        .await;

    client
        .create_notification(&credentials(), &spec())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_notification() {
    let (mut server, client) = mock_server().await;
    let mock = authed_mock(&mut server, "DELETE", "/3/notify")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("venue_id".into(), "6194".into()),
            Matcher::UrlEncoded("day".into(), "2026-10-20".into()),
            Matcher::UrlEncoded("num_seats".into(), "2".into()),
            Matcher::UrlEncoded("service_type_id".into(), "2".into()),
        ]))
        .with_status(200)
        .create_async()
        .await;

    client
        .delete_notification(&credentials(), &spec())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_notifications_forbidden() {
    let (mut server, client) = mock_server().await;
    let _mock = server
        .mock("GET", "/3/notify")
        .with_status(403)
        .create_async()
        .await;

    let result = client.list_notifications(&credentials()).await;
    assert!(result.unwrap_err().is_auth_failure());
}
