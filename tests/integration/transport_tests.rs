use crate::common::{credentials, day};
use reqwest::Url;
use resy_client::model::endpoint::FIND_RESERVATIONS;
use resy_client::prelude::*;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn find_params() -> Params {
    Params::new()
        .with("lat", 0)
        .with("long", 0)
        .with("day", "2026-10-20")
        .with("party_size", 2)
        .with("venue_id", "1505")
}

async fn find_request(base: &str) -> ApiRequest {
    let base = Url::parse(base).unwrap();
    build(&FIND_RESERVATIONS, &find_params(), &credentials(), &base).unwrap()
}

#[tokio::test]
async fn test_silent_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        tokio::time::sleep(Duration::from_secs(10)).await;
    });

    let transport = HttpTransport::new().unwrap();
    let request = find_request(&format!("http://{addr}")).await;
    let timeout = Duration::from_millis(200);

    match transport.send(&request, timeout).await {
        Err(AppError::TimeoutError(elapsed)) => assert_eq!(elapsed, timeout),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn test_body_stall_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        socket
            .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 100\r\n\r\n{\"results\"")
            .await
            .unwrap();
        socket.flush().await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
    });

    let transport = HttpTransport::new().unwrap();
    let request = find_request(&format!("http://{addr}")).await;

    let result = transport.send(&request, Duration::from_millis(300)).await;
    assert!(matches!(result, Err(AppError::NetworkError(_))));
}

#[tokio::test]
async fn test_closed_port_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = Config::with_credentials("tok", "key").with_base_url(&format!("http://{addr}"));
    let client = Client::new(config).unwrap();

    let result = client
        .find_reservations(&credentials(), "1505", day(), 2)
        .await;
    assert!(matches!(result, Err(AppError::NetworkError(_))));
}

#[tokio::test]
async fn test_unbounded_timeout_does_not_overflow() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = HttpTransport::new().unwrap();
    let request = find_request(&format!("http://{addr}")).await;

    for timeout in [Duration::MAX, Duration::from_secs(u64::MAX)] {
        let result = transport.send(&request, timeout).await;
        assert!(matches!(result, Err(AppError::NetworkError(_))));
    }
}

#[tokio::test]
async fn test_non_success_is_still_a_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/4/find")
        .match_query(mockito::Matcher::Any)
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let transport = HttpTransport::new().unwrap();
    let request = find_request(&server.url()).await;

    let raw = transport.send(&request, Duration::from_secs(2)).await.unwrap();
    assert_eq!(raw.status.as_u16(), 502);
    assert_eq!(raw.body_text(), "bad gateway");
}
