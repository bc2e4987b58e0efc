//! Tests for the HTTP mail provider against a local stub server

use reqwest::StatusCode;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use linka_shared::config::{MailConfig, MailProvider};

use crate::mail::http_mail::{is_retryable_status, OutboundMail};
use crate::mail::{HttpMailService, MailService};
use crate::InfrastructureError;

/// Serve one canned response per connection, in order; the last one repeats
async fn spawn_stub(responses: Vec<(u16, &'static str)>) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let n = counter.fetch_add(1, Ordering::SeqCst);
            let (status, body) = responses[n.min(responses.len() - 1)];

            read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{}/send", addr), hits)
}

/// Read headers and the declared body so the client sees a clean exchange
async fn read_request(socket: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let Ok(n) = socket.read(&mut chunk).await else {
            return;
        };
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                return;
            }
        }
    }
}

fn config_for(url: String) -> MailConfig {
    MailConfig {
        provider: MailProvider::Http,
        api_url: url,
        api_key: "test-key".to_string(),
        max_retries: 3,
        retry_delay_ms: 1,
        ..MailConfig::default()
    }
}

#[test]
fn test_new_requires_api_url() {
    let result = HttpMailService::new(MailConfig::default());
    match result {
        Err(InfrastructureError::Config(msg)) => assert!(msg.contains("MAIL_API_URL")),
        _ => panic!("Expected config error"),
    }
}

#[test]
fn test_retryable_statuses() {
    assert!(is_retryable_status(StatusCode::INTERNAL_SERVER_ERROR));
    assert!(is_retryable_status(StatusCode::SERVICE_UNAVAILABLE));
    assert!(is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
    assert!(!is_retryable_status(StatusCode::BAD_REQUEST));
    assert!(!is_retryable_status(StatusCode::UNAUTHORIZED));
}

#[test]
fn test_outbound_payload_shape() {
    let mail = OutboundMail {
        from: "no-reply@linka.app",
        to: "ana@uni.edu",
        subject: "Code",
        text: "482913",
    };
    let json = serde_json::to_value(&mail).unwrap();
    assert_eq!(json["from"], "no-reply@linka.app");
    assert_eq!(json["to"], "ana@uni.edu");
    assert_eq!(json["subject"], "Code");
    assert_eq!(json["text"], "482913");
}

#[tokio::test]
async fn test_send_returns_provider_message_id() {
    let (url, hits) = spawn_stub(vec![(200, r#"{"id":"msg-42"}"#)]).await;
    let service = HttpMailService::new(config_for(url)).unwrap();

    let id = service
        .send_verification_code("ana@uni.edu", "482913", 10)
        .await
        .unwrap();
    assert_eq!(id, "msg-42");
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_send_retries_server_errors() {
    let (url, hits) = spawn_stub(vec![
        (503, r#"{"error":"busy"}"#),
        (502, r#"{"error":"busy"}"#),
        (200, r#"{"message_id":"msg-7"}"#),
    ])
    .await;
    let service = HttpMailService::new(config_for(url)).unwrap();

    let id = service.send_email("ana@uni.edu", "S", "B").await.unwrap();
    assert_eq!(id, "msg-7");
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_send_gives_up_after_max_retries() {
    let (url, hits) = spawn_stub(vec![(500, r#"{"error":"down"}"#)]).await;
    let service = HttpMailService::new(config_for(url)).unwrap();

    let result = service.send_email("ana@uni.edu", "S", "B").await;
    match result {
        Err(InfrastructureError::Mail(msg)) => assert!(msg.contains("after 3 attempts")),
        other => panic!("Expected mail error, got {:?}", other),
    }
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_send_does_not_retry_client_errors() {
    let (url, hits) = spawn_stub(vec![(422, r#"{"error":"bad recipient"}"#)]).await;
    let service = HttpMailService::new(config_for(url)).unwrap();

    let result = service.send_email("ana@uni.edu", "S", "B").await;
    assert!(matches!(result, Err(InfrastructureError::Mail(_))));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_success_without_id_gets_generated_id() {
    let (url, _) = spawn_stub(vec![(202, "{}")]).await;
    let service = HttpMailService::new(config_for(url)).unwrap();

    let id = service.send_email("ana@uni.edu", "S", "B").await.unwrap();
    assert!(id.starts_with("http_"));
}
