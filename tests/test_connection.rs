//! End-to-end tests over real sockets, plus the request reader

use std::io;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use jsonstub::error::ServerError;
use jsonstub::http::connection::read_request;
use jsonstub::http::response::{NO_MAPPING_BODY, UNSUPPORTED_PROTOCOL_BODY};
use jsonstub::properties::Properties;
use jsonstub::resource::ResourceResolver;
use jsonstub::server::Server;
use tempfile::TempDir;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt, ReadBuf};
use tokio::net::TcpStream;

const PERSON: &str = r#"{"name":"vignesh","age":34,"married":true,"country":"india"}"#;

struct FailingReader;

impl AsyncRead for FailingReader {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Poll::Ready(Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset")))
    }
}

/// Starts a server on an ephemeral port serving `person` from a scratch
/// resource directory. The directory must outlive the test.
async fn start_server() -> (SocketAddr, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("JSON_Files");
    std::fs::create_dir(&json).unwrap();
    std::fs::write(json.join("person.json"), PERSON).unwrap();

    let props = Properties::parse("json.file.location=./JSON_Files/\nperson=person.json\n");
    let resolver = ResourceResolver::new(Arc::new(props), dir.path());

    let server = Server::bind("127.0.0.1:0", resolver).await.unwrap();
    let addr = server.local_addr().unwrap();
    tokio::spawn(server.run());

    (addr, dir)
}

/// Sends `request`, half-closes, and reads until the server closes.
async fn exchange(addr: SocketAddr, request: &[u8]) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request).await.unwrap();
    stream.shutdown().await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8(response).unwrap()
}

#[tokio::test]
async fn test_read_request_joins_lines() {
    let input: &[u8] = b"GET /person HTTP/1.1\r\nHost: localhost\r\n\r\n";

    let request = read_request(input).await.unwrap();

    assert_eq!(request, "GET /person HTTP/1.1\nHost: localhost\n\n");
}

#[tokio::test]
async fn test_read_request_terminates_last_line() {
    let input: &[u8] = b"Hello ! This is a test input from client";

    let request = read_request(input).await.unwrap();

    assert_eq!(request, "Hello ! This is a test input from client\n");
}

#[tokio::test]
async fn test_read_request_empty_stream() {
    let input: &[u8] = b"";

    assert_eq!(read_request(input).await.unwrap(), "");
}

#[tokio::test]
async fn test_read_request_replaces_invalid_utf8() {
    let input: &[u8] = b"GET /caf\xff HTTP/1.1\n";

    let request = read_request(input).await.unwrap();

    assert_eq!(request, "GET /caf\u{FFFD} HTTP/1.1\n");
}

#[tokio::test]
async fn test_read_request_stream_error() {
    let result = read_request(FailingReader).await;

    assert!(matches!(result, Err(ServerError::Input(_))));
}

#[tokio::test]
async fn test_get_mapped_path() {
    let (addr, _dir) = start_server().await;

    let response = exchange(addr, b"GET /person HTTP/1.1\r\nHost: localhost:7000\r\n\r\n").await;

    let expected = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
        PERSON.len(),
        PERSON
    );
    assert_eq!(response, expected);
}

#[tokio::test]
async fn test_get_unmapped_path() {
    let (addr, _dir) = start_server().await;

    let response = exchange(addr, b"GET /NO_PATH HTTP/1.1\r\n\r\n").await;

    let expected = format!(
        "HTTP/1.1 400 Bad Request\r\nContent-Type: application/json\r\nContent-Length: 60\r\n\r\n{}",
        NO_MAPPING_BODY
    );
    assert_eq!(response, expected);
}

#[tokio::test]
async fn test_non_http_request() {
    let (addr, _dir) = start_server().await;

    let response = exchange(addr, b"HELLO server\n").await;

    let expected = format!(
        "HTTP/1.1 400 Bad Request\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
        UNSUPPORTED_PROTOCOL_BODY.len(),
        UNSUPPORTED_PROTOCOL_BODY
    );
    assert_eq!(response, expected);
}

#[tokio::test]
async fn test_empty_request_is_not_http() {
    let (addr, _dir) = start_server().await;

    let response = exchange(addr, b"").await;

    assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    assert!(response.ends_with(UNSUPPORTED_PROTOCOL_BODY));
}

#[tokio::test]
async fn test_other_methods_served_alike() {
    let (addr, _dir) = start_server().await;

    let response = exchange(addr, b"DELETE /person HTTP/1.1\r\n\r\n").await;

    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(response.ends_with(PERSON));
}

#[tokio::test]
async fn test_server_survives_failed_connections() {
    let (addr, _dir) = start_server().await;

    // Client that vanishes without sending anything
    drop(TcpStream::connect(addr).await.unwrap());
    let _ = exchange(addr, b"garbage").await;

    let response = exchange(addr, b"GET /person HTTP/1.1\r\n\r\n").await;
    assert!(response.ends_with(PERSON));
}

#[tokio::test]
async fn test_concurrent_clients() {
    let (addr, _dir) = start_server().await;

    // A client that never half-closes must not block others
    let mut stalled = TcpStream::connect(addr).await.unwrap();
    stalled.write_all(b"GET /person HTTP/1.1\r\n").await.unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            tokio::spawn(async move {
                let path = if i % 2 == 0 { "person" } else { "NO_PATH" };
                let request = format!("GET /{} HTTP/1.1\r\n\r\n", path);
                (i, exchange(addr, request.as_bytes()).await)
            })
        })
        .collect();

    for handle in handles {
        let (i, response) = handle.await.unwrap();
        if i % 2 == 0 {
            assert!(response.ends_with(PERSON));
        } else {
            assert!(response.ends_with(NO_MAPPING_BODY));
        }
    }
}

#[tokio::test]
async fn test_bind_conflict_is_bind_error() {
    let (addr, _dir) = start_server().await;
    let resolver = ResourceResolver::new(
        Arc::new(Properties::parse("person=person.json\n")),
        "resources",
    );

    let result = Server::bind(&addr.to_string(), resolver).await;

    assert!(matches!(result, Err(ServerError::Bind { .. })));
}
