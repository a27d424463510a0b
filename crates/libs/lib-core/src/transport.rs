//! # HTTP Transport
//!
//! The seam between the clients and whatever actually performs HTTP. Both outbound calls
//! the form makes (DaData suggestions, webhook delivery) are single JSON `POST`s with a
//! timeout, so the trait is exactly that one operation.
//!
//! - [`ReqwestTransport`] - native implementation on `reqwest`
//! - `address_form::services::http::FetchTransport` - browser implementation on `gloo-net`
//!
//! Tests use a recording transport to assert how many requests were made.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::TransportError;

/// A JSON `POST` ready to go out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub timeout: Duration,
}

impl HttpRequest {
    /// A request carrying `body` as `application/json`.
    pub fn json(url: impl Into<String>, body: String, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ],
            body,
            timeout,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Whatever came back, regardless of status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Combine a received status with the outcome of reading the body.
    ///
    /// An error status survives a failed body read, with an empty body, so callers still see
    /// the rejection. A 2xx with an unreadable body stays an error.
    pub fn from_body_read(status: u16, body: Result<String, TransportError>) -> Result<Self, TransportError> {
        match body {
            Ok(body) => Ok(Self { status, body }),
            Err(err) if !(200..300).contains(&status) => {
                tracing::warn!(status, error = %err, "Dropping unreadable body of error response");
                Ok(Self {
                    status,
                    body: String::new(),
                })
            }
            Err(err) => Err(err),
        }
    }
}

/// Performs one JSON `POST`.
///
/// Implementations return `Ok` for every response that carries a status, 4xx and 5xx
/// included. [`TransportError::NoResponse`] is reserved for network failures and timeouts.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn post_json(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;
    use reqwest::Client;

    /// `reqwest`-backed transport. The timeout is applied per request.
    #[derive(Clone, Default)]
    pub struct ReqwestTransport {
        client: Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Result<Self, TransportError> {
            let client = Client::builder()
                .build()
                .map_err(|e| TransportError::Other(format!("Failed to build HTTP client: {}", e)))?;
            Ok(Self { client })
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for ReqwestTransport {
        async fn post_json(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let mut builder = self
                .client
                .post(&request.url)
                .timeout(request.timeout)
                .body(request.body);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            let response = builder.send().await.map_err(classify)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(classify);

            HttpResponse::from_body_read(status, body)
        }
    }

    fn classify(err: reqwest::Error) -> TransportError {
        if err.is_builder() {
            TransportError::Other(err.to_string())
        } else if err.is_timeout() || err.is_connect() || err.is_request() {
            TransportError::NoResponse(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let length = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Accept one connection, capture the request, answer with `response`.
    async fn serve_once(response: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });
        (format!("http://{}/webhook", addr), handle)
    }

    #[tokio::test]
    async fn test_posts_json_and_returns_body() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 11\r\nConnection: close\r\n\r\n{\"ok\":true}",
        )
        .await;

        let transport = ReqwestTransport::new().unwrap();
        let request = HttpRequest::json(url, r#"{"a":1}"#.to_string(), Duration::from_secs(5));
        let response = transport.post_json(request).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"ok":true}"#);

        let seen = server.await.unwrap();
        assert!(seen.starts_with("POST /webhook HTTP/1.1"));
        assert!(seen.to_lowercase().contains("content-type: application/json"));
        assert!(seen.ends_with(r#"{"a":1}"#));
    }

    #[tokio::test]
    async fn test_error_status_is_a_response() {
        let (url, _server) = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;

        let transport = ReqwestTransport::new().unwrap();
        let request = HttpRequest::json(url, "{}".to_string(), Duration::from_secs(5));
        let response = transport.post_json(request).await.unwrap();

        assert_eq!(response.status, 500);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_truncated_error_body_keeps_status() {
        let (url, _server) = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 100\r\nConnection: close\r\n\r\nshort",
        )
        .await;

        let transport = ReqwestTransport::new().unwrap();
        let request = HttpRequest::json(url, "{}".to_string(), Duration::from_secs(5));
        let response = transport.post_json(request).await.unwrap();

        assert_eq!(response.status, 503);
        assert_eq!(response.body, "");
    }

    #[test]
    fn test_body_read_failure() {
        let broken = || Err(TransportError::Other("connection reset".into()));

        let rejected = HttpResponse::from_body_read(502, broken()).unwrap();
        assert_eq!(rejected.status, 502);
        assert!(!rejected.is_success());

        assert_eq!(
            HttpResponse::from_body_read(200, broken()),
            Err(TransportError::Other("connection reset".into()))
        );
        assert_eq!(
            HttpResponse::from_body_read(404, Ok("gone".into())).unwrap().body,
            "gone"
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_no_response() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = ReqwestTransport::new().unwrap();
        let request = HttpRequest::json(
            format!("http://{}/webhook", addr),
            "{}".to_string(),
            Duration::from_secs(5),
        );

        let err = transport.post_json(request).await.unwrap_err();
        assert!(matches!(err, TransportError::NoResponse(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_timeout_is_no_response() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });

        let transport = ReqwestTransport::new().unwrap();
        let request = HttpRequest::json(
            format!("http://{}/webhook", addr),
            "{}".to_string(),
            Duration::from_millis(200),
        );

        let err = transport.post_json(request).await.unwrap_err();
        assert!(matches!(err, TransportError::NoResponse(_)), "got {:?}", err);
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = HttpRequest::json("http://x", String::new(), Duration::from_secs(1))
            .with_header("Authorization", "Token abc");
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("AUTHORIZATION"), Some("Token abc"));
        assert_eq!(request.header("x-missing"), None);
    }
}
