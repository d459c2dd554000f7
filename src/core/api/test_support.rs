//! In-process mock of the Golf Genius API for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, Method, Response, StatusCode, Uri};
use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

use super::auth::{AuthMode, AuthRouter};
use super::client::{ApiClient, RetryPolicy};
use super::connection::{SharedConnection, Timeouts};

pub const TEST_KEY: &str = "test-api-key-12345";

/// A canned upstream response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: String,
    delay: Option<Duration>,
}

impl MockResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            headers: vec![("content-type".to_string(), "text/plain".to_string())],
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn status(status: u16) -> Self {
        Self::text(status, "")
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// A request as seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }
}

#[derive(Default)]
struct MockState {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Serves queued responses in order; the last one repeats once the queue drains.
pub struct MockUpstream {
    pub base_url: String,
    state: Arc<MockState>,
    server: tokio::task::JoinHandle<()>,
}

impl MockUpstream {
    pub async fn start(responses: Vec<MockResponse>) -> Self {
        let state = Arc::new(MockState {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(handle).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local_addr");
        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
            server,
        }
    }

    /// A base URL nothing is listening on.
    pub async fn closed_base_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local_addr");
        drop(listener);
        format!("http://{addr}")
    }

    /// A base URL whose listener answers every connection with non-HTTP bytes.
    pub async fn garbage_base_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local_addr");
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let _ = socket.write_all(b"NOT HTTP AT ALL\r\n\r\n").await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}")
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response<Body> {
    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body,
    });

    let canned = {
        let mut responses = state.responses.lock().unwrap();
        if responses.len() > 1 {
            responses.pop_front()
        } else {
            responses.front().cloned()
        }
    };
    let canned = canned.unwrap_or_else(|| MockResponse::status(200));

    if let Some(delay) = canned.delay {
        tokio::time::sleep(delay).await;
    }

    let mut builder = Response::builder()
        .status(StatusCode::from_u16(canned.status).expect("status"));
    for (name, value) in &canned.headers {
        builder = builder.header(name, value);
    }
    builder.body(Body::from(canned.body)).expect("response")
}

fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        initial_backoff: Duration::from_millis(1),
        max_backoff: Duration::from_millis(5),
    }
}

/// Client pointed at `base_url` with millisecond backoff.
pub fn test_client(base_url: &str) -> ApiClient {
    test_client_with_timeout(base_url, Duration::from_secs(5))
}

pub fn test_client_with_timeout(base_url: &str, request: Duration) -> ApiClient {
    ApiClient::new(
        SharedConnection::new(Timeouts {
            connect: Duration::from_secs(2),
            request,
        }),
        AuthRouter::new(base_url, "api_v2", TEST_KEY, AuthMode::PathKey),
        fast_retry(),
    )
}
