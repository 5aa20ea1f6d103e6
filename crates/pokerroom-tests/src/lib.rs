//! Integration-test harness for the poker room client.
//!
//! [`MockServer`] is a local HTTP server that records every request it
//! receives (method, path, query, headers, body) and replies with a
//! configurable canned JSON response. The suites under `tests/` drive the
//! client against it and assert the recorded wire traffic.

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use pokerroom_client::Session;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// One request as the mock server saw it on the wire.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Parses the recorded body as JSON, if there is one.
    #[must_use]
    pub fn body_json(&self) -> Option<serde_json::Value> {
        serde_json::from_slice(&self.body).ok()
    }

    /// Returns a recorded header value as a string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }
}

#[derive(Debug, Clone)]
struct CannedResponse {
    headers: HeaderMap,
    body: String,
}

impl Default for CannedResponse {
    fn default() -> Self {
        Self {
            headers: HeaderMap::new(),
            body: r#"{"Status":"Ok"}"#.to_string(),
        }
    }
}

#[derive(Clone, Default)]
struct ServerState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    response: Arc<Mutex<CannedResponse>>,
}

async fn capture(
    State(state): State<ServerState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    state
        .requests
        .lock()
        .expect("requests lock")
        .push(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            headers,
            body: body.to_vec(),
        });

    let canned = state.response.lock().expect("response lock").clone();
    let mut resp_headers = canned.headers;
    resp_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    (StatusCode::OK, resp_headers, canned.body)
}

/// Recording mock server for one test.
pub struct MockServer {
    addr: SocketAddr,
    state: ServerState,
}

impl MockServer {
    /// Binds to an ephemeral local port and starts serving.
    pub async fn start() -> Self {
        let state = ServerState::default();
        let app = Router::new().fallback(capture).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, state }
    }

    /// Base address the client should be pointed at.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Replaces the canned response body.
    pub fn respond_with(&self, body: &str) {
        self.state.response.lock().expect("response lock").body = body.to_string();
    }

    /// Adds a header to the canned response.
    pub fn respond_with_header(&self, name: &str, value: &str) {
        let name = HeaderName::from_bytes(name.as_bytes()).expect("header name");
        let value = HeaderValue::from_str(value).expect("header value");
        self.state
            .response
            .lock()
            .expect("response lock")
            .headers
            .insert(name, value);
    }

    /// All requests recorded so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("requests lock").clone()
    }

    /// Number of requests recorded so far.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.state.requests.lock().expect("requests lock").len()
    }

    /// The most recent recorded request. Panics if nothing was recorded.
    #[must_use]
    pub fn last_request(&self) -> RecordedRequest {
        self.requests().last().cloned().expect("no request recorded")
    }
}

/// Creates a session for tests.
///
/// # Panics
/// Panics if the HTTP client cannot be built.
#[must_use]
pub fn test_session() -> Session {
    Session::with_defaults().expect("Failed to create session")
}
