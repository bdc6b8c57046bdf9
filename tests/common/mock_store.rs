//! In-memory book store served over HTTP for client tests.
//!
//! Behaves like a json-server collection at `/books` unless a response has
//! been queued, in which case the queued response wins for the next request.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A canned response that overrides the store for one request.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.as_bytes().to_vec(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: format!(r#"{{"error": "{}"}}"#, message).into_bytes(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Default)]
struct Collection {
    records: Vec<Value>,
    next_id: u64,
}

impl Collection {
    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| match &record["id"] {
            Value::Number(number) => number.to_string() == id,
            Value::String(text) => text == id,
            _ => false,
        })
    }

    fn handle(&mut self, method: &str, path: &str, body: &[u8]) -> (u16, Value) {
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        match (method, segments.as_slice()) {
            ("GET", ["books"]) => (200, Value::Array(self.records.clone())),
            ("POST", ["books"]) => {
                let Ok(mut record) = serde_json::from_slice::<Value>(body) else {
                    return (400, json!({ "error": "bad json" }));
                };
                self.next_id += 1;
                record["id"] = json!(self.next_id);
                self.records.push(record.clone());
                (201, record)
            }
            ("GET", ["books", id]) => match self.position(id) {
                Some(index) => (200, self.records[index].clone()),
                None => (404, json!({})),
            },
            ("PUT", ["books", id]) => {
                let Ok(record) = serde_json::from_slice::<Value>(body) else {
                    return (400, json!({ "error": "bad json" }));
                };
                match self.position(id) {
                    Some(index) => {
                        self.records[index] = record.clone();
                        (200, record)
                    }
                    None => (404, json!({})),
                }
            }
            ("DELETE", ["books", id]) => match self.position(id) {
                Some(index) => {
                    self.records.remove(index);
                    (200, json!({}))
                }
                None => (404, json!({})),
            },
            _ => (404, json!({})),
        }
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    collection: Arc<Mutex<Collection>>,
}

/// Mock store for testing.
pub struct MockStore {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockStore {
    /// Start an empty store.
    pub async fn start() -> Self {
        Self::start_with(Vec::new()).await
    }

    /// Start a store holding `records`. New ids continue after the largest numeric id.
    pub async fn start_with(records: Vec<Value>) -> Self {
        let next_id = records
            .iter()
            .filter_map(|record| record["id"].as_u64())
            .max()
            .unwrap_or(0);
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
            collection: Arc::new(Mutex::new(Collection { records, next_id })),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Enqueue a response to be returned for the next request.
    pub async fn enqueue_response(&self, resp: MockResponse) {
        self.state.responses.lock().await.push_back(resp);
    }

    /// Get all captured requests.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }

    /// Current contents of the collection.
    pub async fn records(&self) -> Vec<Value> {
        self.state.collection.lock().await.records.clone()
    }

    /// Get the base URL for this mock server.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockStore {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let headers: Vec<(String, String)> = req
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();

    let body_bytes = axum::body::to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();

    state.requests.lock().await.push(CapturedRequest {
        method: method.clone(),
        path: path.clone(),
        headers,
        body: body_bytes.clone(),
    });

    let queued = state.responses.lock().await.pop_front();
    let (status, body, delay_ms) = match queued {
        Some(resp) => (resp.status, resp.body, resp.delay_ms),
        None => {
            let (status, value) = state
                .collection
                .lock()
                .await
                .handle(&method, &path, &body_bytes);
            (status, value.to_string().into_bytes(), 0)
        }
    };

    if delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}
