//! Mock analysis endpoint for exercising the HTTP client end to end.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
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
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }
}

/// A canned response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    pub delay_ms: u64,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::json(
            r#"{"status":"success","results":[{"result":"REAL","confidence":0.9}]}"#,
        )
    }
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
            delay_ms: 0,
        }
    }

    /// Error with a `detail` message, the way the service reports failures.
    pub fn detail(status: u16, detail: &str) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: serde_json::json!({ "detail": detail }).to_string().into_bytes(),
            delay_ms: 0,
        }
    }

    /// Error with a body that is not JSON at all.
    pub fn plain(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/html",
            body: body.as_bytes().to_vec(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

pub struct MockService {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockService {
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
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

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub async fn enqueue(&self, resp: MockResponse) {
        self.state.responses.lock().await.push_back(resp);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }

    /// URL of the analyze route on this server.
    pub fn endpoint(&self) -> String {
        format!("http://{}/analyze", self.addr)
    }
}

impl Drop for MockService {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let body = axum::body::to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();

    state
        .requests
        .lock()
        .await
        .push(CapturedRequest { method, path, body });

    let resp = state
        .responses
        .lock()
        .await
        .pop_front()
        .unwrap_or_default();

    if resp.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(resp.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(resp.status).unwrap())
        .header("content-type", resp.content_type)
        .body(Body::from(resp.body))
        .unwrap()
}
