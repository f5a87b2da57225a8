#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use elektrik_web::config::Config;
use elektrik_web::content::{self, ContentSource};
use elektrik_web::quote::{QuoteRelay, RelayError, RelayPayload};
use elektrik_web::{app, AppState};

pub const PRIMARY_PHONE: &str = "+380 67 752 31 03";

/// Relay stand-in: records every payload and answers with a fixed status.
pub struct RecordingRelay {
    status: u16,
    delivered: Mutex<Vec<RelayPayload>>,
}

impl RecordingRelay {
    pub fn answering(status: u16) -> Arc<Self> {
        Arc::new(Self {
            status,
            delivered: Mutex::new(Vec::new()),
        })
    }

    pub fn delivered(&self) -> Vec<RelayPayload> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuoteRelay for RecordingRelay {
    async fn deliver(&self, payload: &RelayPayload) -> Result<(), RelayError> {
        self.delivered.lock().unwrap().push(payload.clone());
        if (200..300).contains(&self.status) {
            Ok(())
        } else {
            Err(RelayError::HttpStatus(self.status))
        }
    }
}

pub fn content_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("content")
}

pub fn static_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("static")
}

/// Configuration pointing at the bundled content, with no map key.
pub fn test_config() -> Config {
    let content = content_dir().display().to_string();
    let statics = static_dir().display().to_string();
    Config::from_lookup(|name| match name {
        "HOST" => Some("127.0.0.1".to_string()),
        "PORT" => Some("0".to_string()),
        "CONTENT_SOURCE" => Some(content.clone()),
        "STATIC_DIR" => Some(statics.clone()),
        _ => None,
    })
    .expect("test config should be valid")
}

/// Full application router over the bundled content and the given relay.
pub async fn build_test_app(relay: Arc<RecordingRelay>) -> Router {
    let site = content::load(&ContentSource::Directory(content_dir()))
        .await
        .expect("bundled content should load");
    app(AppState::new(site, relay, test_config()))
}

/// Serve the app on an ephemeral port for tests that need real form posts.
pub async fn spawn_app(relay: Arc<RecordingRelay>) -> SocketAddr {
    let router = build_test_app(relay).await;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    addr
}

/// HTTP client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("client")
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected, "unexpected status");
}
