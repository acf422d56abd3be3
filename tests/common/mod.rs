//! In-process stand-in for the Sparkle API
//!
//! Tenant names select the behavior:
//! - `slow` never answers within a test's lifetime
//! - `missing` answers 404 with a Sparkle error body
//! - `broken` answers 200 with a JSON array
//! - `sparkle` answers with desired/current entities
//! - anything else answers `{"count": 3}`

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

#[derive(Clone, Default)]
pub struct MockSparkle {
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockSparkle {
    /// Start the mock on an ephemeral port and return its base URL
    pub async fn start() -> (Self, String) {
        let mock = MockSparkle::default();
        let app = Router::new()
            .route("/tenant/{tenant}/instance/", get(collection))
            .route("/tenant/{tenant}/cluster/", get(collection))
            .with_state(mock.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (mock, format!("http://{}", addr))
    }

    /// Paths requested so far, in arrival order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn collection(State(mock): State<MockSparkle>, uri: Uri) -> Response {
    let path = uri.path().to_string();
    mock.requests.lock().unwrap().push(path.clone());

    let tenant = path.split('/').nth(2).unwrap_or_default().to_string();
    match tenant.as_str() {
        "slow" => {
            tokio::time::sleep(Duration::from_secs(300)).await;
            Json(json!({"late": true})).into_response()
        }
        "missing" => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "tenant not found", "path": ["tenant", "missing"]})),
        )
            .into_response(),
        "broken" => Json(json!([1, 2, 3])).into_response(),
        "sparkle" => Json(json!({
            "9f1c": {
                "desired": {"name": "web-1", "cores": 2},
                "current": {"name": "web-1", "state": "running"}
            },
            "a07e": {
                "desired": {"name": "db-1", "cores": 4}
            }
        }))
        .into_response(),
        _ => Json(json!({"count": 3})).into_response(),
    }
}
