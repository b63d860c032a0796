//! Local mock of the remote login endpoint for native async tests.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::{StatusCode, header};
use axum::routing::post;

/// A running mock API. `api_url` is the base URL to hand to `ApiConfig`.
pub struct MockLoginServer {
    pub api_url: String,
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl MockLoginServer {
    /// JSON bodies received on `/api/login/`, in arrival order.
    pub fn requests(&self) -> Vec<serde_json::Value> {
        self.requests.lock().unwrap().clone()
    }
}

/// Serve `POST /api/login/` answering every request with `status` and `body`.
pub async fn spawn_login_server(status: StatusCode, body: impl Into<String>) -> MockLoginServer {
    let body: String = body.into();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    let app = Router::new().route(
        "/api/login/",
        post(move |axum::Json(req): axum::Json<serde_json::Value>| {
            let recorded = recorded.clone();
            let body = body.clone();
            async move {
                recorded.lock().unwrap().push(req);
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockLoginServer { api_url: format!("http://{addr}/api"), requests }
}
