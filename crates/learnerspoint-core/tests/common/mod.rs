//! Mock mail relay for testing form submission.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Form, Router};
use learnerspoint_core::config::RelaySettings;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured submission for assertions.
#[derive(Debug, Clone)]
pub struct CapturedForm {
    pub destination: String,
    /// Decoded `name=value` pairs, in body order
    pub fields: Vec<(String, String)>,
}

impl CapturedForm {
    pub fn field(&self, name: &str) -> Option<String> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }
}

#[derive(Clone)]
struct MockState {
    captured: Arc<Mutex<Vec<CapturedForm>>>,
    status: StatusCode,
    reply: String,
}

/// Relay double listening on a random local port.
pub struct MockRelay {
    pub addr: SocketAddr,
    captured: Arc<Mutex<Vec<CapturedForm>>>,
}

impl MockRelay {
    /// A relay that accepts everything.
    pub async fn accepting() -> Self {
        Self::start(StatusCode::OK, r#"{"success":"true","message":"The form was submitted successfully."}"#).await
    }

    /// A relay that answers with `status` and `reply`.
    pub async fn start(status: StatusCode, reply: &str) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            captured: captured.clone(),
            status,
            reply: reply.to_string(),
        };

        let app = Router::new()
            .route("/ajax/{destination}", post(handle))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, captured }
    }

    /// Relay settings pointing at this mock.
    pub fn settings(&self, destination: &str) -> RelaySettings {
        RelaySettings {
            endpoint: format!("http://{}", self.addr),
            destination: destination.to_string(),
            banner_ms: 5000,
        }
    }

    pub async fn captured(&self) -> Vec<CapturedForm> {
        self.captured.lock().await.clone()
    }
}

async fn handle(
    State(state): State<MockState>,
    Path(destination): Path<String>,
    Form(fields): Form<Vec<(String, String)>>,
) -> (StatusCode, [(&'static str, &'static str); 1], String) {
    state.captured.lock().await.push(CapturedForm { destination, fields });
    (
        state.status,
        [("content-type", "application/json")],
        state.reply.clone(),
    )
}
