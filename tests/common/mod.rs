//! In-process mock of the provenance backend
//!
//! Serves canned `(status, body)` responses keyed by method and path, and records every
//! request it receives.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use serde_json::{json, Value};

/// Request as seen by the mock backend
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub api_key: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn body_json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Clone, Default)]
pub struct MockBackend {
    routes: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` with `status` and a raw body
    pub fn respond(&self, method: &str, path: &str, status: u16, body: impl Into<String>) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body.into()));
        self
    }

    /// Answer `method path` with `200` and a JSON body
    pub fn ok(&self, method: &str, path: &str, body: Value) -> &Self {
        self.respond(method, path, 200, body.to_string())
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Serve on an ephemeral port and return the base URL
    pub async fn spawn(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().fallback(handle).with_state(self.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }
}

async fn handle(
    State(backend): State<MockBackend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    backend.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        api_key: header_value("x-api-key"),
        content_type: header_value("content-type"),
        body: body.to_vec(),
    });

    let route = backend
        .routes
        .lock()
        .unwrap()
        .get(&(method.to_string(), uri.path().to_string()))
        .cloned();

    let (status, body) = route.unwrap_or_else(|| {
        (
            404,
            json!({"error": {"code": "NOT_FOUND", "message": "route not mocked"}}).to_string(),
        )
    });

    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}

pub fn batch_json(batch_id: &str, status: &str) -> Value {
    json!({
        "batchId": batch_id,
        "productName": "Vitamin A",
        "supplementType": "capsule",
        "manufacturer": "Acme Labs",
        "productionDate": "2025-01-15",
        "expiresDate": null,
        "status": status
    })
}

pub fn extraction_json(batch_id: &str) -> Value {
    json!({
        "batchId": batch_id,
        "extractedFields": {
            "labName": "Eurofins",
            "reportDate": "2025-02-20",
            "analytes": [{"name": "Vitamin A", "result": "900", "unit": "mcg", "status": "PASS"}],
            "contaminants": [{"name": "Lead", "result": "0.01", "unit": "ppm", "limit": "0.5", "status": "PASS"}],
            "methods": ["HPLC"],
            "confidence": 0.93
        },
        "extractedAt": "2025-03-01T12:00:00Z",
        "modelInfo": {"modelName": "lab-extractor", "version": "2024-12"}
    })
}

pub fn attestation_json(batch_id: &str, hash: &str) -> Value {
    json!({
        "batchId": batch_id,
        "canonicalJson": {"batchId": batch_id, "labName": "Eurofins"},
        "canonicalJsonHash": hash,
        "createdAt": "2025-03-01T12:05:00Z",
        "published": false,
        "chain": "sepolia",
        "txHash": null,
        "publisherAddress": null,
        "publishedAt": null
    })
}
