//! HTTP client tests against the mock backend

mod common;

use common::{attestation_json, batch_json, MockBackend};
use provenance_console::api::{
    ApiClient, ApiError, BatchCreate, BatchStatus, DocumentUpload, ProvenanceApi,
    GENERIC_FAILURE_MESSAGE,
};
use serde_json::json;

fn payload(batch_id: &str) -> BatchCreate {
    BatchCreate {
        batch_id: batch_id.to_string(),
        product_name: "Vitamin A".to_string(),
        supplement_type: "capsule".to_string(),
        manufacturer: "Acme Labs".to_string(),
        production_date: "2025-01-15".to_string(),
        expires_date: None,
    }
}

#[tokio::test]
async fn test_create_batch_sends_json_and_key() {
    let backend = MockBackend::new();
    backend.ok("POST", "/batches", batch_json("VA-1", "DRAFT"));
    let client = ApiClient::new(Some(&backend.spawn().await));

    let batch = client.create_batch(&payload("VA-1"), "admin-key").await.unwrap();
    assert_eq!(batch.batch_id, "VA-1");
    assert_eq!(batch.status, BatchStatus::Draft);

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].api_key.as_deref(), Some("admin-key"));
    assert!(requests[0]
        .content_type
        .as_deref()
        .unwrap_or_default()
        .starts_with("application/json"));
    assert_eq!(requests[0].body_json()["expiresDate"], json!(null));
    assert_eq!(requests[0].body_json()["productName"], json!("Vitamin A"));
}

#[tokio::test]
async fn test_trailing_slash_base_url() {
    let backend = MockBackend::new();
    backend.ok("GET", "/batches/VA-1", batch_json("VA-1", "READY"));
    let base = format!("{}/", backend.spawn().await);
    let client = ApiClient::new(Some(&base));

    let batch = client.get_batch("VA-1", "admin-key").await.unwrap();
    assert_eq!(batch.status, BatchStatus::Ready);
    assert_eq!(backend.requests()[0].path, "/batches/VA-1");
}

#[tokio::test]
async fn test_upload_is_multipart_file_field() {
    let backend = MockBackend::new();
    backend.ok("POST", "/batches/VA-1/documents", json!({"documentId": "doc-7"}));
    let client = ApiClient::new(Some(&backend.spawn().await));

    let document = DocumentUpload::new("report.pdf", b"%PDF-1.7 test".to_vec());
    let ack = client.upload_document("VA-1", &document, "admin-key").await.unwrap();
    assert_eq!(ack["documentId"], "doc-7");

    let request = &backend.requests()[0];
    assert_eq!(request.api_key.as_deref(), Some("admin-key"));
    assert!(request
        .content_type
        .as_deref()
        .unwrap_or_default()
        .starts_with("multipart/form-data"));

    let body = request.body_text();
    assert!(body.contains(r#"name="file""#));
    assert!(body.contains(r#"filename="report.pdf""#));
    assert!(body.contains("application/pdf"));
    assert!(body.contains("%PDF-1.7 test"));
}

#[tokio::test]
async fn test_verify_sends_no_api_key() {
    let backend = MockBackend::new();
    backend.ok(
        "GET",
        "/batches/VA-1/verify",
        json!({"verified": true, "batchId": "VA-1", "offchainHash": "0xabc", "onchainHash": "0xabc"}),
    );
    let client = ApiClient::new(Some(&backend.spawn().await));

    let result = client.verify_batch("VA-1").await.unwrap();
    assert!(result.verified);
    assert_eq!(backend.requests()[0].api_key, None);
}

#[tokio::test]
async fn test_admin_routes_and_methods() {
    let backend = MockBackend::new();
    backend
        .ok("POST", "/batches/VA-1/extract", common::extraction_json("VA-1"))
        .ok("GET", "/batches/VA-1/attestation", attestation_json("VA-1", "0xhash"))
        .ok("POST", "/batches/VA-1/publish", json!({"txHash": "0xtx"}));
    let client = ApiClient::new(Some(&backend.spawn().await));

    let extraction = client.extract_batch("VA-1", "k").await.unwrap();
    assert_eq!(extraction.model_info.model_name, "lab-extractor");

    let attestation = client.get_attestation("VA-1", "k").await.unwrap();
    assert_eq!(attestation.canonical_json_hash, "0xhash");

    let receipt = client.publish_batch("VA-1", "k").await.unwrap();
    assert_eq!(receipt["txHash"], "0xtx");

    let seen: Vec<_> = backend
        .requests()
        .into_iter()
        .map(|r| format!("{} {}", r.method, r.path))
        .collect();
    assert_eq!(
        seen,
        vec![
            "POST /batches/VA-1/extract",
            "GET /batches/VA-1/attestation",
            "POST /batches/VA-1/publish",
        ]
    );
}

#[tokio::test]
async fn test_error_envelope_message() {
    let backend = MockBackend::new();
    backend.respond(
        "POST",
        "/batches",
        409,
        json!({"error": {"code": "BATCH_EXISTS", "message": "batch exists", "details": {}}}).to_string(),
    );
    let client = ApiClient::new(Some(&backend.spawn().await));

    let err = client.create_batch(&payload("VA-1"), "k").await.unwrap_err();
    assert_eq!(err.to_string(), "batch exists");
    match err {
        ApiError::Status { status, code, .. } => {
            assert_eq!(status, 409);
            assert_eq!(code.as_deref(), Some("BATCH_EXISTS"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_unparsable_error_body_uses_generic_message() {
    let backend = MockBackend::new();
    backend.respond("POST", "/batches/VA-1/publish", 500, "Internal Server Error");
    let client = ApiClient::new(Some(&backend.spawn().await));

    let err = client.publish_batch("VA-1", "k").await.unwrap_err();
    assert_eq!(err.to_string(), GENERIC_FAILURE_MESSAGE);
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_success_with_wrong_shape_is_decode_error() {
    let backend = MockBackend::new();
    backend.ok("GET", "/batches/VA-1/attestation", json!({"unexpected": true}));
    let client = ApiClient::new(Some(&backend.spawn().await));

    let err = client.get_attestation("VA-1", "k").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // Bind and drop a listener to get a port nothing is serving on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(Some(&format!("http://{}", addr)));
    let err = client.verify_batch("VA-1").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
