//! Verification view over HTTP against the mock backend

mod common;

use common::MockBackend;
use provenance_console::api::ApiClient;
use provenance_console::verify::{BadgeStatus, VerifyView};
use serde_json::json;

#[tokio::test]
async fn test_verified_batch_with_explorer_link() {
    let backend = MockBackend::new();
    backend.ok(
        "GET",
        "/batches/VA-2025-0001/verify",
        json!({
            "verified": true,
            "batchId": "VA-2025-0001",
            "offchainHash": "0xaaaaaaaaaaaaaaaa1111",
            "onchainHash": "0xaaaaaaaaaaaaaaaa1111",
            "txHash": "0xbbbbbbbbbbbbbbbb2222",
            "mismatchReason": null
        }),
    );
    let client = ApiClient::new(Some(&backend.spawn().await));

    let mut view = VerifyView::new(client)
        .with_explorer(Some("https://sepolia.etherscan.io/tx".to_string()));
    view.set_batch_id("VA-2025-0001");
    view.submit().await;

    assert_eq!(view.badge(), Some(BadgeStatus::Verified));
    let rendered = view.result_card().to_string();
    assert!(rendered.contains("Verified ✅"));
    assert!(rendered.contains("Off-chain Hash: 0xaaaa…1111"));
    assert!(rendered.contains("(https://sepolia.etherscan.io/tx/0xbbbbbbbbbbbbbbbb2222)"));
    assert_eq!(backend.requests()[0].api_key, None);
}

#[tokio::test]
async fn test_unknown_batch_shows_backend_message() {
    let backend = MockBackend::new();
    backend.respond(
        "GET",
        "/batches/NOPE/verify",
        404,
        json!({"error": {"code": "BATCH_NOT_FOUND", "message": "Batch 'NOPE' not found"}}).to_string(),
    );
    let client = ApiClient::new(Some(&backend.spawn().await));

    let mut view = VerifyView::new(client);
    view.set_batch_id("NOPE");
    view.submit().await;

    assert_eq!(view.error(), Some("Batch 'NOPE' not found"));
    assert!(view.result().is_none());
    assert!(!view.is_loading());
}

#[tokio::test]
async fn test_not_yet_published() {
    let backend = MockBackend::new();
    backend.ok(
        "GET",
        "/batches/VA-7/verify",
        json!({"verified": false, "batchId": "VA-7", "offchainHash": "0xabc", "onchainHash": null}),
    );
    let client = ApiClient::new(Some(&backend.spawn().await));

    let mut view = VerifyView::new(client);
    view.set_batch_id("VA-7");
    view.submit().await;

    assert_eq!(view.badge(), Some(BadgeStatus::Unverified));
    let rendered = view.result_card().to_string();
    assert!(rendered.contains("On-chain Hash: Not published"));
    assert!(rendered.contains("Reason: Hashes match"));
}
