//! Provenance backend API module
//!
//! Typed access to the provenance backend's HTTP contract:
//!
//! - `POST /batches` and `GET /batches/{id}` (batch records)
//! - `POST /batches/{id}/documents` (lab-report upload)
//! - `POST /batches/{id}/extract` (extraction)
//! - `GET /batches/{id}/attestation` (attestation payload and hash)
//! - `POST /batches/{id}/publish` (ledger publication)
//! - `GET /batches/{id}/verify` (public verification, no API key)
//!
//! Views depend on the [`ProvenanceApi`] trait; [`ApiClient`] is the HTTP
//! implementation.

pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiClient, API_KEY_HEADER};
pub use error::{ApiError, ApiResult, GENERIC_FAILURE_MESSAGE};
pub use types::{
    Acknowledgement, AnalyteResult, Attestation, Batch, BatchCreate, BatchStatus, CheckStatus,
    DocumentUpload, ExtractedFields, ExtractionResponse, ModelInfo, Potency, VerificationResult,
};

use async_trait::async_trait;

/// Operations offered by the provenance backend
///
/// Each call is a single network round trip: no retries, no timeouts, no caching.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProvenanceApi: Send + Sync {
    /// Create a batch record
    async fn create_batch(&self, payload: &BatchCreate, api_key: &str) -> ApiResult<Batch>;

    /// Fetch a batch record
    async fn get_batch(&self, batch_id: &str, api_key: &str) -> ApiResult<Batch>;

    /// Upload a lab-report document for a batch
    async fn upload_document(
        &self,
        batch_id: &str,
        document: &DocumentUpload,
        api_key: &str,
    ) -> ApiResult<Acknowledgement>;

    /// Run extraction over the batch's uploaded document
    async fn extract_batch(&self, batch_id: &str, api_key: &str) -> ApiResult<ExtractionResponse>;

    /// Fetch the batch's attestation
    async fn get_attestation(&self, batch_id: &str, api_key: &str) -> ApiResult<Attestation>;

    /// Publish the batch's attestation hash to the ledger
    async fn publish_batch(&self, batch_id: &str, api_key: &str) -> ApiResult<Acknowledgement>;

    /// Compare the off-chain and on-chain hashes of a batch
    async fn verify_batch(&self, batch_id: &str) -> ApiResult<VerificationResult>;
}
