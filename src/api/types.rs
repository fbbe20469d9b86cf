//! API Data Types
//!
//! Wire types for the provenance backend. Field names follow the backend's camelCase
//! JSON; timestamps and dates are kept as the strings the backend sends.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Opaque backend acknowledgement (upload and publish responses)
pub type Acknowledgement = serde_json::Value;

/// Payload for `POST /batches`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BatchCreate {
    pub batch_id: String,
    pub product_name: String,
    pub supplement_type: String,
    pub manufacturer: String,
    /// ISO date (`YYYY-MM-DD`)
    pub production_date: String,
    /// ISO date; serialized as `null` when absent
    pub expires_date: Option<String>,
}

/// Batch lifecycle status, assigned by the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    Draft,
    Ready,
    Published,
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchStatus::Draft => write!(f, "DRAFT"),
            BatchStatus::Ready => write!(f, "READY"),
            BatchStatus::Published => write!(f, "PUBLISHED"),
        }
    }
}

/// Batch record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub batch_id: String,
    pub product_name: String,
    pub supplement_type: String,
    pub manufacturer: String,
    pub production_date: String,
    #[serde(default)]
    pub expires_date: Option<String>,
    pub status: BatchStatus,
}

/// Outcome of a single lab check
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    Pass,
    Fail,
    #[default]
    Unknown,
}

/// Potency claim found in the report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Potency {
    pub name: Option<String>,
    pub amount: Option<String>,
    pub unit: Option<String>,
}

/// Analyte or contaminant line from the report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AnalyteResult {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub status: CheckStatus,
}

/// Structured fields extracted from a lab report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFields {
    #[serde(default)]
    pub lab_name: Option<String>,
    #[serde(default)]
    pub report_date: Option<String>,
    #[serde(default)]
    pub product_or_sample_name: Option<String>,
    #[serde(default)]
    pub lot_or_batch_in_report: Option<String>,
    #[serde(default)]
    pub potency: Option<Potency>,
    #[serde(default)]
    pub analytes: Vec<AnalyteResult>,
    #[serde(default)]
    pub contaminants: Vec<AnalyteResult>,
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Model confidence in `0.0..=1.0`
    pub confidence: f64,
}

/// Extraction model identification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub model_name: String,
    pub version: String,
}

/// Response of `POST /batches/{id}/extract`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResponse {
    pub batch_id: String,
    pub extracted_fields: ExtractedFields,
    pub extracted_at: String,
    pub model_info: ModelInfo,
}

impl ExtractionResponse {
    /// Checks (analytes and contaminants) that did not pass
    pub fn failed_checks(&self) -> impl Iterator<Item = &AnalyteResult> {
        self.extracted_fields
            .analytes
            .iter()
            .chain(self.extracted_fields.contaminants.iter())
            .filter(|check| check.status == CheckStatus::Fail)
    }
}

/// Attestation record: canonical JSON plus its hash and publication state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attestation {
    pub batch_id: String,
    pub canonical_json: serde_json::Map<String, serde_json::Value>,
    pub canonical_json_hash: String,
    pub created_at: String,
    pub published: bool,
    pub chain: String,
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub publisher_address: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

/// Response of `GET /batches/{id}/verify`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub verified: bool,
    #[serde(default)]
    pub batch_id: String,
    #[serde(default)]
    pub offchain_hash: String,
    #[serde(default)]
    pub onchain_hash: Option<String>,
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub mismatch_reason: Option<String>,
}

/// Lab-report file selected for upload
#[derive(Clone, PartialEq, Eq)]
pub struct DocumentUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    /// Content type used when none is given
    pub const DEFAULT_CONTENT_TYPE: &'static str = "application/pdf";

    /// Build an upload from in-memory bytes
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: Self::DEFAULT_CONTENT_TYPE.to_string(),
            bytes,
        }
    }

    /// Read a file from disk
    pub async fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document.pdf".to_string());

        Ok(Self::new(file_name, bytes))
    }
}

// File contents stay out of log output.
impl fmt::Debug for DocumentUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
