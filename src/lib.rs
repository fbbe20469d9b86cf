//! Provenance Console: admin and verification client for supplement batch provenance
//!
//! This library drives a provenance backend that records supplement batches, ingests
//! their lab reports, produces a hashed attestation and publishes that hash to a public
//! ledger. It provides:
//!
//! - a typed HTTP client for the backend ([`api`])
//! - the guarded five-step admin pipeline with its activity log ([`pipeline`])
//! - the public verification view ([`verify`])
//!
//! # Example
//!
//! ```no_run
//! use provenance_console::{AdminPipeline, ApiClient, Result};
//! use provenance_console::api::DocumentUpload;
//! use provenance_console::pipeline::BatchForm;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ApiClient::new(Some("http://localhost:8000"));
//!     let pipeline = AdminPipeline::new(client);
//!
//!     pipeline.set_api_key("admin-key").await;
//!     pipeline
//!         .set_form(BatchForm {
//!             batch_id: "VA-2025-0001".to_string(),
//!             product_name: "Vitamin A".to_string(),
//!             supplement_type: "capsule".to_string(),
//!             manufacturer: "Acme Labs".to_string(),
//!             production_date: "2025-01-15".to_string(),
//!             expires_date: String::new(),
//!         })
//!         .await;
//!     pipeline
//!         .select_file(Some(DocumentUpload::from_path(Path::new("report.pdf")).await?))
//!         .await;
//!
//!     // Create, upload, extract, fetch the attestation and publish
//!     pipeline.run_all().await?;
//!
//!     Ok(())
//! }
//! ```

// Public modules
pub mod api;
pub mod common;
pub mod config;
pub mod pipeline;
pub mod ui;
pub mod verify;

// Re-export commonly used structures and functions for convenience
pub use api::{ApiClient, ApiError, ProvenanceApi};
pub use common::{ConsoleError, Result};
pub use config::ConsoleConfig;
pub use pipeline::AdminPipeline;
pub use verify::VerifyView;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
