//! HTTP client for the provenance backend
//!
//! Thin `reqwest` wrapper: one request per operation, JSON in and out, the API key in
//! the `X-API-Key` header on privileged routes.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{
    Acknowledgement, Attestation, Batch, BatchCreate, DocumentUpload, ExtractionResponse,
    VerificationResult,
};
use crate::api::ProvenanceApi;
use crate::config::{normalize_base_url, ConsoleConfig};

/// Header carrying the admin API key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Provenance backend client
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl ApiClient {
    /// Create a client for the given base URL
    ///
    /// A trailing `/` is stripped; `None` or an empty value keeps request paths relative.
    pub fn new(base_url: Option<&str>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.and_then(normalize_base_url),
        }
    }

    /// Create a client from the console configuration
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self::new(config.api_base_url().as_deref())
    }

    /// Configured base URL, if any
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Join the base URL and a request path
    pub fn build_url(&self, path: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{}{}", base, path),
            None => path.to_string(),
        }
    }

    fn request(&self, method: Method, path: &str, api_key: Option<&str>) -> ApiResult<RequestBuilder> {
        let raw = self.build_url(path);
        let url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))?;

        debug!("{} {}", method, url);

        let builder = self.http.request(method, url);
        Ok(match api_key {
            Some(key) => builder.header(API_KEY_HEADER, key),
            None => builder,
        })
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder, path: &str) -> ApiResult<T> {
        let response = builder.send().await.map_err(|e| {
            warn!("Request to {} failed: {}", path, e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        // An unreadable error body still yields the generic failure message.
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(ApiError::Transport(e)),
            Err(_) => Default::default(),
        };

        if !status.is_success() {
            let err = ApiError::from_response(status.as_u16(), &body);
            warn!("{} returned {}: {}", path, status, err);
            return Err(err);
        }

        serde_json::from_slice(&body).map_err(|e| {
            warn!("Unexpected response body from {}: {}", path, e);
            ApiError::Decode(e.to_string())
        })
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(None)
    }
}

fn batch_path(batch_id: &str, action: &str) -> String {
    format!("/batches/{}/{}", batch_id, action)
}

#[async_trait]
impl ProvenanceApi for ApiClient {
    async fn create_batch(&self, payload: &BatchCreate, api_key: &str) -> ApiResult<Batch> {
        let path = "/batches";
        let builder = self.request(Method::POST, path, Some(api_key))?.json(payload);
        self.execute(builder, path).await
    }

    async fn get_batch(&self, batch_id: &str, api_key: &str) -> ApiResult<Batch> {
        let path = format!("/batches/{}", batch_id);
        let builder = self.request(Method::GET, &path, Some(api_key))?;
        self.execute(builder, &path).await
    }

    async fn upload_document(
        &self,
        batch_id: &str,
        document: &DocumentUpload,
        api_key: &str,
    ) -> ApiResult<Acknowledgement> {
        let path = batch_path(batch_id, "documents");
        let part = Part::bytes(document.bytes.clone())
            .file_name(document.file_name.clone())
            .mime_str(&document.content_type)?;
        let form = Form::new().part("file", part);

        let builder = self.request(Method::POST, &path, Some(api_key))?.multipart(form);
        self.execute(builder, &path).await
    }

    async fn extract_batch(&self, batch_id: &str, api_key: &str) -> ApiResult<ExtractionResponse> {
        let path = batch_path(batch_id, "extract");
        let builder = self.request(Method::POST, &path, Some(api_key))?;
        self.execute(builder, &path).await
    }

    async fn get_attestation(&self, batch_id: &str, api_key: &str) -> ApiResult<Attestation> {
        let path = batch_path(batch_id, "attestation");
        let builder = self.request(Method::GET, &path, Some(api_key))?;
        self.execute(builder, &path).await
    }

    async fn publish_batch(&self, batch_id: &str, api_key: &str) -> ApiResult<Acknowledgement> {
        let path = batch_path(batch_id, "publish");
        let builder = self.request(Method::POST, &path, Some(api_key))?;
        self.execute(builder, &path).await
    }

    async fn verify_batch(&self, batch_id: &str) -> ApiResult<VerificationResult> {
        let path = batch_path(batch_id, "verify");
        let builder = self.request(Method::GET, &path, None)?;
        self.execute(builder, &path).await
    }
}
